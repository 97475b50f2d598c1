//! User record model for userdesk.
//!
//! This module defines the `UserRecord` stored in the session and the
//! `Field` enum used by form change events.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account record for a single user.
///
/// The password is kept in plaintext because the credential store is a mock;
/// a real backend would only ever see a hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Email address (lookup key).
    #[serde(default)]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Profile picture URL (optional).
    #[serde(
        default,
        alias = "profilePicture",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_picture_url: Option<String>,
}

impl UserRecord {
    /// Create a new record without a profile picture.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            phone: phone.into(),
            profile_picture_url: None,
        }
    }

    /// Set the profile picture URL.
    pub fn with_profile_picture(mut self, url: impl Into<String>) -> Self {
        self.profile_picture_url = Some(url.into());
        self
    }

    /// Get the current value of a field.
    ///
    /// An unset profile picture reads as an empty string.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Phone => &self.phone,
            Field::ProfilePictureUrl => self.profile_picture_url.as_deref().unwrap_or(""),
        }
    }

    /// Replace the value of a field.
    ///
    /// Setting the profile picture to an empty string clears it.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::Phone => self.phone = value,
            Field::ProfilePictureUrl => {
                self.profile_picture_url = if value.is_empty() { None } else { Some(value) };
            }
        }
    }
}

/// Form field identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Display name.
    Name,
    /// Email address.
    Email,
    /// Password.
    Password,
    /// Phone number.
    Phone,
    /// Profile picture URL.
    ProfilePictureUrl,
}

impl Field {
    /// Input name used by forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::Phone => "phone",
            Field::ProfilePictureUrl => "profilePictureUrl",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::Phone => "Phone Number",
            Field::ProfilePictureUrl => "Profile Picture",
        }
    }

    /// Whether the value should be masked when displayed.
    pub fn is_secret(&self) -> bool {
        matches!(self, Field::Password)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            "phone" => Ok(Field::Phone),
            "profilepictureurl" | "picture" => Ok(Field::ProfilePictureUrl),
            _ => Err(format!("unknown field: {s}")),
        }
    }
}
