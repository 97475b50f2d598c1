//! Input validation for userdesk registration.
//!
//! This module provides the client-side checks run before a registration is
//! submitted: required fields, email shape, password length and phone
//! characters.

use thiserror::Error;

use crate::user::UserRecord;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validation errors.
///
/// The display text is the exact message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// One of email, password, name or phone is empty.
    #[error("Please fill in all fields")]
    MissingFields,

    /// Email does not contain `@`.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Password is too short.
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters long")]
    PasswordTooShort,

    /// Phone contains characters other than digits, whitespace, `-`, `(`, `)`
    /// and a single leading `+`.
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// Check that every required registration field is filled.
///
/// Whitespace-only values count as filled.
pub fn validate_required(draft: &UserRecord) -> Result<(), ValidationError> {
    let fields = [&draft.email, &draft.password, &draft.name, &draft.phone];
    if fields.iter().any(|f| f.is_empty()) {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

/// Validate an email address.
///
/// This is intentionally permissive: any value containing `@` passes.
///
/// # Examples
///
/// ```
/// use userdesk::auth::validation::validate_email;
///
/// assert!(validate_email("user@example.com").is_ok());
/// assert!(validate_email("a@b").is_ok());
/// assert!(validate_email("user.example.com").is_err());
/// ```
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate a password length, counted in Unicode scalar values.
///
/// # Examples
///
/// ```
/// use userdesk::auth::validation::validate_password;
///
/// assert!(validate_password("password123").is_ok());
/// assert!(validate_password("short").is_err());
/// ```
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validate a phone number.
///
/// Accepts an optional leading `+` followed by at least one digit,
/// whitespace, `-`, `(` or `)`.
///
/// # Examples
///
/// ```
/// use userdesk::auth::validation::validate_phone;
///
/// assert!(validate_phone("+91 1234567890").is_ok());
/// assert!(validate_phone("(555) 123-4567").is_ok());
/// assert!(validate_phone("555-CALL-NOW").is_err());
/// assert!(validate_phone("+").is_err());
/// ```
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let rest = phone.strip_prefix('+').unwrap_or(phone);

    if rest.is_empty() {
        return Err(ValidationError::InvalidPhone);
    }

    let valid = rest
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'));
    if !valid {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(())
}

/// Validate a registration draft.
///
/// Rules run in a fixed order and the first failure is returned:
/// required fields, email, password, phone.
pub fn validate_registration(draft: &UserRecord) -> Result<(), ValidationError> {
    validate_required(draft)?;
    validate_email(&draft.email)?;
    validate_password(&draft.password)?;
    validate_phone(&draft.phone)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> UserRecord {
        UserRecord::new("John Doe", "john@example.com", "password123", "+91 1234567890")
    }

    #[test]
    fn test_validate_registration_all_valid() {
        assert!(validate_registration(&valid_draft()).is_ok());
    }

    #[test]
    fn test_missing_each_field() {
        for field in ["email", "password", "name", "phone"] {
            let mut draft = valid_draft();
            match field {
                "email" => draft.email.clear(),
                "password" => draft.password.clear(),
                "name" => draft.name.clear(),
                _ => draft.phone.clear(),
            }
            assert_eq!(
                validate_registration(&draft),
                Err(ValidationError::MissingFields),
                "missing {field}"
            );
        }
    }

    #[test]
    fn test_missing_fields_wins_over_other_rules() {
        // Every other rule would also fail here
        let draft = UserRecord::new("", "no-at-sign", "short", "abc");
        assert_eq!(
            validate_registration(&draft),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let draft = UserRecord::new(" ", "a@b", "password123", "123");
        assert!(validate_registration(&draft).is_ok());
    }

    #[test]
    fn test_email_without_at() {
        let mut draft = valid_draft();
        draft.email = "john.example.com".to_string();
        assert_eq!(
            validate_registration(&draft),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_email_wins_over_password() {
        let mut draft = valid_draft();
        draft.email = "invalid".to_string();
        draft.password = "short".to_string();
        assert_eq!(
            validate_registration(&draft),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_email_is_permissive() {
        assert!(validate_email("@").is_ok());
        assert!(validate_email("user@").is_ok());
        assert!(validate_email("user@@example").is_ok());
    }

    #[test]
    fn test_password_too_short() {
        for password in ["a", "1234567", "short"] {
            let mut draft = valid_draft();
            draft.password = password.to_string();
            assert_eq!(
                validate_registration(&draft),
                Err(ValidationError::PasswordTooShort)
            );
        }
    }

    #[test]
    fn test_password_exact_length() {
        assert!(validate_password("12345678").is_ok());
        // Multi-byte characters count once each
        assert!(validate_password("パスワードです！").is_ok());
        assert_eq!(
            validate_password("パスワード"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_password_counts_scalar_values_not_utf16_units() {
        // Four emoji are eight UTF-16 units but only four characters
        assert_eq!(
            validate_password("😀😀😀😀"),
            Err(ValidationError::PasswordTooShort)
        );
        assert!(validate_password("😀😀😀😀😀😀😀😀").is_ok());
    }

    #[test]
    fn test_phone_valid_formats() {
        assert!(validate_phone("1234567890").is_ok());
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
        assert!(validate_phone("555 123 4567").is_ok());
        assert!(validate_phone("-").is_ok());
        assert!(validate_phone("()").is_ok());
    }

    #[test]
    fn test_phone_invalid_chars() {
        for phone in ["555-abc", "12.34", "+1+2", "555#1", "١٢٣", "++1"] {
            let mut draft = valid_draft();
            draft.phone = phone.to_string();
            assert_eq!(
                validate_registration(&draft),
                Err(ValidationError::InvalidPhone),
                "phone {phone:?}"
            );
        }
    }

    #[test]
    fn test_phone_plus_only() {
        assert_eq!(validate_phone("+"), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Please fill in all fields"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Please enter a valid phone number"
        );
    }
}
