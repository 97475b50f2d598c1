//! Login flow controller.

use tracing::{info, warn};

use crate::auth::credentials::CredentialStore;
use crate::auth::flow::{AttemptState, FlowError};
use crate::auth::session::SessionStore;
use crate::route::Route;
use crate::user::{Field, UserRecord};
use crate::Result;

/// Fields shown on the login form.
pub const LOGIN_FIELDS: &[Field] = &[Field::Email, Field::Password];

/// Result of a login submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials matched; the session is written.
    Navigate(Route),
    /// Credentials did not match; the form stays with its values.
    Rejected,
}

/// Controller owning the login form state.
#[derive(Debug, Clone, Default)]
pub struct LoginController {
    draft: UserRecord,
    error: Option<FlowError>,
    state: AttemptState,
}

impl LoginController {
    /// Create a controller with an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current form values.
    pub fn draft(&self) -> &UserRecord {
        &self.draft
    }

    /// Current error, if the last attempt failed.
    pub fn error(&self) -> Option<&FlowError> {
        self.error.as_ref()
    }

    /// Current attempt state.
    pub fn state(&self) -> AttemptState {
        self.state
    }

    /// Update a field.
    ///
    /// Only email and password belong to the login form; other fields are
    /// ignored. Any edit clears the error of the previous attempt.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if !LOGIN_FIELDS.contains(&field) {
            return;
        }
        self.draft.set(field, value);
        self.error = None;
        self.state = AttemptState::Idle;
    }

    /// Submit the form.
    ///
    /// On a match the user record is written to `session` and the outcome
    /// navigates to the profile. On a mismatch the uniform
    /// "Invalid email or password" error is set and the session is not
    /// touched.
    pub fn submit<C, S>(&mut self, credentials: &C, session: &mut S) -> Result<LoginOutcome>
    where
        C: CredentialStore + ?Sized,
        S: SessionStore + ?Sized,
    {
        self.state = AttemptState::Submitting;
        self.error = None;

        let Some(user) = credentials.find_user(&self.draft.email, &self.draft.password) else {
            warn!(email = %self.draft.email, "Login failed: invalid credentials");
            self.error = Some(FlowError::Authentication);
            self.state = AttemptState::Failed;
            return Ok(LoginOutcome::Rejected);
        };

        if let Err(e) = session.set(&user) {
            self.state = AttemptState::Idle;
            return Err(e);
        }

        info!(email = %user.email, "Login successful");
        self.state = AttemptState::Success;
        Ok(LoginOutcome::Navigate(Route::Profile))
    }
}
