//! Shared flow types: attempt state, user-facing errors and notices.

use std::time::Duration;

use thiserror::Error;

use crate::auth::validation::ValidationError;

/// Message shown for any login mismatch.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Message shown when the registration call fails.
pub const REGISTRATION_FAILED_MESSAGE: &str =
    "An error occurred during registration. Please try again.";

/// Message of the notice emitted after a successful registration.
pub const ACCOUNT_CREATED_MESSAGE: &str = "Account created successfully!";

/// User-facing flow errors.
///
/// Every variant ends the current attempt and is cleared by the next edit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// Form input failed a client-side rule.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Email/password mismatch. Never says which one was wrong.
    #[error("{INVALID_CREDENTIALS_MESSAGE}")]
    Authentication,

    /// The remote registration call failed.
    #[error("{REGISTRATION_FAILED_MESSAGE}")]
    Transport,

    /// No current user. Handled by redirecting, never displayed.
    #[error("no active session")]
    SessionAbsent,
}

impl FlowError {
    /// Whether this error should be shown to the user.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, FlowError::SessionAbsent)
    }
}

/// State of a login or registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttemptState {
    /// Waiting for input.
    #[default]
    Idle,
    /// Submission in progress; inputs are disabled.
    Submitting,
    /// Last attempt succeeded.
    Success,
    /// Last attempt failed.
    Failed,
}

/// One-shot notification for the rendering layer.
///
/// The controller only emits it; when to show and hide it is up to the
/// renderer, guided by `display_for`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Text to display.
    pub message: String,
    /// How long the notice should stay visible.
    pub display_for: Duration,
}

impl Notice {
    /// Create a notice.
    pub fn new(message: impl Into<String>, display_for: Duration) -> Self {
        Self {
            message: message.into(),
            display_for,
        }
    }

    /// Notice for a newly created account.
    pub fn account_created(display_for: Duration) -> Self {
        Self::new(ACCOUNT_CREATED_MESSAGE, display_for)
    }
}
