//! Registration flow controller for userdesk.
//!
//! A registration is validated locally, then handed to a
//! [`RegistrationRemote`]. The only remote shipped here is
//! [`SimulatedRemote`], which waits for a fixed delay and succeeds; the new
//! account is not added to the credential store.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::auth::flow::{AttemptState, FlowError, Notice};
use crate::auth::validation::validate_registration;
use crate::route::Route;
use crate::user::{Field, UserRecord};

/// Fields shown on the registration form, in display order.
pub const REGISTRATION_FIELDS: &[Field] =
    &[Field::Name, Field::Email, Field::Password, Field::Phone];

/// Default delay of the simulated remote call.
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1500);

/// Default display time of the success notice.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(2000);

/// Failure of the remote registration call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("registration call failed: {0}")]
pub struct TransportError(pub String);

/// Remote side of a registration.
#[async_trait]
pub trait RegistrationRemote: Send + Sync {
    /// Submit a validated registration.
    async fn register(&self, record: &UserRecord) -> Result<(), TransportError>;
}

/// Remote that waits for a fixed delay and then accepts the registration.
#[derive(Debug, Clone)]
pub struct SimulatedRemote {
    delay: Duration,
}

impl Default for SimulatedRemote {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

impl SimulatedRemote {
    /// Create a remote with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl RegistrationRemote for SimulatedRemote {
    async fn register(&self, record: &UserRecord) -> Result<(), TransportError> {
        debug!(email = %record.email, delay_ms = self.delay.as_millis() as u64, "Simulating registration call");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Result of a registration submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Local validation failed; the error is set.
    Invalid,
    /// A submission is already in flight; nothing happened.
    Busy,
    /// The remote call failed; the error is set.
    Failed,
    /// A result arrived with no submission in flight; nothing happened.
    Stale,
    /// The account was created. Show `notice`, then navigate to `then`.
    Registered {
        /// One-shot success notice.
        notice: Notice,
        /// Route to navigate to once the notice has been shown.
        then: Route,
    },
}

/// Validated registration waiting for the remote call.
///
/// Returned by [`RegistrationController::begin_submit`] and consumed by
/// [`RegistrationController::complete_submit`].
#[derive(Debug)]
pub struct PendingRegistration {
    /// Record to submit.
    pub record: UserRecord,
}

/// Controller owning the registration form state.
#[derive(Debug, Clone)]
pub struct RegistrationController {
    draft: UserRecord,
    error: Option<FlowError>,
    state: AttemptState,
    notice_duration: Duration,
}

impl Default for RegistrationController {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationController {
    /// Create a controller with an empty form.
    pub fn new() -> Self {
        Self::with_notice_duration(DEFAULT_NOTICE_DURATION)
    }

    /// Create a controller whose success notice lasts `duration`.
    pub fn with_notice_duration(duration: Duration) -> Self {
        Self {
            draft: UserRecord::default(),
            error: None,
            state: AttemptState::Idle,
            notice_duration: duration,
        }
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

    /// Whether a submission is in flight (inputs and submit disabled).
    pub fn is_busy(&self) -> bool {
        self.state == AttemptState::Submitting
    }

    /// Update a field.
    ///
    /// Ignored while submitting. Any accepted edit clears the error.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if self.is_busy() || !REGISTRATION_FIELDS.contains(&field) {
            return;
        }
        self.draft.set(field, value);
        self.error = None;
        self.state = AttemptState::Idle;
    }

    /// Validate the draft and enter the submitting state.
    ///
    /// Returns `Err(Invalid)` with the error set when a rule fails, or
    /// `Err(Busy)` when a submission is already running.
    pub fn begin_submit(&mut self) -> Result<PendingRegistration, RegistrationOutcome> {
        if self.is_busy() {
            debug!("Registration submit ignored: already submitting");
            return Err(RegistrationOutcome::Busy);
        }

        if let Err(e) = validate_registration(&self.draft) {
            debug!(error = %e, "Registration rejected by validation");
            self.error = Some(FlowError::Validation(e));
            self.state = AttemptState::Failed;
            return Err(RegistrationOutcome::Invalid);
        }

        self.error = None;
        self.state = AttemptState::Submitting;

        Ok(PendingRegistration {
            record: self.draft.clone(),
        })
    }

    /// Finish a submission with the result of the remote call.
    ///
    /// Leaves the submitting state. A result delivered while no submission
    /// is in flight is dropped and the controller is left as it is.
    pub fn complete_submit(
        &mut self,
        pending: PendingRegistration,
        result: Result<(), TransportError>,
    ) -> RegistrationOutcome {
        if !self.is_busy() {
            debug!(email = %pending.record.email, "Registration result ignored: not submitting");
            return RegistrationOutcome::Stale;
        }

        match result {
            Ok(()) => {
                info!(email = %pending.record.email, name = %pending.record.name, "New account registered");
                self.state = AttemptState::Success;
                RegistrationOutcome::Registered {
                    notice: Notice::account_created(self.notice_duration),
                    then: Route::Login,
                }
            }
            Err(e) => {
                warn!(email = %pending.record.email, error = %e, "Registration failed");
                self.error = Some(FlowError::Transport);
                self.state = AttemptState::Failed;
                RegistrationOutcome::Failed
            }
        }
    }

    /// Validate, call `remote`, and finish the submission.
    pub async fn submit<R>(&mut self, remote: &R) -> RegistrationOutcome
    where
        R: RegistrationRemote + ?Sized,
    {
        let pending = match self.begin_submit() {
            Ok(pending) => pending,
            Err(outcome) => return outcome,
        };
        let result = remote.register(&pending.record).await;
        self.complete_submit(pending, result)
    }
}
