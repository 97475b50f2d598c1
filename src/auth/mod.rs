//! Account flows for userdesk.
//!
//! This module provides the mock credential store, the session holder,
//! registration validation, and the login, registration and profile flow
//! controllers.

mod credentials;
mod flow;
mod login;
mod profile;
mod registration;
mod session;
pub mod validation;

pub use credentials::{default_seed_user, CredentialHint, CredentialStore, MockCredentialStore};
pub use flow::{
    AttemptState, FlowError, Notice, ACCOUNT_CREATED_MESSAGE, INVALID_CREDENTIALS_MESSAGE,
    REGISTRATION_FAILED_MESSAGE,
};
pub use login::{LoginController, LoginOutcome, LOGIN_FIELDS};
pub use profile::{require_user, ProfileActivation, ProfileController, ProfileMode, PROFILE_FIELDS};
pub use registration::{
    PendingRegistration, RegistrationController, RegistrationOutcome, RegistrationRemote,
    SimulatedRemote, TransportError, DEFAULT_NOTICE_DURATION, DEFAULT_SIMULATED_DELAY,
    REGISTRATION_FIELDS,
};
pub use session::{SessionHolder, SessionStore, DEFAULT_SESSION_KEY};
pub use validation::ValidationError;
