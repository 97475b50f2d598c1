//! userdesk - client-side account flows
//!
//! Registration, login and profile editing over a mock credential store and
//! a durable local session, with a console front end.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod route;
pub mod storage;
pub mod user;
pub mod view;

pub use app::{Application, ScreenResult};
pub use auth::{
    validation::validate_registration, AttemptState, CredentialStore, FlowError, LoginController,
    LoginOutcome, MockCredentialStore, Notice, ProfileActivation, ProfileController, ProfileMode,
    RegistrationController, RegistrationOutcome, RegistrationRemote, SessionHolder, SessionStore,
    SimulatedRemote, TransportError, ValidationError,
};
pub use config::Config;
pub use error::{AppError, Result};
pub use route::Route;
pub use storage::{FileStorage, KeyValueStore, MemoryStorage};
pub use user::{Field, UserRecord};
