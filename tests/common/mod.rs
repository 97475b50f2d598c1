//! Test helpers for console E2E tests.
//!
//! Provides a scripted console run over in-memory input and output.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use userdesk::auth::{RegistrationRemote, TransportError};
use userdesk::{
    Application, Config, KeyValueStore, MemoryStorage, SessionHolder, SessionStore,
    SimulatedRemote, UserRecord,
};

/// Remote that always fails.
pub struct FailingRemote;

#[async_trait]
impl RegistrationRemote for FailingRemote {
    async fn register(&self, _record: &UserRecord) -> Result<(), TransportError> {
        Err(TransportError("service unavailable".to_string()))
    }
}

/// Configuration without delays.
pub fn fast_config() -> Config {
    let mut config = Config::default();
    config.registration.simulated_delay_ms = 0;
    config.registration.notice_display_ms = 0;
    config
}

/// The seeded test account.
pub fn seeded_user() -> UserRecord {
    UserRecord::new("Test User", "test@example.com", "password123", "1234567890")
}

/// Storage already holding `user` as the current session.
pub fn storage_with_session(user: &UserRecord) -> MemoryStorage {
    let mut session = SessionHolder::new(MemoryStorage::new());
    session.set(user).unwrap();
    session.into_inner()
}

/// Output and final session of a scripted run.
pub struct RunResult {
    /// Everything written to the console.
    pub output: String,
    /// Session after the run.
    pub session: Option<UserRecord>,
}

/// Run the console with `input` lines over `storage`.
pub async fn run_script(input: &str, storage: impl KeyValueStore + 'static) -> RunResult {
    run_script_with_remote(
        input,
        storage,
        Box::new(SimulatedRemote::new(Duration::ZERO)),
    )
    .await
}

/// Run the console with a custom registration remote.
pub async fn run_script_with_remote(
    input: &str,
    storage: impl KeyValueStore + 'static,
    remote: Box<dyn RegistrationRemote>,
) -> RunResult {
    let mut app = Application::new(
        input.as_bytes(),
        Vec::new(),
        Arc::new(fast_config()),
        Box::new(storage),
        remote,
    );

    app.run().await.unwrap();

    let session = app.session().get();
    let output = String::from_utf8(app.into_writer()).unwrap();
    RunResult { output, session }
}
