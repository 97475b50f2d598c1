//! Console front end for userdesk.
//!
//! The application is a loop over screens: each screen runs its flow and
//! returns the next route.

pub mod render;
pub mod screens;

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info, warn};

use crate::auth::{
    MockCredentialStore, RegistrationRemote, SessionHolder, SessionStore, SimulatedRemote,
};
use crate::config::Config;
use crate::error::Result;
use crate::route::Route;
use crate::storage::{FileStorage, KeyValueStore, MemoryStorage};

pub use screens::{
    ConsoleSession, Input, LoginScreen, ProfileScreen, RegisterScreen, ScreenContext, ScreenResult,
};

/// Open the configured storage file.
///
/// Falls back to in-memory storage when the file cannot be opened, so the
/// application stays usable without persistence.
pub fn open_storage(config: &Config) -> Box<dyn KeyValueStore> {
    match FileStorage::open(&config.storage.path) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            warn!(
                path = %config.storage.path,
                error = %e,
                "Cannot open storage file, session will not persist"
            );
            Box::new(MemoryStorage::new())
        }
    }
}

/// Console application.
pub struct Application<R, W> {
    ctx: ScreenContext<R, W>,
}

impl<R, W> Application<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create an application from its parts.
    pub fn new(
        reader: R,
        writer: W,
        config: Arc<Config>,
        storage: Box<dyn KeyValueStore>,
        remote: Box<dyn RegistrationRemote>,
    ) -> Self {
        let credentials = MockCredentialStore::from_seed(&config.credentials.users);
        let session = SessionHolder::with_key(storage, config.storage.session_key.clone());
        Self {
            ctx: ScreenContext::new(reader, writer, config, credentials, session, remote),
        }
    }

    /// Create an application using the configured storage file and the
    /// simulated registration call.
    pub fn from_config(reader: R, writer: W, config: Arc<Config>) -> Self {
        let storage = open_storage(&config);
        let remote = Box::new(SimulatedRemote::new(config.registration.simulated_delay()));
        Self::new(reader, writer, config, storage, remote)
    }

    /// Current session.
    pub fn session(&self) -> &ConsoleSession {
        &self.ctx.session
    }

    /// Route shown first: the profile when a user is stored, else login.
    pub fn start_route(&self) -> Route {
        if self.ctx.session.is_present() {
            Route::Profile
        } else {
            Route::Login
        }
    }

    /// Run screens until the user quits or input ends.
    pub async fn run(&mut self) -> Result<()> {
        let mut route = self.start_route();
        info!(route = %route, "Application started");

        loop {
            debug!(route = %route, "Entering screen");
            let result = match route {
                Route::Login => LoginScreen::run(&mut self.ctx).await?,
                Route::Register => RegisterScreen::run(&mut self.ctx).await?,
                Route::Profile => ProfileScreen::run(&mut self.ctx).await?,
            };

            match result {
                ScreenResult::Navigate(next) => route = next,
                ScreenResult::Quit => break,
            }
        }

        self.ctx.send_line("Goodbye.").await?;
        info!("Application stopped");
        Ok(())
    }

    /// Consume the application and return the writer.
    pub fn into_writer(self) -> W {
        self.ctx.into_writer()
    }
}
