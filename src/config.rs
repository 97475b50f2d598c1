//! Configuration module for userdesk.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::auth::DEFAULT_SESSION_KEY;
use crate::user::UserRecord;
use crate::{AppError, Result};

/// Durable storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path to the JSON storage file.
    #[serde(default = "default_storage_path")]
    pub path: String,
    /// Key holding the current user.
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

fn default_storage_path() -> String {
    "data/storage.json".to_string()
}

fn default_session_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            session_key: default_session_key(),
        }
    }
}

/// Registration flow configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationConfig {
    /// Delay of the simulated registration call in milliseconds.
    #[serde(default = "default_simulated_delay")]
    pub simulated_delay_ms: u64,
    /// How long the success notice stays visible in milliseconds.
    #[serde(default = "default_notice_display")]
    pub notice_display_ms: u64,
}

fn default_simulated_delay() -> u64 {
    1500
}

fn default_notice_display() -> u64 {
    2000
}

impl RegistrationConfig {
    /// Simulated call delay as a `Duration`.
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    /// Notice display time as a `Duration`.
    pub fn notice_display(&self) -> Duration {
        Duration::from_millis(self.notice_display_ms)
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay(),
            notice_display_ms: default_notice_display(),
        }
    }
}

/// Seeded account for the mock credential store.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SeedUser {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Login email.
    pub email: String,
    /// Login password.
    pub password: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Profile picture URL.
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

impl From<SeedUser> for UserRecord {
    fn from(seed: SeedUser) -> Self {
        Self {
            name: seed.name,
            email: seed.email,
            password: seed.password,
            phone: seed.phone,
            profile_picture_url: seed.profile_picture_url,
        }
    }
}

/// Mock credential configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsConfig {
    /// Seeded accounts. The built-in test account is used when empty.
    #[serde(default)]
    pub users: Vec<SeedUser>,
    /// Show the first seeded account on the login screen.
    #[serde(default = "default_show_hint")]
    pub show_hint: bool,
}

fn default_show_hint() -> bool {
    true
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            show_hint: default_show_hint(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
    /// Also write log lines to stderr.
    #[serde(default)]
    pub console: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/userdesk.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
            console: false,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Durable storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Registration flow settings.
    #[serde(default)]
    pub registration: RegistrationConfig,
    /// Mock credential settings.
    #[serde(default)]
    pub credentials: CredentialsConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Environment overrides are applied and the result is validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AppError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides.
    ///
    /// - `USERDESK_STORAGE_PATH` overrides `storage.path`
    /// - `USERDESK_LOG_LEVEL` overrides `logging.level`
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("USERDESK_STORAGE_PATH") {
            if !path.is_empty() {
                self.storage.path = path;
            }
        }
        if let Ok(level) = std::env::var("USERDESK_LOG_LEVEL") {
            if !level.is_empty() {
                self.logging.level = level;
            }
        }
    }

    /// Check values that serde defaults cannot guard.
    pub fn validate(&self) -> Result<()> {
        if self.storage.session_key.is_empty() {
            return Err(AppError::Config(
                "storage.session_key must not be empty".to_string(),
            ));
        }

        for (i, user) in self.credentials.users.iter().enumerate() {
            if user.email.is_empty() || user.password.is_empty() {
                return Err(AppError::Config(format!(
                    "credentials.users[{i}] needs a non-empty email and password"
                )));
            }
        }

        Ok(())
    }
}
