//! Session holder for userdesk.
//!
//! The current user is kept as a JSON document under a single key of a
//! durable key/value store, so it survives a restart of the application.

use tracing::{debug, info, warn};

use crate::storage::KeyValueStore;
use crate::user::UserRecord;
use crate::Result;

/// Default storage key for the current user.
pub const DEFAULT_SESSION_KEY: &str = "currentUser";

/// Slot holding at most one "current user" record.
///
/// Controllers receive the store as an argument, so tests can pass any
/// implementation.
pub trait SessionStore {
    /// Read the current user, or `None` if absent or unreadable.
    fn get(&self) -> Option<UserRecord>;

    /// Persist `record` as the current user, replacing any previous value.
    fn set(&mut self, record: &UserRecord) -> Result<()>;

    /// Remove the current user. Clearing an empty session is a no-op.
    fn clear(&mut self) -> Result<()>;

    /// Check if a user is stored.
    fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

/// Session store on top of a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct SessionHolder<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> SessionHolder<S> {
    /// Create a holder using the default key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_SESSION_KEY)
    }

    /// Create a holder storing the user under `key`.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutably borrow the underlying storage.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Consume the holder and return the storage.
    pub fn into_inner(self) -> S {
        self.storage
    }
}

impl<S: KeyValueStore> SessionStore for SessionHolder<S> {
    fn get(&self) -> Option<UserRecord> {
        let raw = self.storage.get_item(&self.key)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Ignoring unreadable session record");
                None
            }
        }
    }

    fn set(&mut self, record: &UserRecord) -> Result<()> {
        let raw = serde_json::to_string(record)?;
        self.storage.set_item(&self.key, &raw)?;
        debug!(key = %self.key, email = %record.email, "Session record stored");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.storage.remove_item(&self.key)?;
        info!(key = %self.key, "Session cleared");
        Ok(())
    }
}
