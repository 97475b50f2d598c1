//! Credential lookup for userdesk.
//!
//! The only credential source is a fixed seed list held in memory. The
//! `CredentialStore` trait is the boundary a real backend lookup would
//! replace.

use crate::config::SeedUser;
use crate::user::UserRecord;

/// Lookup of user records by email and password.
pub trait CredentialStore {
    /// Find the user whose email and password both match exactly.
    fn find_user(&self, email: &str, password: &str) -> Option<UserRecord>;
}

/// Email/password pair displayed on the login screen as a hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialHint {
    /// Seeded email.
    pub email: String,
    /// Seeded password.
    pub password: String,
}

/// Mock credential store backed by a seed list.
#[derive(Debug, Clone)]
pub struct MockCredentialStore {
    users: Vec<UserRecord>,
}

impl Default for MockCredentialStore {
    fn default() -> Self {
        Self::new(vec![default_seed_user()])
    }
}

impl MockCredentialStore {
    /// Create a store holding the given records.
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// Create a store from configured seed users.
    ///
    /// Falls back to the built-in test account when the list is empty.
    pub fn from_seed(seed: &[SeedUser]) -> Self {
        if seed.is_empty() {
            return Self::default();
        }
        Self::new(seed.iter().cloned().map(UserRecord::from).collect())
    }

    /// Number of seeded users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if the store has no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Credentials of the first seeded user.
    pub fn hint(&self) -> Option<CredentialHint> {
        self.users.first().map(|u| CredentialHint {
            email: u.email.clone(),
            password: u.password.clone(),
        })
    }
}

impl CredentialStore for MockCredentialStore {
    fn find_user(&self, email: &str, password: &str) -> Option<UserRecord> {
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned()
    }
}

/// Built-in test account.
pub fn default_seed_user() -> UserRecord {
    UserRecord::new("Test User", "test@example.com", "password123", "1234567890")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_seeded_user() {
        let store = MockCredentialStore::default();
        let user = store.find_user("test@example.com", "password123").unwrap();
        assert_eq!(user.name, "Test User");
        assert_eq!(user.phone, "1234567890");
    }

    #[test]
    fn test_wrong_password() {
        let store = MockCredentialStore::default();
        assert!(store.find_user("test@example.com", "wrong").is_none());
    }

    #[test]
    fn test_unknown_email() {
        let store = MockCredentialStore::default();
        assert!(store.find_user("nobody@example.com", "password123").is_none());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let store = MockCredentialStore::default();
        assert!(store.find_user("TEST@example.com", "password123").is_none());
        assert!(store.find_user("test@example.com", "PASSWORD123").is_none());
    }

    #[test]
    fn test_empty_inputs_never_match() {
        let store = MockCredentialStore::default();
        assert!(store.find_user("", "").is_none());
    }

    #[test]
    fn test_from_seed() {
        let seed = vec![
            SeedUser {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "alicepass".to_string(),
                phone: "111".to_string(),
                profile_picture_url: None,
            },
            SeedUser {
                name: "Bob".to_string(),
                email: "bob@example.com".to_string(),
                password: "bobpass12".to_string(),
                phone: "222".to_string(),
                profile_picture_url: Some("https://img/bob.png".to_string()),
            },
        ];
        let store = MockCredentialStore::from_seed(&seed);
        assert_eq!(store.len(), 2);

        let bob = store.find_user("bob@example.com", "bobpass12").unwrap();
        assert_eq!(bob.profile_picture_url.as_deref(), Some("https://img/bob.png"));
        assert!(store.find_user("test@example.com", "password123").is_none());
    }

    #[test]
    fn test_from_empty_seed_uses_default() {
        let store = MockCredentialStore::from_seed(&[]);
        assert_eq!(store.len(), 1);
        assert!(store.find_user("test@example.com", "password123").is_some());
    }

    #[test]
    fn test_hint() {
        let store = MockCredentialStore::default();
        let hint = store.hint().unwrap();
        assert_eq!(hint.email, "test@example.com");
        assert_eq!(hint.password, "password123");

        assert!(MockCredentialStore::new(Vec::new()).hint().is_none());
    }
}
