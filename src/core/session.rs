//! Mock authentication and the durable login flag.
//!
//! Real identity checks are out of scope; [`CredentialVerifier`] is the seam
//! where one would plug in. The only state that survives a reload is the
//! login flag kept in a [`SessionStore`].

use std::collections::HashMap;

use crate::error::Result;

/// Local-storage key holding the login flag.
pub const LOGGED_IN_KEY: &str = "docflow_logged_in";

/// The only value of [`LOGGED_IN_KEY`] that counts as logged in.
pub const LOGGED_IN_VALUE: &str = "true";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub trait CredentialVerifier {
    fn verify(&self, credentials: &Credentials) -> bool;
}

/// Accepts every credential pair without looking at it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl CredentialVerifier for AcceptAll {
    fn verify(&self, _credentials: &Credentials) -> bool {
        true
    }
}

/// Minimal key/value store for durable session state.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process [`SessionStore`], used on the host and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

pub fn is_logged_in_value(raw: Option<&str>) -> bool {
    raw == Some(LOGGED_IN_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_true_counts() {
        assert!(is_logged_in_value(Some("true")));
        assert!(!is_logged_in_value(Some("TRUE")));
        assert!(!is_logged_in_value(Some("1")));
        assert!(!is_logged_in_value(Some("")));
        assert!(!is_logged_in_value(None));
    }

    #[test]
    fn accept_all_ignores_credentials() {
        assert!(AcceptAll.verify(&Credentials::default()));
        assert!(AcceptAll.verify(&Credentials {
            email: "x".into(),
            password: "y".into(),
        }));
    }

    #[test]
    fn memory_store_round_trips_and_removes() {
        let mut store = MemoryStore::new();
        store.set(LOGGED_IN_KEY, LOGGED_IN_VALUE).unwrap();
        assert_eq!(store.get(LOGGED_IN_KEY).unwrap().as_deref(), Some("true"));
        store.remove(LOGGED_IN_KEY).unwrap();
        assert_eq!(store.get(LOGGED_IN_KEY).unwrap(), None);
    }
}
