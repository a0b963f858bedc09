//! Durable session persistence.
//!
//! Two string keys survive page reloads: the paired account id and a
//! connected flag. Anything short of the exact valid pair reads back as
//! "no session" — persistence failures never escalate past a log line.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::error::StorageError;

/// Storage key for the paired account id.
pub const ACCOUNT_ID_KEY: &str = "accountId";
/// Storage key for the connected flag.
pub const CONNECTED_KEY: &str = "isConnected";

/// String flag value marking a valid connected session.
const CONNECTED_TRUE: &str = "true";

/// Minimal durable string store (browser localStorage, a file, ...).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory [`KeyValueStore`], the default backing for native use and tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".into()))?;
        entries.remove(key);
        Ok(())
    }
}

/// A session restored from durable storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSession {
    pub account_id: String,
}

/// Validated save/load/clear over any [`KeyValueStore`].
pub struct SessionStore {
    kv: std::sync::Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(kv: std::sync::Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Persist a connected session: both keys, account id first.
    pub fn save(&self, account_id: &str) -> Result<(), StorageError> {
        self.kv.set(ACCOUNT_ID_KEY, account_id)?;
        self.kv.set(CONNECTED_KEY, CONNECTED_TRUE)?;
        Ok(())
    }

    /// Remove both keys.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.kv.remove(ACCOUNT_ID_KEY)?;
        self.kv.remove(CONNECTED_KEY)?;
        Ok(())
    }

    /// Read back a valid persisted session, or `None`.
    ///
    /// Only the exact pair `{accountId, isConnected: "true"}` counts;
    /// partial keys, a different flag value, and storage failures all read
    /// as absent (fail open to disconnected).
    pub fn load(&self) -> Option<PersistedSession> {
        let account_id = match self.kv.get(ACCOUNT_ID_KEY) {
            Ok(value) => value,
            Err(e) => {
                debug!(error = %e, "session storage unavailable; treating as absent");
                return None;
            }
        };
        let connected = match self.kv.get(CONNECTED_KEY) {
            Ok(value) => value,
            Err(e) => {
                debug!(error = %e, "session storage unavailable; treating as absent");
                return None;
            }
        };

        match (account_id, connected) {
            (Some(account_id), Some(flag))
                if !account_id.is_empty() && flag == CONNECTED_TRUE =>
            {
                Some(PersistedSession { account_id })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("quota exceeded".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".into()))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".into()))
        }
    }

    fn memory_session_store() -> (Arc<MemoryStore>, SessionStore) {
        let kv = Arc::new(MemoryStore::new());
        let store = SessionStore::new(kv.clone());
        (kv, store)
    }

    #[test]
    fn test_save_load_roundtrip() {
        let (_, store) = memory_session_store();
        store.save("0.0.123").unwrap();
        let session = store.load().unwrap();
        assert_eq!(session.account_id, "0.0.123");
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let (kv, store) = memory_session_store();
        store.save("0.0.123").unwrap();
        store.clear().unwrap();
        assert_eq!(kv.get(ACCOUNT_ID_KEY).unwrap(), None);
        assert_eq!(kv.get(CONNECTED_KEY).unwrap(), None);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_load_rejects_missing_flag() {
        let (kv, store) = memory_session_store();
        kv.set(ACCOUNT_ID_KEY, "0.0.123").unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_load_rejects_missing_account() {
        let (kv, store) = memory_session_store();
        kv.set(CONNECTED_KEY, "true").unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_load_rejects_inexact_flag() {
        let (kv, store) = memory_session_store();
        kv.set(ACCOUNT_ID_KEY, "0.0.123").unwrap();
        for flag in ["True", "TRUE", "1", "yes", ""] {
            kv.set(CONNECTED_KEY, flag).unwrap();
            assert_eq!(store.load(), None, "flag {flag:?} must not restore");
        }
    }

    #[test]
    fn test_load_rejects_empty_account() {
        let (kv, store) = memory_session_store();
        kv.set(ACCOUNT_ID_KEY, "").unwrap();
        kv.set(CONNECTED_KEY, "true").unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_broken_storage_reads_as_absent() {
        let store = SessionStore::new(Arc::new(BrokenStore));
        assert_eq!(store.load(), None);
        assert!(store.save("0.0.123").is_err());
    }
}
