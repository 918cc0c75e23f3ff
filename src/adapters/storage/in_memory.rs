//! In-Memory Key-Value Store Adapter
//!
//! Keeps values in a process-local map. Useful for testing and development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::ports::{KeyValueStore, StoreError};

/// In-memory store; clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    values: Arc<RwLock<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, bypassing failure injection.
    pub fn with_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.into(), value.into());
        }
        self
    }

    /// Make every subsequent `write` fail (simulates a full or revoked store).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self
            .values
            .read()
            .map_err(|e| StoreError::read_failed(key, e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::write_failed(key, "store rejected the write"));
        }
        let mut values = self
            .values
            .write()
            .map_err(|e| StoreError::write_failed(key, e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_key_is_none() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(store.read("missing").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let store = InMemoryKeyValueStore::new();
        store.write("k", "v1").unwrap();
        store.write("k", "v2").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clones_share_values() {
        let store = InMemoryKeyValueStore::new();
        let other = store.clone();
        store.write("k", "v").unwrap();
        assert_eq!(other.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let store = InMemoryKeyValueStore::new().with_value("k", "old");
        store.fail_writes(true);

        let err = store.write("k", "new").unwrap_err();
        assert!(matches!(err, StoreError::WriteFailed { .. }));
        assert_eq!(store.read("k").unwrap().as_deref(), Some("old"));

        store.fail_writes(false);
        store.write("k", "new").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("new"));
    }
}
