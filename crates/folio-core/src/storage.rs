//! Key/value preference storage.
//!
//! The browser build backs this with `window.localStorage`; tests use
//! [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StorageError;

/// String preferences keyed by name.
pub trait PreferenceStore {
    /// Read a value, `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("k", "a").unwrap();
        store.set("k", "b").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("b"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_missing_key() {
        let store = MemoryStore::new();
        store.remove("missing").unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get("missing").unwrap(), None);
    }
}
