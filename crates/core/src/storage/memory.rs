//! In-memory Store

use std::sync::{Mutex, MutexGuard};

use rustc_hash::FxHashMap;

use super::{KeyValueStore, StorageError};

/// Process-local [`KeyValueStore`].
///
/// Used as the session-scoped slot by native front ends and as the fake
/// backend in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<FxHashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.lock().map_or(0, |values| values.len())
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, FxHashMap<String, String>>, StorageError> {
        self.values
            .lock()
            .map_err(|error| StorageError::Unavailable(error.to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);

        Ok(())
    }
}
