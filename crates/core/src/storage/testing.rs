use std::sync::atomic::{AtomicBool, Ordering};

use super::{KeyValueStore, MemoryStore, StorageError};

/// [`MemoryStore`] whose writes fail until [`ReadOnlyStore::allow_writes`].
#[derive(Debug, Default)]
pub(crate) struct ReadOnlyStore {
    inner: MemoryStore,
    writable: AtomicBool,
}

impl ReadOnlyStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn allow_writes(&self) {
        self.writable.store(true, Ordering::SeqCst);
    }

    pub(crate) fn deny_writes(&self) {
        self.writable.store(false, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.writable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::Unavailable("read-only".to_string()))
        }
    }
}

impl KeyValueStore for ReadOnlyStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.inner.save(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.inner.remove(key)
    }
}
