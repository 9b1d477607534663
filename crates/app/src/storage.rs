//! File Storage
//!
//! [`KeyValueStore`] that keeps each key in its own JSON file inside a data
//! directory.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use keepstudy::storage::{KeyValueStore, StorageError};
use tracing::trace;

/// Directory-backed key-value store: key `orders` lives in `<dir>/orders.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) the store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory can't be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();

        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            key: dir.display().to_string(),
            source,
        })?;

        Ok(Self { dir })
    }

    /// Data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid {
            return Err(StorageError::Unavailable(format!(
                "`{key}` is not a valid storage key"
            )));
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path(key)?;

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path(key)?;
        let staging = path.with_extension("json.tmp");

        trace!(key, path = %path.display(), "writing");

        fs::write(&staging, value)
            .and_then(|()| fs::rename(&staging, &path))
            .map_err(|source| StorageError::Io {
                key: key.to_string(),
                source,
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path(key)?) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn values_round_trip_through_files() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileStore::open(dir.path())?;

        store.save("cartItems", "[]")?;

        assert_eq!(store.load("cartItems")?.as_deref(), Some("[]"));
        assert_eq!(fs::read_to_string(dir.path().join("cartItems.json"))?, "[]");

        Ok(())
    }

    #[test]
    fn missing_keys_load_as_none() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileStore::open(dir.path().join("nested"))?;

        assert!(store.load("orders")?.is_none());

        store.remove("orders")?;

        Ok(())
    }

    #[test]
    fn remove_deletes_the_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileStore::open(dir.path())?;

        store.save("user", "{}")?;
        store.remove("user")?;

        assert!(store.load("user")?.is_none());
        assert!(!dir.path().join("user.json").exists());

        Ok(())
    }

    #[test]
    fn path_like_keys_are_rejected() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileStore::open(dir.path())?;

        for key in ["", "../escape", "a/b"] {
            assert!(
                matches!(store.save(key, "x"), Err(StorageError::Unavailable(_))),
                "key {key:?} should be rejected"
            );
        }

        Ok(())
    }
}
