//! Browser storage backed [`KeyValueStore`].

use keepstudy::storage::{KeyValueStore, StorageError};

/// Which Web Storage area a [`WebStorage`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StorageArea {
    /// `window.localStorage`, kept across browser restarts.
    Local,

    /// `window.sessionStorage`, cleared when the tab closes.
    Session,
}

/// `localStorage`/`sessionStorage` adapter.
///
/// The browser handle isn't `Send`, so it's looked up on every call rather
/// than held.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WebStorage {
    area: StorageArea,
}

impl WebStorage {
    pub(crate) const fn local() -> Self {
        Self {
            area: StorageArea::Local,
        }
    }

    pub(crate) const fn session() -> Self {
        Self {
            area: StorageArea::Session,
        }
    }

    fn storage(self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("window is unavailable".to_string()))?;

        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };

        storage
            .map_err(|error| StorageError::Unavailable(format!("{error:?}")))?
            .ok_or_else(|| StorageError::Unavailable(format!("{:?} storage is disabled", self.area)))
    }
}

impl KeyValueStore for WebStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|error| StorageError::Unavailable(format!("{error:?}")))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|error| StorageError::Unavailable(format!("{error:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|error| StorageError::Unavailable(format!("{error:?}")))
    }
}
