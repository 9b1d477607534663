//! Storage
//!
//! The persistence port behind the cart, order and session stores. Values are
//! JSON strings stored under a handful of well-known keys, the same layout a
//! browser front end keeps in `localStorage`.

use std::fmt::Debug;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

mod keys;
mod memory;
#[cfg(test)]
pub(crate) mod testing;

pub use keys::StorageKey;
pub use memory::MemoryStore;

/// Errors raised by a [`KeyValueStore`] or while (de)serializing its values.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store can't be reached (no browser storage, poisoned lock, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing a key failed.
    #[error("failed to access `{key}`")]
    Io {
        /// Key being accessed.
        key: String,

        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The stored value isn't valid JSON for the expected type.
    #[error("stored value for `{key}` is malformed")]
    Malformed {
        /// Key being read.
        key: StorageKey,

        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The value couldn't be serialized.
    #[error("failed to serialize value for `{key}`")]
    Serialize {
        /// Key being written.
        key: StorageKey,

        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value persistence port.
pub trait KeyValueStore: Debug + Send + Sync {
    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend can't be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend can't be written.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend can't be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load and decode the JSON value stored under `key`.
///
/// # Errors
///
/// - [`StorageError::Malformed`]: the stored value doesn't decode as `T`.
/// - Any error raised by the backend.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: StorageKey,
) -> Result<Option<T>, StorageError> {
    store
        .load(key.as_str())?
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|source| StorageError::Malformed { key, source })
        })
        .transpose()
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// - [`StorageError::Serialize`]: the value can't be encoded.
/// - Any error raised by the backend.
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: StorageKey,
    value: &T,
) -> Result<(), StorageError> {
    let raw =
        serde_json::to_string(value).map_err(|source| StorageError::Serialize { key, source })?;

    store.save(key.as_str(), &raw)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn missing_key_loads_as_none() -> TestResult {
        let store = MemoryStore::new();

        let value: Option<Vec<u32>> = load_json(&store, StorageKey::Orders)?;

        assert!(value.is_none());

        Ok(())
    }

    #[test]
    fn json_values_round_trip_through_the_store() -> TestResult {
        let store = MemoryStore::new();

        save_json(&store, StorageKey::CartItems, &[1, 2, 3])?;

        assert_eq!(store.load("cartItems")?.as_deref(), Some("[1,2,3]"));
        assert_eq!(
            load_json::<Vec<u32>>(&store, StorageKey::CartItems)?,
            Some(vec![1, 2, 3])
        );

        Ok(())
    }

    #[test]
    fn malformed_value_is_reported_with_its_key() -> TestResult {
        let store = MemoryStore::new();
        store.save("orders", "{not json")?;

        let result = load_json::<Vec<u32>>(&store, StorageKey::Orders);

        assert!(
            matches!(
                result,
                Err(StorageError::Malformed {
                    key: StorageKey::Orders,
                    ..
                })
            ),
            "expected Malformed, got {result:?}"
        );

        Ok(())
    }
}
