//! Session
//!
//! Mock sign-in state. The `user` record lives in the durable slot when the
//! user asks to be remembered and in the session-scoped slot otherwise.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::storage::{KeyValueStore, StorageError, StorageKey, load_json, save_json};

/// Persisted `user` record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Whether the user is signed in.
    pub is_logged_in: bool,

    /// Name entered at sign-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl User {
    /// A signed-in user.
    pub fn signed_in(username: impl Into<String>) -> Self {
        Self {
            is_logged_in: true,
            username: Some(username.into()),
        }
    }
}

/// Sign-in state over a durable and a session-scoped store.
#[derive(Debug, Clone)]
pub struct SessionStore {
    durable: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Create a session store over the two slots.
    pub fn new(durable: Arc<dyn KeyValueStore>, session: Arc<dyn KeyValueStore>) -> Self {
        Self { durable, session }
    }

    /// Sign in as `username`. Any credentials are accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if either slot can't be written.
    pub fn login(&self, username: &str, remember: bool) -> Result<User, StorageError> {
        let user = User::signed_in(username);

        let (target, other) = if remember {
            (&self.durable, &self.session)
        } else {
            (&self.session, &self.durable)
        };

        other.remove(StorageKey::User.as_str())?;
        save_json(target.as_ref(), StorageKey::User, &user)?;

        info!(username, remember, "signed in");

        Ok(user)
    }

    /// Sign out, clearing both slots.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if either slot can't be cleared.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.session.remove(StorageKey::User.as_str())?;
        self.durable.remove(StorageKey::User.as_str())?;

        info!("signed out");

        Ok(())
    }

    /// The stored user, preferring the session slot.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if a stored record can't be read or decoded.
    pub fn current(&self) -> Result<Option<User>, StorageError> {
        if let Some(user) = load_json(self.session.as_ref(), StorageKey::User)? {
            return Ok(Some(user));
        }

        load_json(self.durable.as_ref(), StorageKey::User)
    }

    /// Whether a signed-in user is stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if a stored record can't be read or decoded.
    pub fn is_logged_in(&self) -> Result<bool, StorageError> {
        Ok(self.current()?.is_some_and(|user| user.is_logged_in))
    }
}
