//! Change Notifications
//!
//! Stores broadcast a [`ChangeEvent`] after every mutation so that unrelated
//! views (a navigation badge, a second panel) can re-read state without being
//! handed the store.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::{Arc, Mutex, PoisonError},
};

/// Events broadcast by the stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeEvent {
    /// The cart contents changed.
    CartUpdated,
}

impl ChangeEvent {
    /// Event name as dispatched to browser listeners.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CartUpdated => "cartUpdated",
        }
    }
}

/// Handle returned by [`Notifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(ChangeEvent) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

/// Broadcast hub shared between stores and their observers.
///
/// Clones share the same listener list.
#[derive(Clone, Default)]
pub struct Notifier {
    listeners: Arc<Mutex<Listeners>>,
}

impl Notifier {
    /// Create a notifier with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it's called for every subsequent event.
    pub fn subscribe(
        &self,
        listener: impl Fn(ChangeEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let mut listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let id = SubscriptionId(listeners.next_id);
        listeners.next_id = listeners.next_id.saturating_add(1);
        listeners.entries.push((id, Arc::new(listener)));

        id
    }

    /// Remove a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .retain(|(entry_id, _)| *entry_id != id);
    }

    /// Call every listener, in subscription order.
    pub fn emit(&self, event: ChangeEvent) {
        // Listeners may subscribe or emit themselves, so call them unlocked.
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::trace!(event = event.name(), listeners = listeners.len(), "emit");

        for listener in listeners {
            listener(event);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }
}

impl Debug for Notifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Notifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
