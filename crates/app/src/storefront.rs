//! Storefront
//!
//! The catalog plus the cart, order and session stores, shared between
//! services. Stores sit behind async mutexes; hold a lock only for the
//! duration of a synchronous store call.

use std::sync::Arc;

use keepstudy::{
    cart::{AddOutcome, CartStore},
    catalog::Catalog,
    events::Notifier,
    orders::OrderStore,
    session::SessionStore,
    storage::{KeyValueStore, StorageError},
};
use thiserror::Error;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::info;

/// Errors raised by storefront operations.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// No course with this id.
    #[error("course {0} not found")]
    UnknownCourse(u32),

    /// Persisted state couldn't be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Shared storefront state.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Arc<Catalog>,
    cart: Arc<Mutex<CartStore>>,
    orders: Arc<Mutex<OrderStore>>,
    session: SessionStore,
    notifier: Notifier,
    checkout: Arc<Mutex<()>>,
}

impl Storefront {
    /// Load the stores from `durable` storage; `session` backs the
    /// not-remembered sign-in slot.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if persisted state can't be read or decoded.
    pub fn load(
        catalog: Catalog,
        durable: Arc<dyn KeyValueStore>,
        session: Arc<dyn KeyValueStore>,
    ) -> Result<Self, StorageError> {
        let notifier = Notifier::new();
        let cart = CartStore::load(Arc::clone(&durable), notifier.clone())?;
        let orders = OrderStore::load(Arc::clone(&durable))?;

        Ok(Self::from_parts(
            catalog,
            cart,
            orders,
            SessionStore::new(durable, session),
        ))
    }

    /// Assemble a storefront from already-loaded stores.
    pub fn from_parts(
        catalog: Catalog,
        cart: CartStore,
        orders: OrderStore,
        session: SessionStore,
    ) -> Self {
        let notifier = cart.notifier().clone();

        Self {
            catalog: Arc::new(catalog),
            cart: Arc::new(Mutex::new(cart)),
            orders: Arc::new(Mutex::new(orders)),
            session,
            notifier,
            checkout: Arc::new(Mutex::new(())),
        }
    }

    /// Course catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Cart store.
    pub fn cart(&self) -> &Mutex<CartStore> {
        &self.cart
    }

    /// Order store.
    pub fn orders(&self) -> &Mutex<OrderStore> {
        &self.orders
    }

    /// Sign-in state.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Notifier the cart broadcasts on.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Claim the single checkout slot, or `None` if a checkout is already in
    /// flight. The slot is released when the guard drops.
    pub fn begin_checkout(&self) -> Option<OwnedMutexGuard<()>> {
        Arc::clone(&self.checkout).try_lock_owned().ok()
    }

    /// Put the course with `id` in the cart.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::UnknownCourse`]: no such course.
    /// - [`StorefrontError::Storage`]: the cart couldn't be persisted.
    pub async fn add_course(&self, id: u32) -> Result<AddOutcome, StorefrontError> {
        let course = self
            .catalog
            .get(id)
            .ok_or(StorefrontError::UnknownCourse(id))?;

        let outcome = self.cart.lock().await.add(course.to_cart_item())?;

        info!(id, ?outcome, "add to cart");

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use keepstudy::storage::MemoryStore;
    use testresult::TestResult;

    use super::*;

    fn storefront() -> TestResult<Storefront> {
        Ok(Storefront::load(
            Catalog::demo()?,
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryStore::new()),
        )?)
    }

    #[tokio::test]
    async fn add_course_deduplicates() -> TestResult {
        let storefront = storefront()?;

        assert_eq!(storefront.add_course(3).await?, AddOutcome::Added);
        assert_eq!(storefront.add_course(3).await?, AddOutcome::AlreadyPresent);
        assert_eq!(storefront.cart().lock().await.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_course_is_an_error() -> TestResult {
        let storefront = storefront()?;

        let result = storefront.add_course(404).await;

        assert!(matches!(result, Err(StorefrontError::UnknownCourse(404))));

        Ok(())
    }

    #[tokio::test]
    async fn one_checkout_at_a_time() -> TestResult {
        let storefront = storefront()?;
        let other = storefront.clone();

        let guard = storefront.begin_checkout();

        assert!(guard.is_some());
        assert!(other.begin_checkout().is_none());

        drop(guard);

        assert!(other.begin_checkout().is_some());

        Ok(())
    }

    #[tokio::test]
    async fn clones_share_state() -> TestResult {
        let storefront = storefront()?;
        let other = storefront.clone();

        storefront.add_course(1).await?;

        assert!(other.cart().lock().await.contains(1));

        Ok(())
    }
}
