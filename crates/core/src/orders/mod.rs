//! Orders
//!
//! Orders are created from a cart snapshot at checkout and appended to the
//! `orders` key. Nothing in the store updates or deletes an order afterwards.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    cart::CartItem,
    storage::{KeyValueStore, StorageError, StorageKey, load_json, save_json},
};

mod ids;
mod labels;

pub use ids::{FixedIdGenerator, ORDER_ID_PREFIX, OrderId, OrderIdGenerator, TimestampIdGenerator};
pub use labels::{OrderAction, OrderStatus, PaymentMethod, StatusLabel, Tone};

/// A completed (simulated) purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Generated id.
    pub id: OrderId,

    /// Cart contents at checkout.
    pub items: Vec<CartItem>,

    /// Amount charged, in yuan.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,

    /// How the order was paid.
    pub payment_method: PaymentMethod,

    /// Lifecycle status.
    pub status: OrderStatus,

    /// Creation time.
    pub date: Timestamp,
}

impl Order {
    /// Whether `term` (case-insensitive) occurs in the id or any item title.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();

        term.is_empty()
            || self.id.as_str().to_lowercase().contains(&term)
            || self
                .items
                .iter()
                .any(|item| item.title.to_lowercase().contains(&term))
    }
}

/// Persistence-backed, append-only order list.
#[derive(Debug)]
pub struct OrderStore {
    storage: Arc<dyn KeyValueStore>,
    ids: Box<dyn OrderIdGenerator>,
    orders: Vec<Order>,
}

impl OrderStore {
    /// Load the orders persisted in `storage`, generating ids from the clock.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the stored orders can't be read or decoded.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        Self::with_id_generator(storage, Box::new(TimestampIdGenerator::new()))
    }

    /// Load the orders persisted in `storage` with a custom id generator.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the stored orders can't be read or decoded.
    pub fn with_id_generator(
        storage: Arc<dyn KeyValueStore>,
        ids: Box<dyn OrderIdGenerator>,
    ) -> Result<Self, StorageError> {
        let orders = load_json(storage.as_ref(), StorageKey::Orders)?.unwrap_or_default();

        Ok(Self {
            storage,
            ids,
            orders,
        })
    }

    /// Re-read the persisted orders.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the stored orders can't be read or decoded.
    pub fn reload(&mut self) -> Result<(), StorageError> {
        self.orders = load_json(self.storage.as_ref(), StorageKey::Orders)?.unwrap_or_default();

        Ok(())
    }

    /// Record a paid order for `items` and return its id.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the order list can't be persisted.
    pub fn create(
        &mut self,
        items: Vec<CartItem>,
        total: Decimal,
        payment_method: PaymentMethod,
    ) -> Result<OrderId, StorageError> {
        self.create_at(items, total, payment_method, Timestamp::now())
    }

    /// As [`OrderStore::create`], dated `now`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the order list can't be persisted.
    pub fn create_at(
        &mut self,
        items: Vec<CartItem>,
        total: Decimal,
        payment_method: PaymentMethod,
        now: Timestamp,
    ) -> Result<OrderId, StorageError> {
        let id = self.unique_id(now);

        info!(%id, %total, %payment_method, items = items.len(), "creating order");

        let mut orders = self.orders.clone();
        orders.push(Order {
            id: id.clone(),
            items,
            total,
            payment_method,
            status: OrderStatus::Paid,
            date: now,
        });

        save_json(self.storage.as_ref(), StorageKey::Orders, &orders)?;
        self.orders = orders;

        Ok(id)
    }

    /// Look up an order by id.
    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id.as_str() == id)
    }

    /// All orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Orders whose id or item titles contain `term`.
    pub fn search(&self, term: &str) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| order.matches(term))
            .collect()
    }

    /// Number of orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether there are no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn unique_id(&self, now: Timestamp) -> OrderId {
        let candidate = self.ids.candidate(now);

        if self.get(candidate.as_str()).is_none() {
            return candidate;
        }

        debug!(%candidate, "order id collision");

        // The candidate itself is taken, so at most `len - 1` suffixes are.
        (1..=self.orders.len())
            .map(|attempt| OrderId::new(format!("{candidate}-{attempt}")))
            .find(|id| self.get(id.as_str()).is_none())
            .unwrap_or(candidate)
    }
}
