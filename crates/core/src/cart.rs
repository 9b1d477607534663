//! Cart
//!
//! The cart holds at most one entry per catalog id and mirrors its contents to
//! the `cartItems` key after every change.

use std::sync::Arc;

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    events::{ChangeEvent, Notifier},
    prices::{PriceError, parse_price, sum_prices},
    storage::{KeyValueStore, StorageError, StorageKey, load_json, save_json},
};

/// A catalog entry selected for purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Catalog id; unique within a cart.
    pub id: u32,

    /// Display title.
    pub title: String,

    /// Display price, e.g. `"¥299"`.
    pub price: String,

    /// Pre-discount display price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,

    /// Cover image URL.
    pub image: String,
}

impl CartItem {
    /// Parsed price of this item.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if the display price can't be parsed.
    pub fn price_money(&self) -> Result<Money<'static, Currency>, PriceError> {
        parse_price(&self.price)
    }
}

/// Result of [`CartStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was appended.
    Added,

    /// An item with the same id was already in the cart; nothing changed.
    AlreadyPresent,
}

impl AddOutcome {
    /// Whether the cart changed.
    pub const fn is_added(self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Persistence-backed cart.
#[derive(Debug)]
pub struct CartStore {
    storage: Arc<dyn KeyValueStore>,
    notifier: Notifier,
    items: Vec<CartItem>,
}

impl CartStore {
    /// Load the cart persisted in `storage`. A missing key is an empty cart.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the stored cart can't be read or decoded.
    pub fn load(storage: Arc<dyn KeyValueStore>, notifier: Notifier) -> Result<Self, StorageError> {
        let items = load_json(storage.as_ref(), StorageKey::CartItems)?.unwrap_or_default();

        Ok(Self {
            storage,
            notifier,
            items,
        })
    }

    /// Re-read the persisted cart, picking up writes made through another store.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the stored cart can't be read or decoded.
    pub fn reload(&mut self) -> Result<(), StorageError> {
        self.items = load_json(self.storage.as_ref(), StorageKey::CartItems)?.unwrap_or_default();

        Ok(())
    }

    /// Add `item` unless an item with the same id is already present.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the updated cart can't be persisted.
    pub fn add(&mut self, item: CartItem) -> Result<AddOutcome, StorageError> {
        if self.contains(item.id) {
            debug!(id = item.id, "item already in cart");

            return Ok(AddOutcome::AlreadyPresent);
        }

        debug!(id = item.id, title = %item.title, "adding item to cart");

        let mut items = self.items.clone();
        items.push(item);
        self.persist(items)?;

        Ok(AddOutcome::Added)
    }

    /// Remove the item with `id`. Removing an absent id leaves the cart as is.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the updated cart can't be persisted.
    pub fn remove(&mut self, id: u32) -> Result<(), StorageError> {
        debug!(id, "removing item from cart");

        self.remove_all(&[id])
    }

    /// Remove every item whose id is in `ids`, persisting once. Items added
    /// since `ids` was captured stay in the cart; an emptied cart is removed
    /// from storage like [`CartStore::clear`].
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the updated cart can't be persisted.
    pub fn remove_all(&mut self, ids: &[u32]) -> Result<(), StorageError> {
        let items: Vec<CartItem> = self
            .items
            .iter()
            .filter(|item| !ids.contains(&item.id))
            .cloned()
            .collect();

        if items.is_empty() && !self.items.is_empty() {
            return self.clear();
        }

        self.persist(items)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the persisted cart can't be removed.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        debug!(count = self.items.len(), "clearing cart");

        self.storage.remove(StorageKey::CartItems.as_str())?;
        self.items.clear();
        self.notifier.emit(ChangeEvent::CartUpdated);

        Ok(())
    }

    /// Whether an item with `id` is in the cart.
    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Sum of the item prices.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if any stored price can't be parsed.
    pub fn total(&self) -> Result<Money<'static, Currency>, PriceError> {
        sum_prices(self.items.iter().map(|item| item.price.as_str()))
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Notifier this store emits [`ChangeEvent::CartUpdated`] on.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Save `items`, adopting them only once the write succeeds.
    fn persist(&mut self, items: Vec<CartItem>) -> Result<(), StorageError> {
        save_json(self.storage.as_ref(), StorageKey::CartItems, &items)?;
        self.items = items;
        self.notifier.emit(ChangeEvent::CartUpdated);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rusty_money::iso::CNY;
    use testresult::TestResult;

    use crate::storage::{MemoryStore, testing::ReadOnlyStore};

    use super::*;

    fn item(id: u32, price: &str) -> CartItem {
        CartItem {
            id,
            title: format!("Course {id}"),
            price: price.to_string(),
            original_price: None,
            image: format!("https://example.com/{id}.jpg"),
        }
    }

    fn empty_cart() -> Result<(CartStore, Arc<MemoryStore>), StorageError> {
        let storage = Arc::new(MemoryStore::new());
        let cart = CartStore::load(storage.clone(), Notifier::new())?;

        Ok((cart, storage))
    }

    #[test]
    fn add_then_contains() -> TestResult {
        let (mut cart, _) = empty_cart()?;

        assert_eq!(cart.add(item(1, "¥299"))?, AddOutcome::Added);
        assert!(cart.contains(1));
        assert!(!cart.contains(2));

        Ok(())
    }

    #[test]
    fn duplicate_add_keeps_one_copy() -> TestResult {
        let (mut cart, _) = empty_cart()?;

        cart.add(item(1, "¥299"))?;
        let outcome = cart.add(item(1, "¥299"))?;

        assert_eq!(outcome, AddOutcome::AlreadyPresent);
        assert!(!outcome.is_added());
        assert_eq!(cart.len(), 1);

        Ok(())
    }

    #[test]
    fn remove_after_add() -> TestResult {
        let (mut cart, _) = empty_cart()?;

        cart.add(item(1, "¥299"))?;
        cart.remove(1)?;

        assert!(!cart.contains(1));
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn remove_missing_id_is_a_no_op() -> TestResult {
        let (mut cart, _) = empty_cart()?;

        cart.add(item(1, "¥299"))?;
        cart.remove(42)?;

        assert_eq!(cart.len(), 1);

        Ok(())
    }

    #[test]
    fn remove_all_keeps_items_not_listed() -> TestResult {
        let (mut cart, storage) = empty_cart()?;

        cart.add(item(1, "¥299"))?;
        cart.add(item(2, "¥199"))?;
        cart.add(item(3, "¥99"))?;
        cart.remove_all(&[1, 3])?;

        assert_eq!(cart.items(), &[item(2, "¥199")]);
        assert!(storage.load("cartItems")?.is_some());

        cart.remove_all(&[2])?;

        assert!(cart.is_empty());
        assert!(storage.load("cartItems")?.is_none());

        Ok(())
    }

    #[test]
    fn failed_write_leaves_cart_unchanged() -> TestResult {
        let storage = Arc::new(ReadOnlyStore::new());
        let mut cart = CartStore::load(storage.clone(), Notifier::new())?;

        assert!(cart.add(item(1, "¥299")).is_err());
        assert!(!cart.contains(1));
        assert!(cart.is_empty());

        storage.allow_writes();
        cart.add(item(1, "¥299"))?;
        storage.deny_writes();

        assert!(cart.remove(1).is_err());
        assert!(cart.contains(1));
        assert!(cart.clear().is_err());
        assert_eq!(cart.len(), 1);

        Ok(())
    }

    #[test]
    fn clear_empties_cart_and_zeroes_total() -> TestResult {
        let (mut cart, storage) = empty_cart()?;

        cart.add(item(1, "¥299"))?;
        cart.add(item(2, "¥199"))?;
        cart.clear()?;

        assert!(cart.is_empty());
        assert_eq!(cart.total()?, Money::from_minor(0, CNY));
        assert!(storage.load("cartItems")?.is_none());

        Ok(())
    }

    #[test]
    fn total_sums_numeric_portion_of_prices() -> TestResult {
        let (mut cart, _) = empty_cart()?;

        cart.add(item(1, "¥100"))?;
        cart.add(item(2, "¥50.50"))?;

        assert_eq!(cart.total()?, Money::from_minor(150_50, CNY));

        Ok(())
    }

    #[test]
    fn total_reports_unparseable_price() -> TestResult {
        let (mut cart, _) = empty_cart()?;

        cart.add(item(1, "¥???"))?;

        assert!(matches!(cart.total(), Err(PriceError::InvalidAmount(_))));

        Ok(())
    }

    #[test]
    fn mutations_persist_camel_case_json() -> TestResult {
        let (mut cart, storage) = empty_cart()?;

        cart.add(CartItem {
            original_price: Some("¥399".to_string()),
            ..item(1, "¥299")
        })?;

        assert_eq!(
            storage.load("cartItems")?.as_deref(),
            Some(
                r#"[{"id":1,"title":"Course 1","price":"¥299","originalPrice":"¥399","image":"https://example.com/1.jpg"}]"#
            )
        );

        Ok(())
    }

    #[test]
    fn reload_sees_writes_from_another_store() -> TestResult {
        let storage = Arc::new(MemoryStore::new());
        let mut first = CartStore::load(storage.clone(), Notifier::new())?;
        let mut second = CartStore::load(storage, Notifier::new())?;

        first.add(item(7, "¥10"))?;
        assert!(!second.contains(7));

        second.reload()?;
        assert!(second.contains(7));

        Ok(())
    }

    #[test]
    fn every_mutation_is_broadcast() -> TestResult {
        let notifier = Notifier::new();
        let calls = Arc::new(AtomicUsize::new(0));
        {
            let calls = Arc::clone(&calls);
            notifier.subscribe(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }

        let mut cart = CartStore::load(Arc::new(MemoryStore::new()), notifier)?;

        cart.add(item(1, "¥1"))?;
        cart.add(item(1, "¥1"))?;
        cart.remove(1)?;
        cart.clear()?;

        assert_eq!(calls.load(Ordering::SeqCst), 3);

        Ok(())
    }
}
