//! Checkout
//!
//! Turns the cart into an order: snapshot the cart, charge the total, record
//! the order and take the snapshot's items out of the cart. The cart is left
//! untouched unless the charge succeeds, and items added while the charge is
//! in flight stay in the cart.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use crate::{
    cart::{CartItem, CartStore},
    orders::{OrderId, OrderStore, PaymentMethod},
    payments::{PaymentError, PaymentGateway, PaymentReceipt, PaymentRequest},
    prices::{PriceError, to_decimal},
    storage::StorageError,
};

/// Checkout errors
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Nothing to buy
    #[error("Cart is empty")]
    EmptyCart,

    /// The charge failed
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// Cart or order state couldn't be persisted
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A cart price couldn't be parsed
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// Cart contents and total captured at the start of checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCheckout {
    items: Vec<CartItem>,
    total: Decimal,
}

impl PendingCheckout {
    /// Snapshot `cart`.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`]: the cart has no items.
    /// - [`CheckoutError::Price`]: an item price can't be parsed.
    pub fn prepare(cart: &CartStore) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let total = to_decimal(&cart.total()?);

        Ok(Self {
            items: cart.items().to_vec(),
            total,
        })
    }

    /// Items being bought.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Amount to charge, in yuan.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// The charge for this checkout.
    pub fn request(&self, method: PaymentMethod) -> PaymentRequest {
        PaymentRequest {
            amount: self.total,
            method,
        }
    }

    /// Record the paid order and remove the bought items from the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Storage`] if the order or the updated cart
    /// can't be persisted.
    pub fn complete(
        self,
        receipt: &PaymentReceipt,
        cart: &mut CartStore,
        orders: &mut OrderStore,
    ) -> Result<OrderId, CheckoutError> {
        let bought: Vec<u32> = self.items.iter().map(|item| item.id).collect();
        let id = orders.create(self.items, self.total, receipt.method.clone())?;

        cart.remove_all(&bought)?;

        info!(order = %id, payment = %receipt.reference, "checkout complete");

        Ok(id)
    }
}

/// Check out `cart` with `method`, charging through `gateway`.
///
/// # Errors
///
/// - [`CheckoutError::EmptyCart`]: the cart has no items.
/// - [`CheckoutError::Price`]: an item price can't be parsed.
/// - [`CheckoutError::Payment`]: the gateway refused the charge; the cart is
///   unchanged.
/// - [`CheckoutError::Storage`]: the order or cart couldn't be persisted.
pub async fn checkout<G: PaymentGateway>(
    cart: &mut CartStore,
    orders: &mut OrderStore,
    gateway: &G,
    method: PaymentMethod,
) -> Result<OrderId, CheckoutError> {
    let pending = PendingCheckout::prepare(cart)?;
    let receipt = gateway.charge(pending.request(method)).await?;

    pending.complete(&receipt, cart, orders)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use testresult::TestResult;

    use crate::{
        events::Notifier,
        payments::InstantGateway,
        storage::{KeyValueStore, MemoryStore},
    };

    use super::*;

    #[derive(Debug)]
    struct Declining;

    impl PaymentGateway for Declining {
        async fn charge(&self, _request: PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
            Err(PaymentError::Declined("insufficient funds".to_string()))
        }
    }

    fn item(id: u32, price: &str) -> CartItem {
        CartItem {
            id,
            title: format!("Course {id}"),
            price: price.to_string(),
            original_price: None,
            image: String::new(),
        }
    }

    fn stores() -> TestResult<(CartStore, OrderStore)> {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

        Ok((
            CartStore::load(Arc::clone(&storage), Notifier::new())?,
            OrderStore::load(storage)?,
        ))
    }

    #[tokio::test]
    async fn checkout_creates_order_and_empties_cart() -> TestResult {
        let (mut cart, mut orders) = stores()?;
        cart.add(item(1, "¥299"))?;
        cart.add(item(3, "¥199"))?;

        let id = checkout(&mut cart, &mut orders, &InstantGateway::new(), PaymentMethod::Alipay).await?;

        let order = orders.get(id.as_str()).expect("order should exist");

        assert_eq!(order.total, Decimal::new(498, 0));
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.payment_method, PaymentMethod::Alipay);
        assert!(cart.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn empty_cart_is_rejected() -> TestResult {
        let (mut cart, mut orders) = stores()?;

        let result = checkout(&mut cart, &mut orders, &InstantGateway::new(), PaymentMethod::Card).await;

        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
        assert!(orders.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn declined_payment_keeps_the_cart() -> TestResult {
        let (mut cart, mut orders) = stores()?;
        cart.add(item(1, "¥299"))?;

        let result = checkout(&mut cart, &mut orders, &Declining, PaymentMethod::Card).await;

        assert!(matches!(result, Err(CheckoutError::Payment(PaymentError::Declined(_)))));
        assert_eq!(cart.len(), 1);
        assert!(orders.is_empty());

        Ok(())
    }

    #[test]
    fn items_added_during_payment_stay_in_the_cart() -> TestResult {
        let (mut cart, mut orders) = stores()?;
        cart.add(item(1, "¥299"))?;

        let pending = PendingCheckout::prepare(&cart)?;
        cart.add(item(2, "¥199"))?;

        let receipt = PaymentReceipt {
            reference: "test".to_string(),
            amount: pending.total(),
            method: PaymentMethod::Alipay,
        };
        let id = pending.complete(&receipt, &mut cart, &mut orders)?;

        let order = orders.get(id.as_str()).expect("order should exist");

        assert_eq!(order.items, vec![item(1, "¥299")]);
        assert_eq!(cart.items(), &[item(2, "¥199")]);

        Ok(())
    }

    #[test]
    fn prepare_snapshots_items_and_total() -> TestResult {
        let (mut cart, _orders) = stores()?;
        cart.add(item(2, "¥150.50"))?;

        let pending = PendingCheckout::prepare(&cart)?;

        assert_eq!(pending.items(), cart.items());
        assert_eq!(pending.total(), Decimal::new(15_050, 2));
        assert_eq!(pending.request(PaymentMethod::Wechat).amount, pending.total());

        Ok(())
    }
}
