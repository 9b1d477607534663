//! Checkout service.

use async_trait::async_trait;
use keepstudy::{
    checkout::PendingCheckout,
    orders::{Order, PaymentMethod},
    payments::{InstantGateway, PaymentGateway},
};
use mockall::automock;
use tracing::{info, warn};

use crate::{
    domain::{checkout::CheckoutServiceError, payments::DelayedGateway},
    storefront::Storefront,
};

/// Checks out the shared storefront cart through the mock payment gateway.
///
/// No store lock is held while the payment is processing. Only one checkout
/// runs at a time; a second caller gets [`CheckoutServiceError::InProgress`]
/// instead of paying for the same cart twice.
#[derive(Debug)]
pub struct StorefrontCheckoutService {
    storefront: Storefront,
    gateway: DelayedGateway<InstantGateway>,
}

impl StorefrontCheckoutService {
    /// Create a service over `storefront`, charging through `gateway`.
    #[must_use]
    pub fn new(storefront: Storefront, gateway: DelayedGateway<InstantGateway>) -> Self {
        Self {
            storefront,
            gateway,
        }
    }
}

#[async_trait]
impl CheckoutService for StorefrontCheckoutService {
    async fn checkout(&self, method: PaymentMethod) -> Result<Order, CheckoutServiceError> {
        let Some(_slot) = self.storefront.begin_checkout() else {
            warn!(%method, "checkout already in progress");

            return Err(CheckoutServiceError::InProgress);
        };

        let pending = PendingCheckout::prepare(&*self.storefront.cart().lock().await)?;

        info!(
            items = pending.items().len(),
            total = %pending.total(),
            %method,
            "starting checkout"
        );

        let receipt = self.gateway.charge(pending.request(method)).await?;

        let mut cart = self.storefront.cart().lock().await;
        let mut orders = self.storefront.orders().lock().await;

        let id = pending.complete(&receipt, &mut cart, &mut orders)?;

        orders
            .get(id.as_str())
            .cloned()
            .ok_or(CheckoutServiceError::MissingOrder(id))
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Pay for the cart with `method`, record the order and remove the bought
    /// items from the cart.
    async fn checkout(&self, method: PaymentMethod) -> Result<Order, CheckoutServiceError>;
}
