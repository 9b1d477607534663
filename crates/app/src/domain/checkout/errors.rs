//! Checkout Service Errors

use keepstudy::{checkout::CheckoutError, orders::OrderId, payments::PaymentError};
use thiserror::Error;

/// Errors raised by the checkout service.
#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    /// Checkout failed.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// Another checkout of this cart hasn't finished yet.
    #[error("a checkout is already in progress")]
    InProgress,

    /// The order was recorded but can't be read back.
    #[error("order {0} missing after checkout")]
    MissingOrder(OrderId),
}

impl From<PaymentError> for CheckoutServiceError {
    fn from(error: PaymentError) -> Self {
        Self::Checkout(CheckoutError::Payment(error))
    }
}
