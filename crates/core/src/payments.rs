//! Payments
//!
//! Payment port used by checkout. No real payment provider is integrated;
//! [`InstantGateway`] approves every charge.

use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use crate::orders::PaymentMethod;

/// Payment errors
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The charge was refused
    #[error("Payment declined: {0}")]
    Declined(String),

    /// The gateway couldn't be reached
    #[error("Payment gateway unavailable: {0}")]
    Unavailable(String),
}

/// A charge to collect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Amount in yuan.
    pub amount: Decimal,

    /// Selected payment method.
    pub method: PaymentMethod,
}

/// Proof of a collected charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Gateway reference.
    pub reference: String,

    /// Amount collected.
    pub amount: Decimal,

    /// Method used.
    pub method: PaymentMethod,
}

/// Collects payments.
pub trait PaymentGateway {
    /// Charge `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`PaymentError`] if the charge isn't collected.
    async fn charge(&self, request: PaymentRequest) -> Result<PaymentReceipt, PaymentError>;
}

/// Approves every charge immediately.
#[derive(Debug, Default)]
pub struct InstantGateway {
    issued: AtomicU64,
}

impl InstantGateway {
    /// Create a gateway.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaymentGateway for InstantGateway {
    async fn charge(&self, request: PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
        let sequence = self.issued.fetch_add(1, Ordering::Relaxed).saturating_add(1);
        let reference = format!("PAY{sequence:06}");

        info!(%reference, amount = %request.amount, method = %request.method, "payment approved");

        Ok(PaymentReceipt {
            reference,
            amount: request.amount,
            method: request.method,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn instant_gateway_approves_with_fresh_references() -> TestResult {
        let gateway = InstantGateway::new();
        let request = PaymentRequest {
            amount: Decimal::new(29_900, 2),
            method: PaymentMethod::Wechat,
        };

        let first = gateway.charge(request.clone()).await?;
        let second = gateway.charge(request).await?;

        assert_eq!(first.amount, Decimal::new(299, 0));
        assert_eq!(first.method, PaymentMethod::Wechat);
        assert_eq!(first.reference, "PAY000001");
        assert_ne!(first.reference, second.reference);

        Ok(())
    }
}
