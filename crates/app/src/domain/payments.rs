//! Payments

use std::time::Duration;

use keepstudy::payments::{PaymentError, PaymentGateway, PaymentReceipt, PaymentRequest};
use tracing::debug;

/// Waits a fixed time before handing the charge to the wrapped gateway, the
/// way a hosted payment page keeps the buyer waiting.
#[derive(Debug)]
pub struct DelayedGateway<G> {
    inner: G,
    delay: Duration,
}

impl<G> DelayedGateway<G> {
    /// Wrap `inner`, delaying every charge by `delay`.
    pub fn new(inner: G, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<G: PaymentGateway> PaymentGateway for DelayedGateway<G> {
    async fn charge(&self, request: PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
        debug!(delay_ms = self.delay.as_millis(), "processing payment");

        tokio::time::sleep(self.delay).await;

        self.inner.charge(request).await
    }
}
