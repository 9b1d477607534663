//! Delayed Responder

use std::time::Duration;

use keepstudy::assistant::{AssistantError, Responder};
use tracing::debug;

/// Waits a fixed time before asking the wrapped responder.
#[derive(Debug)]
pub struct DelayedResponder<R> {
    inner: R,
    delay: Duration,
}

impl<R> DelayedResponder<R> {
    /// Wrap `inner`, delaying every reply by `delay`.
    pub fn new(inner: R, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

impl<R: Responder> Responder for DelayedResponder<R> {
    async fn reply(&self, prompt: &str) -> Result<String, AssistantError> {
        debug!(delay_ms = self.delay.as_millis(), "assistant thinking");

        tokio::time::sleep(self.delay).await;

        self.inner.reply(prompt).await
    }
}
