//! Delay Config

use std::time::Duration;

use clap::Args;

/// Simulated latency of the mock payment provider and assistant.
#[derive(Debug, Args)]
pub struct DelayConfig {
    /// Simulated payment processing time in milliseconds
    #[arg(long, env = "PAYMENT_DELAY_MS", default_value_t = 2_000, global = true)]
    pub payment_delay_ms: u64,

    /// Simulated assistant thinking time in milliseconds
    #[arg(long, env = "ASSISTANT_DELAY_MS", default_value_t = 1_000, global = true)]
    pub assistant_delay_ms: u64,
}

impl DelayConfig {
    /// Payment processing delay.
    #[must_use]
    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    /// Assistant reply delay.
    #[must_use]
    pub fn assistant_delay(&self) -> Duration {
        Duration::from_millis(self.assistant_delay_ms)
    }
}
