//! Order Ids

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    sync::{Mutex, PoisonError},
};

use jiff::Timestamp;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

/// Prefix of every generated order id.
pub const ORDER_ID_PREFIX: &str = "KS";

/// Exclusive upper bound of the random suffix.
const RANDOM_SUFFIX_BOUND: u32 = 10_000;

/// Order identifier, e.g. `KS17000000000004821`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Wrap an existing id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Source of candidate order ids.
///
/// Candidates aren't required to be unique; the order store resolves
/// collisions against the ids it already holds.
pub trait OrderIdGenerator: std::fmt::Debug + Send + Sync {
    /// Produce a candidate id for an order created at `now`.
    fn candidate(&self, now: Timestamp) -> OrderId;
}

/// `KS` + unix milliseconds + a random number below 10 000.
#[derive(Debug)]
pub struct TimestampIdGenerator {
    rng: Mutex<StdRng>,
}

impl TimestampIdGenerator {
    /// Generator seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Generator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for TimestampIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderIdGenerator for TimestampIdGenerator {
    fn candidate(&self, now: Timestamp) -> OrderId {
        let random = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..RANDOM_SUFFIX_BOUND);

        OrderId(format!(
            "{ORDER_ID_PREFIX}{}{random}",
            now.as_millisecond()
        ))
    }
}

/// Always proposes the same id. Only useful to exercise collision handling.
#[derive(Debug, Clone)]
pub struct FixedIdGenerator(pub OrderId);

impl OrderIdGenerator for FixedIdGenerator {
    fn candidate(&self, _now: Timestamp) -> OrderId {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn candidate_embeds_prefix_and_timestamp() -> TestResult {
        let now = Timestamp::from_millisecond(1_700_000_000_000)?;
        let id = TimestampIdGenerator::seeded(7).candidate(now);

        assert!(
            id.as_str().starts_with("KS1700000000000"),
            "unexpected id {id}"
        );

        let suffix = id.as_str().trim_start_matches("KS1700000000000");

        assert!(suffix.parse::<u32>()? < RANDOM_SUFFIX_BOUND);

        Ok(())
    }

    #[test]
    fn serializes_as_plain_string() -> TestResult {
        let id = OrderId::from("KS1");

        assert_eq!(serde_json::to_string(&id)?, r#""KS1""#);

        Ok(())
    }
}
