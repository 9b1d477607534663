//! Storage Keys

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Well-known keys of the persisted state layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Array of cart items.
    CartItems,

    /// Array of orders.
    Orders,

    /// Logged-in user flag.
    User,
}

impl StorageKey {
    /// Key name as written to the backing store.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CartItems => "cartItems",
            Self::Orders => "orders",
            Self::User => "user",
        }
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
