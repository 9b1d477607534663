//! KeepStudy Domain Services

pub mod assistant;
pub mod checkout;
pub mod payments;
