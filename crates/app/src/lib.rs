//! KeepStudy application services: file-backed storage, simulated payment and
//! assistant latency, shared storefront state and configuration.

pub mod config;
pub mod context;
pub mod domain;
pub mod errors;
pub mod observability;
pub mod storage;
pub mod storefront;
