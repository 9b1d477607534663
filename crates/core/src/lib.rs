//! KeepStudy
//!
//! Storefront and learning-workspace core for the KeepStudy education platform:
//! course catalog, persisted cart and orders, mock checkout and session, the
//! assessment centre with learning plans, plus the route table and community
//! board used by the front ends.

pub mod assessments;
pub mod assistant;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod community;
pub mod events;
pub mod orders;
pub mod payments;
pub mod prelude;
pub mod prices;
pub mod routes;
pub mod session;
pub mod storage;
