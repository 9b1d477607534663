//! Assistant

mod delayed;
pub mod errors;
pub mod service;

pub use delayed::DelayedResponder;
pub use errors::AssistantServiceError;
pub use service::*;
