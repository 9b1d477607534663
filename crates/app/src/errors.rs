//! Application Errors

use std::io;

use keepstudy::{
    assessments::AssessmentError, catalog::CatalogError, community::CommunityError,
    prices::PriceError, storage::StorageError,
};
use thiserror::Error;

use crate::{
    domain::{assistant::AssistantServiceError, checkout::CheckoutServiceError},
    observability::ObservabilityError,
    storefront::StorefrontError,
};

/// Errors surfaced by the `keepstudy` application.
#[derive(Debug, Error)]
pub enum AppError {
    /// Persisted state couldn't be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The bundled catalog is invalid.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The bundled community feed is invalid.
    #[error(transparent)]
    Community(#[from] CommunityError),

    /// The bundled assessment content is invalid.
    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    /// A stored price couldn't be parsed.
    #[error(transparent)]
    Price(#[from] PriceError),

    /// Storefront operation failed.
    #[error(transparent)]
    Storefront(#[from] StorefrontError),

    /// Checkout failed.
    #[error(transparent)]
    Checkout(#[from] CheckoutServiceError),

    /// The assistant couldn't answer.
    #[error(transparent)]
    Assistant(#[from] AssistantServiceError),

    /// Logging couldn't be initialised.
    #[error(transparent)]
    Observability(#[from] ObservabilityError),

    /// No order with this id.
    #[error("order {0} not found")]
    UnknownOrder(String),

    /// No channel with this id.
    #[error("channel {0} not found")]
    UnknownChannel(u32),

    /// No learning plan with this id.
    #[error("plan {0} not found")]
    UnknownPlan(u32),

    /// No assessment project with this id.
    #[error("project {0} not found")]
    UnknownProject(u32),

    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
