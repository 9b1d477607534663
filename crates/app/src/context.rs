//! App Context

use std::sync::Arc;

use keepstudy::{
    assistant::CannedResponder,
    catalog::Catalog,
    payments::InstantGateway,
    storage::{KeyValueStore, MemoryStore},
};
use tracing::debug;

use crate::{
    config::AppConfig,
    domain::{
        assistant::{AssistantService, CannedAssistantService, DelayedResponder},
        checkout::{CheckoutService, StorefrontCheckoutService},
        payments::DelayedGateway,
    },
    errors::AppError,
    storage::FileStore,
    storefront::Storefront,
};

/// Services and shared state of a running application.
#[derive(Clone)]
pub struct AppContext {
    /// Catalog and stores.
    pub storefront: Storefront,

    /// Checkout flow.
    pub checkout: Arc<dyn CheckoutService>,

    /// Learning assistant.
    pub assistant: Arc<dyn AssistantService>,
}

impl AppContext {
    /// Build the application from configuration: file-backed durable storage
    /// in the data directory and a process-local session slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory or the bundled catalog can't be
    /// loaded.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let durable: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.storage.data_dir)?);

        debug!(data_dir = %config.storage.data_dir.display(), "opened storage");

        let storefront = Storefront::load(Catalog::demo()?, durable, Arc::new(MemoryStore::new()))?;

        let checkout = StorefrontCheckoutService::new(
            storefront.clone(),
            DelayedGateway::new(InstantGateway::new(), config.delays.payment_delay()),
        );

        let assistant = CannedAssistantService::new(DelayedResponder::new(
            CannedResponder::general(),
            config.delays.assistant_delay(),
        ));

        Ok(Self {
            storefront,
            checkout: Arc::new(checkout),
            assistant: Arc::new(assistant),
        })
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("storefront", &self.storefront)
            .finish_non_exhaustive()
    }
}
