use std::{sync::Arc, time::Duration};

use keepstudy::{
    assistant::CannedResponder,
    catalog::Catalog,
    payments::InstantGateway,
    storage::{KeyValueStore, MemoryStore},
};
use keepstudy_app::{
    context::AppContext,
    domain::{
        assistant::{CannedAssistantService, DelayedResponder, MockAssistantService},
        checkout::{MockCheckoutService, StorefrontCheckoutService},
        payments::DelayedGateway,
    },
    storefront::Storefront,
};
use testresult::TestResult;

/// Context over in-memory storage with instant payments and replies.
pub(crate) fn context() -> TestResult<AppContext> {
    let storefront = storefront()?;

    Ok(AppContext {
        checkout: Arc::new(StorefrontCheckoutService::new(
            storefront.clone(),
            DelayedGateway::new(InstantGateway::new(), Duration::ZERO),
        )),
        assistant: Arc::new(CannedAssistantService::new(DelayedResponder::new(
            CannedResponder::general(),
            Duration::ZERO,
        ))),
        storefront,
    })
}

/// Context whose services are the given mocks.
pub(crate) fn mocked_context(
    checkout: MockCheckoutService,
    assistant: MockAssistantService,
) -> TestResult<AppContext> {
    Ok(AppContext {
        storefront: storefront()?,
        checkout: Arc::new(checkout),
        assistant: Arc::new(assistant),
    })
}

fn storefront() -> TestResult<Storefront> {
    let durable: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

    Ok(Storefront::load(
        Catalog::demo()?,
        durable,
        Arc::new(MemoryStore::new()),
    )?)
}

/// Captured command output.
pub(crate) fn output(buffer: Vec<u8>) -> TestResult<String> {
    Ok(String::from_utf8(buffer)?)
}
