//! Application state, handed to each page as an explicit prop.

use std::sync::Arc;

use keepstudy::{
    assessments::AssessmentCenter,
    cart::{AddOutcome, CartItem, CartStore},
    catalog::Catalog,
    checkout::{CheckoutError, PendingCheckout},
    events::{ChangeEvent, Notifier},
    orders::{Order, OrderId, OrderStore},
    payments::{InstantGateway, PaymentReceipt},
    routes::Route,
    session::{SessionStore, User},
    storage::{KeyValueStore, StorageError},
};
use leptos::{logging::warn, prelude::*};

use crate::{
    routing::current_route,
    storage::WebStorage,
    timers::{PAYMENT_DELAY_MS, TimerGateway},
};

/// Stores, catalog and the signals pages react to.
#[derive(Debug, Clone)]
pub(crate) struct AppState {
    /// Course catalog.
    pub(crate) catalog: Arc<Catalog>,

    /// Assessment centre and learning plans.
    pub(crate) assessments: Arc<AssessmentCenter>,

    /// Cart; read it through [`AppState::cart_items`] to stay reactive.
    pub(crate) cart: StoredValue<CartStore>,

    /// Order history.
    pub(crate) orders: StoredValue<OrderStore>,

    /// Sign-in slots.
    pub(crate) session: SessionStore,

    /// Simulated payment processor.
    pub(crate) gateway: Arc<TimerGateway<InstantGateway>>,

    /// Current page.
    pub(crate) route: RwSignal<Route>,

    /// Bumped on every `cartUpdated` browser event.
    pub(crate) cart_version: RwSignal<u64>,

    /// Bumped whenever an order is recorded.
    pub(crate) orders_version: RwSignal<u64>,

    /// Signed-in user, if any.
    pub(crate) user: RwSignal<Option<User>>,
}

impl AppState {
    /// Load the catalog, the assessment centre and the persisted stores.
    pub(crate) fn load() -> Result<Self, String> {
        let catalog = Catalog::demo().map_err(|error| error.to_string())?;
        let assessments = AssessmentCenter::demo().map_err(|error| error.to_string())?;

        let durable: Arc<dyn KeyValueStore> = Arc::new(WebStorage::local());
        let session: Arc<dyn KeyValueStore> = Arc::new(WebStorage::session());

        let notifier = Notifier::new();
        notifier.subscribe(dispatch_dom_event);

        let cart = CartStore::load(Arc::clone(&durable), notifier).map_err(|error| error.to_string())?;
        let orders = OrderStore::load(Arc::clone(&durable)).map_err(|error| error.to_string())?;
        let session = SessionStore::new(durable, session);

        let user = session.current().unwrap_or_else(|error| {
            warn!("couldn't read sign-in state: {error}");
            None
        });

        Ok(Self {
            catalog: Arc::new(catalog),
            assessments: Arc::new(assessments),
            cart: StoredValue::new(cart),
            orders: StoredValue::new(orders),
            session,
            gateway: Arc::new(TimerGateway::new(InstantGateway::new(), PAYMENT_DELAY_MS)),
            route: RwSignal::new(current_route()),
            cart_version: RwSignal::new(0),
            orders_version: RwSignal::new(0),
            user: RwSignal::new(user),
        })
    }

    /// Cart contents, tracked against `cartUpdated`.
    pub(crate) fn cart_items(&self) -> Vec<CartItem> {
        self.cart_version.track();
        self.cart.with_value(|cart| cart.items().to_vec())
    }

    /// Number of cart items, tracked against `cartUpdated`.
    pub(crate) fn cart_len(&self) -> usize {
        self.cart_version.track();
        self.cart.with_value(CartStore::len)
    }

    /// Whether course `id` is in the cart, tracked against `cartUpdated`.
    pub(crate) fn in_cart(&self, id: u32) -> bool {
        self.cart_version.track();
        self.cart.with_value(|cart| cart.contains(id))
    }

    /// Put course `id` in the cart.
    pub(crate) fn add_to_cart(&self, id: u32) -> Result<AddOutcome, String> {
        let Some(course) = self.catalog.get(id) else {
            return Err(format!("课程 {id} 不存在"));
        };

        self.update_cart(|cart| cart.add(course.to_cart_item()))
    }

    /// Run a mutation against the cart.
    pub(crate) fn update_cart<T>(
        &self,
        change: impl FnOnce(&mut CartStore) -> Result<T, StorageError>,
    ) -> Result<T, String> {
        self.cart
            .try_update_value(change)
            .ok_or_else(|| "购物车不可用".to_string())?
            .map_err(|error| error.to_string())
    }

    /// Snapshot the cart for payment.
    pub(crate) fn prepare_checkout(&self) -> Result<PendingCheckout, CheckoutError> {
        self.cart
            .try_with_value(PendingCheckout::prepare)
            .unwrap_or(Err(CheckoutError::EmptyCart))
    }

    /// Record the paid order and empty the cart.
    pub(crate) fn complete_checkout(
        &self,
        pending: PendingCheckout,
        receipt: &PaymentReceipt,
    ) -> Result<OrderId, String> {
        let orders = self.orders;

        let completed = self
            .cart
            .try_update_value(|cart| orders.try_update_value(|orders| pending.complete(receipt, cart, orders)))
            .flatten()
            .ok_or_else(|| "订单不可用".to_string())?
            .map_err(|error| error.to_string())?;

        self.orders_version.update(|version| *version = version.wrapping_add(1));

        Ok(completed)
    }

    /// Orders matching `term`, newest first, tracked against new orders.
    pub(crate) fn search_orders(&self, term: &str) -> Vec<Order> {
        self.orders_version.track();
        self.orders
            .with_value(|orders| orders.search(term).into_iter().cloned().collect())
    }

    /// Order `id`, tracked against new orders.
    pub(crate) fn order(&self, id: &str) -> Option<Order> {
        self.orders_version.track();
        self.orders.with_value(|orders| orders.get(id).cloned())
    }

    /// Record a successful sign-in.
    pub(crate) fn sign_in(&self, username: &str, remember: bool) -> Result<(), String> {
        let user = self
            .session
            .login(username, remember)
            .map_err(|error| error.to_string())?;

        self.user.set(Some(user));

        Ok(())
    }

    /// Sign out.
    pub(crate) fn sign_out(&self) {
        if let Err(error) = self.session.logout() {
            warn!("couldn't clear sign-in state: {error}");
        }

        self.user.set(None);
    }
}

/// Re-broadcast a store event on `window` so any view can listen for it.
fn dispatch_dom_event(event: ChangeEvent) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let dispatched = web_sys::CustomEvent::new(event.name())
        .and_then(|dom_event| window.dispatch_event(&dom_event));

    if let Err(error) = dispatched {
        warn!("couldn't dispatch {}: {error:?}", event.name());
    }
}
