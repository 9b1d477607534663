//! Timers
//!
//! Browser-timer versions of the simulated payment and assistant latency.

use keepstudy::{
    assistant::{AssistantError, Responder},
    payments::{PaymentError, PaymentGateway, PaymentReceipt, PaymentRequest},
};
#[cfg(not(target_arch = "wasm32"))]
use leptos::task;

/// How long a payment "processes" before it's approved.
pub(crate) const PAYMENT_DELAY_MS: i32 = 2_000;

/// How long the success screen shows before moving to the order.
pub(crate) const ORDER_REDIRECT_DELAY_MS: i32 = 3_000;

/// How long the assistant "thinks" before answering.
pub(crate) const ASSISTANT_DELAY_MS: i32 = 1_000;

/// Hands charges to `inner` after a browser timeout.
#[derive(Debug)]
pub(crate) struct TimerGateway<G> {
    inner: G,
    delay_ms: i32,
}

impl<G> TimerGateway<G> {
    pub(crate) const fn new(inner: G, delay_ms: i32) -> Self {
        Self { inner, delay_ms }
    }
}

impl<G: PaymentGateway> PaymentGateway for TimerGateway<G> {
    async fn charge(&self, request: PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
        wait_for_timeout(self.delay_ms).await;

        self.inner.charge(request).await
    }
}

/// Asks `inner` after a browser timeout.
#[derive(Debug)]
pub(crate) struct TimerResponder<R> {
    inner: R,
    delay_ms: i32,
}

impl<R> TimerResponder<R> {
    pub(crate) const fn new(inner: R, delay_ms: i32) -> Self {
        Self { inner, delay_ms }
    }
}

impl<R: Responder> Responder for TimerResponder<R> {
    async fn reply(&self, prompt: &str) -> Result<String, AssistantError> {
        wait_for_timeout(self.delay_ms).await;

        self.inner.reply(prompt).await
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn wait_for_timeout(delay_ms: i32) {
    use js_sys::{Function, Promise};
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use wasm_bindgen_futures::JsFuture;

    let mut executor = move |resolve: Function, _reject: Function| {
        let Some(window) = web_sys::window() else {
            _ = resolve.call0(&JsValue::NULL);
            return;
        };

        let callback = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });

        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    };

    let promise = Promise::new(&mut executor);
    _ = JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn wait_for_timeout(_delay_ms: i32) {
    task::tick().await;
}
