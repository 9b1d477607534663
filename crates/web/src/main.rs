//! KeepStudy storefront, client-side rendered.

use keepstudy::{events::ChangeEvent, routes::Route};
use leptos::prelude::*;

mod layout;
mod pages;
mod routing;
mod state;
mod storage;
mod timers;

use crate::{routing::current_route, state::AppState};

/// App shell: chrome plus the page for the current hash route.
#[component]
fn App() -> impl IntoView {
    match AppState::load() {
        Ok(state) => {
            let route = state.route;
            let cart_version = state.cart_version;

            let cart_listener = window_event_listener_untyped(ChangeEvent::CartUpdated.name(), move |_| {
                cart_version.update(|version| *version = version.wrapping_add(1));
            });
            let route_listener = window_event_listener_untyped("hashchange", move |_| {
                route.set(current_route());
                window().scroll_to_with_x_and_y(0.0, 0.0);
            });

            on_cleanup(move || {
                cart_listener.remove();
                route_listener.remove();
            });

            let shows_chrome = move || route.with(Route::shows_chrome);
            let nav_state = state.clone();

            view! {
                <Show when=shows_chrome>
                    <layout::Navbar state=nav_state.clone() />
                </Show>
                <div class=move || if shows_chrome() { "min-h-screen pt-[72px]" } else { "min-h-screen" }>
                    {move || pages::page(route.get(), state.clone())}
                </div>
                <Show when=shows_chrome>
                    <layout::Footer />
                </Show>
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                <div class="mx-auto mb-6 max-w-5xl">
                    <h1 class="text-2xl font-semibold tracking-tight">"KeepStudy"</h1>
                </div>
                <div class="mx-auto max-w-3xl rounded-lg border border-red-200 bg-red-50 p-4">
                    <p class="text-sm text-red-700">{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
