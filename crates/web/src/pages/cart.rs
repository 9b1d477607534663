use keepstudy::{
    cart::CartItem,
    prices::{format_price, sum_prices},
    routes::Route,
};
use leptos::{logging::warn, prelude::*};

use crate::{
    routing::{href, navigate},
    state::AppState,
};

/// Display total of `items`, or a placeholder if a price can't be read.
pub(crate) fn display_total(items: &[CartItem]) -> String {
    sum_prices(items.iter().map(|item| item.price.as_str())).map_or_else(
        |error| {
            warn!("cart total unavailable: {error}");
            "--".to_string()
        },
        |total| format_price(&total),
    )
}

#[component]
pub(crate) fn CartPage(state: AppState) -> impl IntoView {
    let notice = RwSignal::new(None::<String>);

    let clear_state = state.clone();
    let clear = move |_| {
        if let Err(error) = clear_state.update_cart(|cart| cart.clear()) {
            notice.set(Some(error));
        }
    };

    view! {
        <div class="container mx-auto max-w-[1100px] px-4 py-8">
            <h1 class="text-2xl font-bold mb-6">"购物车"</h1>
            {move || notice.get().map(|message| view! { <p class="mb-4 text-sm text-red-600">{message}</p> })}
            {move || {
                let items = state.cart_items();

                if items.is_empty() {
                    return view! {
                        <div class="bg-white rounded-lg shadow-sm p-12 text-center">
                            <p class="text-gray-600 mb-6">"购物车是空的"</p>
                            <a href=href(&Route::Courses) class="px-6 py-3 bg-blue-500 text-white rounded-lg">
                                "去逛逛课程"
                            </a>
                        </div>
                    }
                    .into_any();
                }

                let count = items.len();
                let total = display_total(&items);
                let rows = items
                    .into_iter()
                    .map(|item| view! { <CartRow state=state.clone() item=item notice=notice /> })
                    .collect_view();

                view! {
                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                        <div class="lg:col-span-2 bg-white rounded-lg shadow-sm">{rows}</div>
                        <div class="bg-white rounded-lg shadow-sm p-6 h-fit">
                            <h2 class="font-medium mb-4">"订单摘要"</h2>
                            <div class="flex justify-between text-sm text-gray-600 mb-2">
                                <span>"课程数量"</span>
                                <span>{count}</span>
                            </div>
                            <div class="flex justify-between font-bold text-lg border-t pt-4 mb-6">
                                <span>"合计"</span>
                                <span class="text-red-500">{total}</span>
                            </div>
                            <button
                                type="button"
                                class="w-full py-3 bg-blue-500 text-white rounded-lg hover:bg-blue-600 mb-3"
                                on:click=move |_| navigate(&Route::Checkout)
                            >
                                "去结算"
                            </button>
                            <button
                                type="button"
                                class="w-full py-2 text-sm text-gray-500 hover:text-red-500"
                                on:click=clear.clone()
                            >
                                "清空购物车"
                            </button>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn CartRow(state: AppState, item: CartItem, notice: RwSignal<Option<String>>) -> impl IntoView {
    let id = item.id;

    let remove = move |_| {
        if let Err(error) = state.update_cart(|cart| cart.remove(id)) {
            notice.set(Some(error));
        }
    };

    view! {
        <div class="flex items-center p-4 border-b border-gray-100 last:border-b-0">
            <img src=item.image alt=item.title.clone() class="w-24 h-16 object-cover rounded" />
            <div class="ml-4 flex-1">
                <a href=href(&Route::Course(id)) class="font-medium hover:text-blue-600">{item.title}</a>
            </div>
            <div class="text-right mr-6">
                <div class="text-red-500 font-medium">{item.price}</div>
                {item
                    .original_price
                    .map(|original| view! { <div class="text-xs text-gray-400 line-through">{original}</div> })}
            </div>
            <button type="button" class="text-gray-400 hover:text-red-500" on:click=remove>
                "删除"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, price: &str) -> CartItem {
        CartItem {
            id,
            title: format!("Course {id}"),
            price: price.to_string(),
            original_price: None,
            image: String::new(),
        }
    }

    #[test]
    fn total_sums_display_prices() {
        let items = [item(1, "¥299"), item(2, "¥199.50")];

        assert_eq!(display_total(&items), "¥498.50");
    }

    #[test]
    fn unreadable_price_shows_placeholder() {
        let items = [item(1, "¥299"), item(2, "free")];

        assert_eq!(display_total(&items), "--");
    }
}
