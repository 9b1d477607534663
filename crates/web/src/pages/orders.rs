use keepstudy::{orders::Order, routes::Route};
use leptos::prelude::*;

use super::{order_date, order_total};
use crate::{routing::href, state::AppState};

#[component]
pub(crate) fn OrdersPage(state: AppState) -> impl IntoView {
    let search = RwSignal::new(String::new());

    view! {
        <div class="container mx-auto max-w-[1100px] px-4 py-8">
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold">"我的订单"</h1>
                <input
                    type="search"
                    placeholder="搜索订单号或课程名称"
                    class="w-72 px-4 py-2 border rounded-lg"
                    prop:value=move || search.get()
                    on:input=move |event| search.set(event_target_value(&event))
                />
            </div>
            {move || {
                let orders = search.with(|term| state.search_orders(term));

                if orders.is_empty() {
                    let message = if search.with(|term| term.trim().is_empty()) {
                        "暂无订单"
                    } else {
                        "没有找到匹配的订单"
                    };

                    view! {
                        <div class="bg-white rounded-lg shadow-sm p-12 text-center">
                            <p class="text-gray-600 mb-6">{message}</p>
                            <a href=href(&Route::Courses) class="text-blue-600">"去逛逛课程"</a>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="space-y-4">
                            {orders
                                .into_iter()
                                .map(|order| view! { <OrderCard order=order /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn OrderCard(order: Order) -> impl IntoView {
    let status = order.status.label();
    let link = href(&Route::Order(order.id.clone()));
    let total = order_total(&order);
    let date = order_date(&order);

    let items = order
        .items
        .iter()
        .map(|item| {
            view! {
                <div class="flex items-center py-2">
                    <img src=item.image.clone() alt=item.title.clone() class="w-16 h-10 object-cover rounded" />
                    <span class="ml-3 flex-1">{item.title.clone()}</span>
                    <span class="text-gray-600">{item.price.clone()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="bg-white rounded-lg shadow-sm">
            <div class="flex items-center justify-between p-4 border-b border-gray-100 text-sm">
                <span class="text-gray-500">{format!("订单编号: {} · {date}", order.id)}</span>
                <span class=format!("px-2 py-0.5 rounded {}", status.tone.badge_class())>{status.text}</span>
            </div>
            <div class="px-4">{items}</div>
            <div class="flex items-center justify-between p-4 border-t border-gray-100">
                <span class="text-sm text-gray-500">{order.payment_method.label()}</span>
                <div class="flex items-center space-x-4">
                    <span class="font-bold text-red-500">{total}</span>
                    <a href=link class="px-4 py-1.5 border rounded-lg text-sm hover:bg-gray-50">"查看详情"</a>
                </div>
            </div>
        </div>
    }
}
