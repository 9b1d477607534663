use keepstudy::{
    orders::{Order, OrderAction, OrderId},
    routes::{Route, WorkspaceRoute},
};
use leptos::prelude::*;

use super::{order_date, order_total};
use crate::{
    routing::{href, navigate},
    state::AppState,
};

/// Where an action button leads, if anywhere.
fn action_target(action: OrderAction) -> Option<Route> {
    match action {
        OrderAction::StartLearning => Some(Route::Workspace(WorkspaceRoute::Default)),
        OrderAction::ContinuePayment => Some(Route::Checkout),
        OrderAction::DownloadInvoice | OrderAction::Cancel => None,
    }
}

#[component]
pub(crate) fn OrderDetailPage(state: AppState, id: OrderId) -> impl IntoView {
    move || match state.order(id.as_str()) {
        Some(order) => view! { <OrderDetail order=order /> }.into_any(),
        None => view! {
            <div class="container mx-auto max-w-[1100px] px-4 py-20 text-center">
                <h2 class="text-xl font-medium mb-4">"订单不存在"</h2>
                <a href=href(&Route::Orders) class="text-blue-600">"返回订单列表"</a>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn OrderDetail(order: Order) -> impl IntoView {
    let status = order.status.label();
    let total = order_total(&order);
    let date = order_date(&order);

    let actions = order
        .status
        .actions()
        .iter()
        .enumerate()
        .map(|(position, &action)| {
            let class = if position == 0 {
                "w-full py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600"
            } else {
                "w-full py-2 border border-gray-300 rounded-lg hover:bg-gray-50"
            };

            view! {
                <button
                    type="button"
                    class=class
                    on:click=move |_| {
                        if let Some(route) = action_target(action) {
                            navigate(&route);
                        }
                    }
                >
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    let items = order
        .items
        .iter()
        .map(|item| {
            view! {
                <div class="flex items-center p-4 border-b border-gray-100 last:border-b-0">
                    <img src=item.image.clone() alt=item.title.clone() class="w-20 h-14 object-cover rounded" />
                    <a href=href(&Route::Course(item.id)) class="ml-4 flex-1 font-medium">{item.title.clone()}</a>
                    <span class="text-red-500">{item.price.clone()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="container mx-auto max-w-[1100px] px-4 py-8">
            <a href=href(&Route::Orders) class="text-gray-600">"← 返回订单列表"</a>
            <h1 class="text-2xl font-bold my-6">"订单详情"</h1>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 space-y-6">
                    <div class="bg-white rounded-lg shadow-sm p-6">
                        <div class="flex items-center justify-between mb-4">
                            <span class="text-gray-500">{format!("订单编号: {}", order.id)}</span>
                            <span class=format!("px-2 py-0.5 rounded {}", status.tone.badge_class())>{status.text}</span>
                        </div>
                        <dl class="grid grid-cols-2 gap-y-2 text-sm">
                            <dt class="text-gray-500">"下单时间"</dt>
                            <dd>{date}</dd>
                            <dt class="text-gray-500">"支付方式"</dt>
                            <dd>{order.payment_method.label()}</dd>
                            <dt class="text-gray-500">"实付金额"</dt>
                            <dd class="font-bold text-red-500">{total}</dd>
                        </dl>
                    </div>
                    <div class="bg-white rounded-lg shadow-sm">
                        <h2 class="p-4 border-b border-gray-100 font-medium">"课程信息"</h2>
                        {items}
                    </div>
                </div>
                <div class="bg-white rounded-lg shadow-sm p-6 h-fit space-y-3">{actions}</div>
            </div>
        </div>
    }
}
