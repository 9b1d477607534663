use keepstudy::{
    checkout::CheckoutError,
    orders::{OrderId, PaymentMethod},
    payments::PaymentGateway,
    routes::{Route, WorkspaceRoute},
};
use leptos::{logging::warn, prelude::*, task};

use super::cart::display_total;
use crate::{
    routing::{href, navigate},
    state::AppState,
    timers::{ORDER_REDIRECT_DELAY_MS, wait_for_timeout},
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Stage {
    Review,
    Processing,
    Paid(OrderId),
    Failed(String),
}

#[component]
pub(crate) fn CheckoutPage(state: AppState) -> impl IntoView {
    let stage = RwSignal::new(Stage::Review);
    let method = RwSignal::new(PaymentMethod::Alipay);

    let pay_state = state.clone();
    let pay = move |_| {
        let pending = match pay_state.prepare_checkout() {
            Ok(pending) => pending,
            Err(CheckoutError::EmptyCart) => return,
            Err(error) => {
                stage.set(Stage::Failed(error.to_string()));
                return;
            }
        };

        stage.set(Stage::Processing);

        let state = pay_state.clone();
        let request = pending.request(method.get_untracked());

        task::spawn_local(async move {
            let outcome = match state.gateway.charge(request).await {
                Ok(receipt) => state.complete_checkout(pending, &receipt),
                Err(error) => Err(error.to_string()),
            };

            match outcome {
                Ok(id) => {
                    stage.set(Stage::Paid(id.clone()));

                    wait_for_timeout(ORDER_REDIRECT_DELAY_MS).await;

                    if state.route.get_untracked() == Route::Checkout {
                        navigate(&Route::Order(id));
                    }
                }
                Err(error) => {
                    warn!("checkout failed: {error}");
                    stage.set(Stage::Failed(error));
                }
            }
        });
    };

    move || match stage.get() {
        Stage::Paid(id) => view! { <PaymentSuccess id=id /> }.into_any(),
        Stage::Review | Stage::Processing | Stage::Failed(_) => {
            let items = state.cart_items();

            if items.is_empty() && stage.with(|stage| *stage == Stage::Review) {
                return view! {
                    <div class="container mx-auto max-w-[1100px] px-4 py-20 text-center">
                        <h2 class="text-xl font-medium mb-4">"购物车为空"</h2>
                        <p class="text-gray-600 mb-6">"请先将课程添加到购物车再进行结算。"</p>
                        <a href=href(&Route::Cart) class="px-6 py-3 bg-blue-500 text-white rounded-lg">
                            "返回购物车"
                        </a>
                    </div>
                }
                .into_any();
            }

            let total = display_total(&items);
            let processing = move || stage.with(|stage| *stage == Stage::Processing);
            let rows = items
                .into_iter()
                .map(|item| {
                    view! {
                        <div class="flex p-4 border-b border-gray-100 last:border-b-0">
                            <img src=item.image alt=item.title.clone() class="w-16 h-16 object-cover rounded" />
                            <div class="ml-4 flex-1 flex justify-between">
                                <span class="font-medium">{item.title}</span>
                                <span class="text-red-500">{item.price}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view();

            view! {
                <div class="container mx-auto max-w-[1100px] px-4 py-8">
                    <a href=href(&Route::Cart) class="text-gray-600">"← 返回购物车"</a>
                    <h1 class="text-2xl font-bold my-6">"确认订单"</h1>
                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                        <div class="lg:col-span-2 space-y-6">
                            <div class="bg-white rounded-lg shadow-sm">
                                <h2 class="p-4 border-b border-gray-100 font-medium">"订单商品"</h2>
                                {rows}
                            </div>
                            <MethodPicker method=method />
                        </div>
                        <div class="bg-white rounded-lg shadow-sm p-6 h-fit">
                            <div class="flex justify-between font-bold text-lg mb-6">
                                <span>"应付金额"</span>
                                <span class="text-red-500">{total}</span>
                            </div>
                            <button
                                type="button"
                                class="w-full py-3 bg-blue-500 text-white rounded-lg hover:bg-blue-600 disabled:opacity-60"
                                disabled=processing
                                on:click=pay.clone()
                            >
                                {move || if processing() { "支付处理中..." } else { "提交订单" }}
                            </button>
                            {move || match stage.get() {
                                Stage::Failed(error) => {
                                    Some(view! { <p class="mt-3 text-sm text-red-600">{error}</p> })
                                }
                                _ => None,
                            }}
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn MethodPicker(method: RwSignal<PaymentMethod>) -> impl IntoView {
    let options = PaymentMethod::OFFERED
        .into_iter()
        .map(|option| {
            let label = option.label();
            let value = option.as_str().to_string();
            let selected = option.clone();

            view! {
                <label class="flex items-center p-3 border rounded-lg cursor-pointer hover:bg-blue-50">
                    <input
                        type="radio"
                        name="paymentMethod"
                        value=value
                        prop:checked=move || method.with(|method| *method == selected)
                        on:change=move |_| method.set(option.clone())
                    />
                    <span class="ml-3">{label}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="bg-white rounded-lg shadow-sm">
            <h2 class="p-4 border-b border-gray-100 font-medium">"支付方式"</h2>
            <div class="p-4 space-y-3">{options}</div>
        </div>
    }
}

#[component]
fn PaymentSuccess(id: OrderId) -> impl IntoView {
    let order_link = href(&Route::Order(id.clone()));

    view! {
        <div class="container mx-auto max-w-lg px-4 py-20">
            <div class="text-center p-8 bg-white rounded-lg shadow-sm">
                <div class="w-16 h-16 bg-green-100 text-green-600 text-2xl rounded-full flex items-center justify-center mx-auto mb-4">
                    "✓"
                </div>
                <h2 class="text-2xl font-bold mb-4">"支付成功！"</h2>
                <p class="text-gray-600 mb-2">"您的订单已成功支付。"</p>
                <p class="text-gray-600 mb-6">{format!("订单编号: {id}")}</p>
                <p class="text-gray-500 text-sm mb-8">"页面将在3秒后自动跳转到订单详情..."</p>
                <div class="flex justify-center space-x-4">
                    <a href=order_link class="px-6 py-2 bg-blue-500 text-white rounded-lg">"查看订单"</a>
                    <a
                        href=href(&Route::Workspace(WorkspaceRoute::Default))
                        class="px-6 py-2 border border-gray-300 rounded-lg"
                    >
                        "进入学习"
                    </a>
                </div>
            </div>
        </div>
    }
}
