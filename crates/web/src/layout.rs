//! Navigation bar and footer.

use keepstudy::routes::{Route, WorkspaceRoute};
use leptos::prelude::*;

use crate::{
    routing::{href, navigate},
    state::AppState,
};

/// Badge text for `count` cart items; hidden when empty.
pub(crate) fn badge_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_string()),
    }
}

/// Top navigation with the cart badge.
#[component]
pub(crate) fn Navbar(state: AppState) -> impl IntoView {
    let badge_state = state.clone();
    let user_state = state.clone();

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 h-[72px] flex items-center bg-white shadow-md">
            <div class="container mx-auto max-w-[1100px] px-4 flex justify-between items-center">
                <a href=href(&Route::Home) class="text-2xl font-bold text-blue-600 italic font-serif">
                    "KeepStudy"
                </a>
                <div class="flex items-center space-x-8">
                    <a href=href(&Route::Home) class="nav-link">"首页"</a>
                    <a href=href(&Route::Courses) class="nav-link">"课程广场"</a>
                    <a href=href(&Route::Community) class="nav-link">"交流社区"</a>
                    <a href=href(&Route::Assessments) class="nav-link">"AI 测评"</a>
                    {move || {
                        state
                            .user
                            .get()
                            .is_some()
                            .then(|| {
                                view! {
                                    <a
                                        href=href(&Route::Workspace(WorkspaceRoute::Default))
                                        class="px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600"
                                    >
                                        "学习工作台"
                                    </a>
                                }
                            })
                    }}
                    <a href=href(&Route::Cart) class="relative nav-link" aria-label="购物车">
                        "购物车"
                        {move || {
                            badge_label(badge_state.cart_len())
                                .map(|label| {
                                    view! {
                                        <span class="absolute -top-2 -right-4 rounded-full bg-red-500 px-1.5 text-xs text-white">
                                            {label}
                                        </span>
                                    }
                                })
                        }}
                    </a>
                    {move || {
                        let state = user_state.clone();

                        match user_state.user.get().and_then(|user| user.username) {
                            Some(username) => view! {
                                <div class="flex items-center space-x-4">
                                    <a href=href(&Route::Orders) class="nav-link">"我的订单"</a>
                                    <span class="text-gray-700">{username}</span>
                                    <button
                                        type="button"
                                        class="text-gray-500 hover:text-red-500"
                                        on:click=move |_| {
                                            state.sign_out();
                                            navigate(&Route::Home);
                                        }
                                    >
                                        "退出登录"
                                    </button>
                                </div>
                            }
                            .into_any(),
                            None => view! {
                                <div class="flex items-center space-x-4">
                                    <a href=href(&Route::Login) class="nav-link">"登录"</a>
                                    <a
                                        href=href(&Route::Register)
                                        class="px-4 py-2 border border-blue-500 text-blue-500 rounded-lg"
                                    >
                                        "注册"
                                    </a>
                                </div>
                            }
                            .into_any(),
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}

/// Site footer.
#[component]
pub(crate) fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 text-gray-300 py-10 mt-12">
            <div class="container mx-auto max-w-[1100px] px-4 grid grid-cols-1 md:grid-cols-3 gap-8">
                <div>
                    <h3 class="text-white text-lg font-bold mb-2">"KeepStudy"</h3>
                    <p class="text-sm">"专注于编程与技术成长的在线学习平台。"</p>
                </div>
                <div>
                    <h4 class="text-white font-medium mb-2">"快速链接"</h4>
                    <ul class="space-y-1 text-sm">
                        <li><a href=href(&Route::Courses)>"课程广场"</a></li>
                        <li><a href=href(&Route::Community)>"交流社区"</a></li>
                        <li><a href=href(&Route::Orders)>"我的订单"</a></li>
                    </ul>
                </div>
                <div>
                    <h4 class="text-white font-medium mb-2">"联系我们"</h4>
                    <p class="text-sm">"support@keepstudy.com"</p>
                </div>
            </div>
            <p class="text-center text-xs text-gray-500 mt-8">"© 2025 KeepStudy. 保留所有权利。"</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cart_has_no_badge() {
        assert_eq!(badge_label(0), None);
    }

    #[test]
    fn badge_caps_at_ninety_nine() {
        assert_eq!(badge_label(3).as_deref(), Some("3"));
        assert_eq!(badge_label(99).as_deref(), Some("99"));
        assert_eq!(badge_label(120).as_deref(), Some("99+"));
    }
}
