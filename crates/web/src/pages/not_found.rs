use keepstudy::routes::Route;
use leptos::prelude::*;

use crate::routing::href;

#[component]
pub(crate) fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="container mx-auto max-w-[1100px] px-4 py-24 text-center">
            <h1 class="text-5xl font-bold text-gray-300 mb-4">"404"</h1>
            <p class="text-gray-600 mb-8">"页面不存在"</p>
            <a href=href(&Route::Home) class="px-6 py-3 bg-blue-500 text-white rounded-lg">"返回首页"</a>
        </div>
    }
}
