use keepstudy::{cart::AddOutcome, routes::Route};
use leptos::prelude::*;

use crate::{
    routing::{href, navigate},
    state::AppState,
};

#[component]
pub(crate) fn CourseDetailPage(state: AppState, id: u32) -> impl IntoView {
    let Some(course) = state.catalog.get(id).cloned() else {
        return view! {
            <div class="container mx-auto max-w-[1100px] px-4 py-20 text-center">
                <h2 class="text-xl font-medium mb-4">"课程不存在"</h2>
                <a href=href(&Route::Courses) class="text-blue-600">"返回课程广场"</a>
            </div>
        }
        .into_any();
    };

    let notice = RwSignal::new(None::<String>);
    let lesson_count = course.lesson_count();

    let add_state = state.clone();
    let buy_state = state.clone();
    let in_cart = Signal::derive(move || state.in_cart(id));

    let add = move |_| {
        let message = match add_state.add_to_cart(id) {
            Ok(AddOutcome::Added) => "已加入购物车".to_string(),
            Ok(AddOutcome::AlreadyPresent) => "课程已在购物车中".to_string(),
            Err(error) => error,
        };

        notice.set(Some(message));
    };

    let buy = move |_| match buy_state.add_to_cart(id) {
        Ok(_) => navigate(&Route::Checkout),
        Err(error) => notice.set(Some(error)),
    };

    let curriculum = course
        .curriculum
        .iter()
        .map(|chapter| {
            view! {
                <li class="flex justify-between py-3 border-b border-gray-100 last:border-b-0">
                    <span>{format!("第 {} 章 · {}", chapter.id, chapter.title)}</span>
                    <span class="text-sm text-gray-500">
                        {format!("{} 课时 · {}", chapter.lessons, chapter.duration)}
                    </span>
                </li>
            }
        })
        .collect_view();

    let features = course
        .features
        .iter()
        .map(|feature| view! { <li class="text-sm text-gray-700">{format!("✓ {feature}")}</li> })
        .collect_view();

    let tags = course
        .tags
        .iter()
        .map(|tag| view! { <span class="px-2 py-0.5 rounded bg-white/20 text-xs">{tag.clone()}</span> })
        .collect_view();

    view! {
        <section class="bg-gray-900 text-white">
            <div class="container mx-auto max-w-[1100px] px-4 py-12 grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2">
                    <a href=href(&Route::Courses) class="text-sm text-gray-400">"← 返回课程广场"</a>
                    <h1 class="text-3xl font-bold mt-4 mb-3">{course.title.clone()}</h1>
                    <p class="text-gray-300 mb-4">{course.description.clone()}</p>
                    <div class="flex flex-wrap gap-2 mb-4">{tags}</div>
                    <p class="text-sm text-gray-400">
                        {format!(
                            "★ {:.1} · {} 人在学 · {} · {} · {} 课时",
                            course.rating,
                            course.students,
                            course.level,
                            course.duration,
                            lesson_count,
                        )}
                    </p>
                </div>
                <div class="bg-white text-gray-900 rounded-lg shadow p-6">
                    <img src=course.image.clone() alt=course.title.clone() class="w-full h-40 object-cover rounded mb-4" />
                    <div class="mb-4">
                        <span class="text-3xl font-bold text-red-500">{course.price.clone()}</span>
                        {course
                            .original_price
                            .clone()
                            .map(|original| {
                                view! { <span class="ml-2 text-gray-400 line-through">{original}</span> }
                            })}
                    </div>
                    <div class="space-y-3">
                        <button
                            type="button"
                            class="w-full py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600"
                            on:click=buy
                        >
                            "立即购买"
                        </button>
                        <button
                            type="button"
                            class="w-full py-2 border border-blue-500 text-blue-500 rounded-lg disabled:opacity-60"
                            disabled=in_cart
                            on:click=add
                        >
                            {move || if in_cart.get() { "已在购物车" } else { "加入购物车" }}
                        </button>
                    </div>
                    {move || notice.get().map(|message| view! { <p class="mt-3 text-sm text-green-600">{message}</p> })}
                    <ul class="mt-6 space-y-1">{features}</ul>
                </div>
            </div>
        </section>
        <section class="container mx-auto max-w-[1100px] px-4 py-8 grid grid-cols-1 lg:grid-cols-3 gap-8">
            <div class="lg:col-span-2 bg-white rounded-lg shadow-sm p-6">
                <h2 class="text-xl font-bold mb-4">"课程大纲"</h2>
                <ul>{curriculum}</ul>
            </div>
            <div class="bg-white rounded-lg shadow-sm p-6">
                <h2 class="text-xl font-bold mb-4">"讲师"</h2>
                <div class="flex items-center">
                    <img
                        src=course.instructor.image.clone()
                        alt=course.instructor.name.clone()
                        class="w-14 h-14 rounded-full object-cover"
                    />
                    <div class="ml-4">
                        <p class="font-medium">{course.instructor.name.clone()}</p>
                        <p class="text-sm text-gray-500">{course.instructor.title.clone()}</p>
                    </div>
                </div>
            </div>
        </section>
    }
    .into_any()
}
