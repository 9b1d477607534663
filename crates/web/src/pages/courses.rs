use keepstudy::{
    catalog::{ALL, Course, CourseFilter},
    routes::Route,
};
use leptos::prelude::*;

use crate::{routing::href, state::AppState};

/// Catalog card linking to the course page.
#[component]
pub(crate) fn CourseCard(course: Course) -> impl IntoView {
    let link = href(&Route::Course(course.id));

    view! {
        <a
            href=link
            class="block bg-white rounded-lg shadow-sm overflow-hidden hover:shadow-md transition-shadow"
        >
            <img src=course.image alt=course.title.clone() class="w-full h-44 object-cover" />
            <div class="p-4">
                <div class="flex items-center justify-between text-xs text-gray-500 mb-2">
                    <span class="px-2 py-0.5 rounded bg-blue-50 text-blue-600">{course.level}</span>
                    <span>{course.category}</span>
                </div>
                <h3 class="font-medium mb-1">{course.title}</h3>
                <p class="text-sm text-gray-600 line-clamp-2 mb-3">{course.description}</p>
                <div class="flex items-center justify-between">
                    <span class="text-sm text-yellow-600">
                        {format!("★ {:.1} · {} 人在学", course.rating, course.students)}
                    </span>
                    <span>
                        <span class="text-lg font-bold text-red-500">{course.price}</span>
                        {course
                            .original_price
                            .map(|original| {
                                view! {
                                    <span class="ml-2 text-sm text-gray-400 line-through">{original}</span>
                                }
                            })}
                    </span>
                </div>
            </div>
        </a>
    }
}

#[component]
pub(crate) fn CoursesPage(state: AppState) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(ALL.to_string());
    let level = RwSignal::new(ALL.to_string());

    let categories: Vec<String> = state
        .catalog
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect();
    let levels: Vec<String> = std::iter::once(ALL)
        .chain(state.catalog.levels())
        .map(str::to_string)
        .collect();

    let catalog = state.catalog;
    let matching = move || {
        let filter = CourseFilter::query(query.get())
            .with_category(category.get())
            .with_level(level.get());

        catalog
            .filter(&filter)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="container mx-auto max-w-[1100px] px-4 py-8">
            <h1 class="text-2xl font-bold mb-6">"课程广场"</h1>
            <div class="bg-white rounded-lg shadow-sm p-4 mb-6 space-y-4">
                <input
                    type="search"
                    placeholder="搜索课程、技术或标签"
                    class="w-full px-4 py-2 border rounded-lg"
                    prop:value=move || query.get()
                    on:input=move |event| query.set(event_target_value(&event))
                />
                <FilterPills label="分类" options=categories selected=category />
                <FilterPills label="难度" options=levels selected=level />
            </div>
            {move || {
                let courses = matching();

                if courses.is_empty() {
                    view! { <p class="text-center text-gray-500 py-12">"没有找到匹配的课程"</p> }
                        .into_any()
                } else {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {courses
                                .into_iter()
                                .map(|course| view! { <CourseCard course=course /> })
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
fn FilterPills(label: &'static str, options: Vec<String>, selected: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center gap-2">
            <span class="text-sm text-gray-500 mr-2">{label}</span>
            {options
                .into_iter()
                .map(|option| {
                    let value = option.clone();
                    let current = option.clone();

                    view! {
                        <button
                            type="button"
                            class=move || {
                                if selected.with(|selected| *selected == current) {
                                    "px-3 py-1 rounded-full text-sm bg-blue-500 text-white"
                                } else {
                                    "px-3 py-1 rounded-full text-sm bg-gray-100 text-gray-700 hover:bg-gray-200"
                                }
                            }
                            on:click=move |_| selected.set(value.clone())
                        >
                            {option}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
