use keepstudy::routes::Route;
use leptos::prelude::*;

use super::courses::CourseCard;
use crate::{routing::href, state::AppState};

const FEATURED_COURSES: usize = 3;

#[component]
pub(crate) fn HomePage(state: AppState) -> impl IntoView {
    let featured = state
        .catalog
        .featured(FEATURED_COURSES)
        .into_iter()
        .cloned()
        .map(|course| view! { <CourseCard course=course /> })
        .collect_view();

    let course_count = state.catalog.len();

    view! {
        <section class="bg-gradient-to-r from-blue-600 to-indigo-600 text-white">
            <div class="container mx-auto max-w-[1100px] px-4 py-20">
                <h1 class="text-4xl font-bold mb-4">"用项目驱动你的编程成长"</h1>
                <p class="text-lg text-blue-100 mb-8">
                    "精选实战课程、AI 学习助手与活跃的开发者社区，陪你从入门走到进阶。"
                </p>
                <div class="flex space-x-4">
                    <a href=href(&Route::Courses) class="px-6 py-3 bg-white text-blue-600 rounded-lg font-medium">
                        "浏览课程"
                    </a>
                    <a href=href(&Route::Community) class="px-6 py-3 border border-white rounded-lg">
                        "加入社区"
                    </a>
                </div>
            </div>
        </section>
        <section class="container mx-auto max-w-[1100px] px-4 py-12">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold">"热门课程"</h2>
                <a href=href(&Route::Courses) class="text-blue-600">
                    {format!("查看全部 {course_count} 门课程")}
                </a>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">{featured}</div>
        </section>
    }
}
