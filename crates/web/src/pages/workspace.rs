//! Learning workspace: overview, course study, practice and learning plan
//! views.

use keepstudy::{
    assessments::{LearningPlan, PlanCourse},
    assistant::{CannedResponder, ChatRole, Conversation, Responder},
    catalog::Course,
    routes::{Route, WorkspaceRoute},
};
use leptos::{ev::SubmitEvent, prelude::*, task};

use crate::{
    routing::{href, navigate},
    state::AppState,
    timers::{ASSISTANT_DELAY_MS, TimerResponder},
};

const STARTER_CODE: &str = "function solve(input) {\n  // 在这里编写你的代码\n}\n";

#[component]
pub(crate) fn WorkspacePage(state: AppState, workspace: WorkspaceRoute) -> impl IntoView {
    let content = match workspace {
        WorkspaceRoute::Default => view! { <Overview state=state.clone() /> }.into_any(),
        WorkspaceRoute::Course(id) => view! { <CourseStudy state=state.clone() id=id /> }.into_any(),
        WorkspaceRoute::Practice {
            course,
            open_assistant,
        } => view! { <Practice state=state.clone() id=course open_assistant=open_assistant /> }.into_any(),
        WorkspaceRoute::Plan(id) => view! { <Plan state=state.clone() id=id /> }.into_any(),
    };

    view! {
        <div class="flex h-screen bg-gray-50">
            <Sidebar state=state current=workspace />
            <main class="flex-1 overflow-y-auto">{content}</main>
        </div>
    }
}

#[component]
fn Sidebar(state: AppState, current: WorkspaceRoute) -> impl IntoView {
    let entries = [
        ("工作台", WorkspaceRoute::Default),
        ("课程学习", WorkspaceRoute::Course(1)),
        (
            "AI 练习",
            WorkspaceRoute::Practice {
                course: 1,
                open_assistant: true,
            },
        ),
    ]
    .into_iter()
    .map(|(label, target)| {
        let active = std::mem::discriminant(&target) == std::mem::discriminant(&current);
        let class = if active {
            "block px-4 py-2 rounded-lg bg-blue-500 text-white"
        } else {
            "block px-4 py-2 rounded-lg text-gray-700 hover:bg-gray-100"
        };

        view! { <a href=href(&Route::Workspace(target)) class=class>{label}</a> }
    })
    .collect_view();

    let plans = state
        .assessments
        .plans()
        .iter()
        .map(|plan| {
            let target = WorkspaceRoute::Plan(plan.id);
            let class = if target == current {
                "block px-4 py-2 rounded-lg bg-blue-50 text-blue-600"
            } else {
                "block px-4 py-2 rounded-lg text-gray-700 hover:bg-gray-100"
            };

            view! {
                <a href=href(&Route::Workspace(target)) class=class>
                    <span class="block text-sm">{plan.title.clone()}</span>
                    <span class="block h-1 mt-1 bg-gray-200 rounded">
                        <span class="block h-1 bg-blue-500 rounded" style=format!("width: {}%", plan.progress)></span>
                    </span>
                </a>
            }
        })
        .collect_view();

    view! {
        <aside class="w-56 bg-white border-r flex flex-col">
            <a href=href(&Route::Home) class="p-4 text-xl font-bold text-blue-600 italic font-serif">
                "KeepStudy"
            </a>
            <nav class="flex-1 p-3 space-y-1">
                {entries}
                <p class="px-4 pt-4 pb-1 text-xs text-gray-400">"学习计划"</p>
                {plans}
            </nav>
            <button
                type="button"
                class="m-3 py-2 text-sm text-gray-500 hover:text-red-500"
                on:click=move |_| {
                    state.sign_out();
                    navigate(&Route::Home);
                }
            >
                "退出登录"
            </button>
        </aside>
    }
}

#[component]
fn Overview(state: AppState) -> impl IntoView {
    let courses = state
        .catalog
        .courses()
        .iter()
        .take(2)
        .map(|course| {
            let id = course.id;

            view! {
                <div class="bg-white rounded-lg shadow-sm p-4 flex items-center">
                    <img src=course.image.clone() alt=course.title.clone() class="w-24 h-16 object-cover rounded" />
                    <div class="ml-4 flex-1">
                        <p class="font-medium">{course.title.clone()}</p>
                        <p class="text-sm text-gray-500">{format!("{} 课时", course.lesson_count())}</p>
                    </div>
                    <a href=href(&Route::Workspace(WorkspaceRoute::Course(id))) class="px-3 py-1.5 text-sm bg-blue-500 text-white rounded-lg">
                        "继续学习"
                    </a>
                </div>
            }
        })
        .collect_view();

    let user = state.user;
    let greeting = move || {
        user.with(|user| {
            let name = user
                .as_ref()
                .and_then(|user| user.username.clone())
                .unwrap_or_else(|| "同学".to_string());

            format!("欢迎回来，{name}")
        })
    };

    view! {
        <div class="p-8 grid grid-cols-1 xl:grid-cols-3 gap-6">
            <div class="xl:col-span-2 space-y-6">
                <h1 class="text-2xl font-bold">{greeting}</h1>
                <div class="space-y-3">{courses}</div>
            </div>
            <AssistantPanel responder=CannedResponder::general() />
        </div>
    }
}

#[component]
fn CourseStudy(state: AppState, id: u32) -> impl IntoView {
    let Some(course) = state.catalog.get(id).cloned() else {
        return missing_course();
    };

    let practice = Route::Workspace(WorkspaceRoute::Practice {
        course: id,
        open_assistant: true,
    });

    let chapters = course
        .curriculum
        .iter()
        .map(|chapter| {
            view! {
                <li class="flex justify-between px-4 py-3 border-b border-gray-100 last:border-b-0">
                    <span>{chapter.title.clone()}</span>
                    <span class="text-sm text-gray-500">{chapter.duration.clone()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="p-8 grid grid-cols-1 xl:grid-cols-3 gap-6">
            <div class="xl:col-span-2 space-y-6">
                <CourseHeader course=course />
                <ul class="bg-white rounded-lg shadow-sm">{chapters}</ul>
                <a href=href(&practice) class="inline-block px-4 py-2 bg-blue-500 text-white rounded-lg">
                    "开始 AI 练习"
                </a>
            </div>
            <AssistantPanel responder=CannedResponder::course() />
        </div>
    }
    .into_any()
}

#[component]
fn Practice(state: AppState, id: u32, open_assistant: bool) -> impl IntoView {
    let Some(course) = state.catalog.get(id).cloned() else {
        return missing_course();
    };

    let show_assistant = RwSignal::new(open_assistant);
    let code = RwSignal::new(STARTER_CODE.to_string());

    view! {
        <div class="p-8 flex gap-6 h-full">
            <div class="flex-1 flex flex-col space-y-4">
                <CourseHeader course=course />
                <textarea
                    class="flex-1 min-h-[320px] p-4 font-mono text-sm bg-gray-900 text-green-200 rounded-lg"
                    prop:value=move || code.get()
                    on:input=move |event| code.set(event_target_value(&event))
                ></textarea>
                <div class="flex space-x-3">
                    <a href=href(&Route::Workspace(WorkspaceRoute::Course(id))) class="px-4 py-2 border rounded-lg">
                        "返回课程"
                    </a>
                    <button
                        type="button"
                        class="px-4 py-2 bg-blue-500 text-white rounded-lg"
                        on:click=move |_| show_assistant.update(|shown| *shown = !*shown)
                    >
                        {move || if show_assistant.get() { "收起 AI 助手" } else { "打开 AI 助手" }}
                    </button>
                </div>
            </div>
            <Show when=move || show_assistant.get()>
                <div class="w-96">
                    <AssistantPanel responder=CannedResponder::course() />
                </div>
            </Show>
        </div>
    }
    .into_any()
}

#[component]
fn Plan(state: AppState, id: u32) -> impl IntoView {
    let Some(plan) = state.assessments.plan(id).cloned() else {
        return view! {
            <div class="p-8 text-center">
                <h2 class="text-xl font-medium mb-4">"学习计划不存在"</h2>
                <a href=href(&Route::Workspace(WorkspaceRoute::Default)) class="text-blue-600">"返回工作台"</a>
            </div>
        }
        .into_any();
    };

    let expanded = RwSignal::new(None::<u32>);
    let summary = plan_summary(&plan);

    let courses = plan
        .courses
        .into_iter()
        .map(|course| view! { <PlanCourseRow course=course expanded=expanded /> })
        .collect_view();

    let milestones = plan
        .milestones
        .into_iter()
        .map(|milestone| {
            let (marker, class) = if milestone.completed {
                ("✓", "text-green-600")
            } else {
                ("○", "text-gray-400")
            };

            view! {
                <li class="flex justify-between py-2">
                    <span>
                        <span class=class>{marker}</span>
                        " "
                        {milestone.title}
                    </span>
                    <span class="text-sm text-gray-500">{milestone.deadline.to_string()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="p-8 space-y-6">
            <div class="bg-white rounded-lg shadow-sm p-6">
                <h1 class="text-2xl font-bold">{plan.title}</h1>
                <p class="text-gray-600 mt-1">{plan.description}</p>
                <p class="text-sm text-gray-500 mt-3">{summary}</p>
                <div class="h-2 mt-2 bg-gray-200 rounded">
                    <div class="h-2 bg-blue-500 rounded" style=format!("width: {}%", plan.progress)></div>
                </div>
            </div>
            <div class="grid grid-cols-1 xl:grid-cols-3 gap-6">
                <ul class="xl:col-span-2 bg-white rounded-lg shadow-sm divide-y">{courses}</ul>
                <section class="bg-white rounded-lg shadow-sm p-4">
                    <h2 class="font-medium mb-2">"里程碑"</h2>
                    <ul class="divide-y">{milestones}</ul>
                </section>
            </div>
        </div>
    }
    .into_any()
}

/// Progress line under a plan's title.
fn plan_summary(plan: &LearningPlan) -> String {
    format!(
        "{} 至 {} · 已完成 {}/{} 门课程 · 总进度 {}%",
        plan.start_date,
        plan.estimated_end_date,
        plan.completed_courses(),
        plan.courses.len(),
        plan.progress
    )
}

#[component]
fn PlanCourseRow(course: PlanCourse, expanded: RwSignal<Option<u32>>) -> impl IntoView {
    let id = course.id;
    let study = Route::Workspace(WorkspaceRoute::Course(id));
    let hint = course.hint();
    let action = course.action_label();

    view! {
        <li class="p-4">
            <button
                type="button"
                class="w-full flex justify-between items-center text-left"
                on:click=move |_| expanded.update(|open| *open = if *open == Some(id) { None } else { Some(id) })
            >
                <span>{course.title}</span>
                <span class="text-sm text-gray-500">{format!("{}%", course.progress)}</span>
            </button>
            <Show when=move || expanded.get() == Some(id)>
                <div class="mt-3 flex justify-between items-center">
                    <p class="text-sm text-gray-600">{hint}</p>
                    <a href=href(&study) class="px-3 py-1.5 text-sm bg-blue-500 text-white rounded-lg">
                        {action}
                    </a>
                </div>
            </Show>
        </li>
    }
}

#[component]
fn CourseHeader(course: Course) -> impl IntoView {
    view! {
        <div>
            <h1 class="text-2xl font-bold">{course.title}</h1>
            <p class="text-gray-600">{format!("{} · {}", course.instructor.name, course.duration)}</p>
        </div>
    }
}

fn missing_course() -> AnyView {
    view! {
        <div class="p-8 text-center">
            <h2 class="text-xl font-medium mb-4">"课程不存在"</h2>
            <a href=href(&Route::Workspace(WorkspaceRoute::Default)) class="text-blue-600">"返回工作台"</a>
        </div>
    }
    .into_any()
}

#[component]
fn AssistantPanel(responder: CannedResponder) -> impl IntoView {
    let conversation = RwSignal::new(Conversation::new());
    let thinking = RwSignal::new(false);
    let draft = RwSignal::new(String::new());

    let send = move |event: SubmitEvent| {
        event.prevent_default();

        if thinking.get_untracked() {
            return;
        }

        let prompt = draft.get_untracked();
        let asked = conversation
            .try_update(|conversation| conversation.ask(&prompt))
            .unwrap_or(false);

        if !asked {
            return;
        }

        draft.set(String::new());
        thinking.set(true);

        let responder = TimerResponder::new(responder.clone(), ASSISTANT_DELAY_MS);

        task::spawn_local(async move {
            let reply = responder
                .reply(&prompt)
                .await
                .unwrap_or_else(|error| error.to_string());

            conversation.update(|conversation| conversation.receive(reply));
            thinking.set(false);
        });
    };

    let transcript = move || {
        conversation.with(|conversation| {
            conversation
                .messages()
                .iter()
                .map(|message| {
                    let class = match message.role {
                        ChatRole::User => "ml-auto bg-blue-500 text-white",
                        ChatRole::Bot => "mr-auto bg-gray-100 text-gray-800",
                    };

                    view! {
                        <p class=format!("max-w-[85%] px-3 py-2 rounded-lg text-sm {class}")>
                            {message.content.clone()}
                        </p>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="bg-white rounded-lg shadow-sm flex flex-col h-[480px]">
            <h2 class="p-4 border-b font-medium">"AI 学习助手"</h2>
            <div class="flex-1 overflow-y-auto p-4 flex flex-col space-y-3">
                {move || {
                    conversation
                        .with(Conversation::is_empty)
                        .then(|| view! { <p class="text-sm text-gray-400">"有任何问题都可以问我。"</p> })
                }}
                {transcript}
                {move || thinking.get().then(|| view! { <p class="text-sm text-gray-400">"AI 正在思考..."</p> })}
            </div>
            <form class="p-3 border-t flex space-x-2" on:submit=send>
                <input
                    type="text"
                    placeholder="输入你的问题"
                    class="flex-1 px-3 py-2 border rounded-lg"
                    prop:value=move || draft.get()
                    on:input=move |event| draft.set(event_target_value(&event))
                />
                <button
                    type="submit"
                    class="px-4 py-2 bg-blue-500 text-white rounded-lg disabled:opacity-60"
                    disabled=move || thinking.get()
                >
                    "发送"
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use keepstudy::assessments::AssessmentCenter;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn plan_summary_counts_finished_courses() -> TestResult {
        let center = AssessmentCenter::demo()?;
        let plan = center.plan(2).ok_or("plan 2 should exist")?;

        assert_eq!(
            plan_summary(plan),
            "2023-07-10 至 2023-11-30 · 已完成 5/8 门课程 · 总进度 68%"
        );

        Ok(())
    }
}
