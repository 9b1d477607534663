//! Assessment centre: the hub plus coding marathon, project review and mock
//! interview pages.

use std::sync::Arc;

use keepstudy::{
    assessments::{
        AssessmentCenter, AssessmentKind, InterviewSession, InterviewStage, Marathon, ProjectBrief,
        Seniority, Track, Verdict, format_clock,
    },
    routes::Route,
};
use leptos::{ev::MouseEvent, prelude::*};

use crate::{routing::href, state::AppState};

const STARTER_CODE: &str = "function twoSum(nums, target) {\n  // 在这里编写你的代码\n}\n";

#[component]
pub(crate) fn AssessmentsPage(state: AppState) -> impl IntoView {
    let cards = state
        .assessments
        .kinds()
        .iter()
        .map(|info| {
            let benefits = info
                .benefits
                .iter()
                .map(|benefit| view! { <li class="text-sm text-gray-600">{format!("✓ {benefit}")}</li> })
                .collect_view();

            view! {
                <div class="bg-white rounded-lg shadow-sm p-6 flex flex-col">
                    <h2 class="text-xl font-bold mb-2">{info.title.clone()}</h2>
                    <p class="text-gray-600 mb-4">{info.description.clone()}</p>
                    <p class="text-sm text-gray-500 mb-3">{format!("预计用时：{}", info.duration)}</p>
                    <ul class="space-y-1 mb-6 flex-1">{benefits}</ul>
                    <a href=href(&Route::Assessment(info.kind)) class="px-4 py-2 bg-blue-500 text-white rounded-lg text-center">
                        "开始测评"
                    </a>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="container mx-auto max-w-[1100px] px-4 pt-28 pb-12">
            <h1 class="text-3xl font-bold mb-2">"AI 测评中心"</h1>
            <p class="text-gray-600 mb-8">"选择一种测评方式，检验你的学习成果。"</p>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">{cards}</div>
        </section>
    }
}

#[component]
pub(crate) fn AssessmentPage(state: AppState, kind: AssessmentKind) -> impl IntoView {
    let center = state.assessments;
    let title = center
        .kind(kind)
        .map(|info| info.title.clone())
        .unwrap_or_default();

    let content = match kind {
        AssessmentKind::Oj => view! { <MarathonView marathon=center.marathon() /> }.into_any(),
        AssessmentKind::Project => {
            view! { <ProjectsView projects=center.projects().to_vec() /> }.into_any()
        }
        AssessmentKind::Interview => view! { <InterviewView center=center /> }.into_any(),
    };

    view! {
        <section class="container mx-auto max-w-[1100px] px-4 pt-28 pb-12">
            <a href=href(&Route::Assessments) class="text-blue-600 text-sm">"← 返回测评中心"</a>
            <h1 class="text-2xl font-bold mt-2 mb-6">{title}</h1>
            {content}
        </section>
    }
}

#[component]
fn MarathonView(marathon: Marathon) -> impl IntoView {
    let marathon = RwSignal::new(marathon);
    let code = RwSignal::new(STARTER_CODE.to_string());
    let verdict = RwSignal::new(None::<Verdict>);

    let problem = move || {
        marathon.with(|marathon| {
            marathon.current().cloned().map(|problem| {
                let examples = problem
                    .examples
                    .iter()
                    .map(|example| {
                        view! {
                            <pre class="bg-gray-50 rounded p-3 text-sm whitespace-pre-wrap">
                                {format!("输入：{}\n输出：{}", example.input, example.output)}
                                {example.explanation.clone().map(|explanation| format!("\n解释：{explanation}"))}
                            </pre>
                        }
                    })
                    .collect_view();
                let constraints = problem
                    .constraints
                    .iter()
                    .map(|constraint| view! { <li class="font-mono text-sm">{constraint.clone()}</li> })
                    .collect_view();

                view! {
                    <div class="space-y-3">
                        <div class="flex items-center space-x-2">
                            <h2 class="text-xl font-medium">{format!("{}. {}", problem.id, problem.title)}</h2>
                            <span class=format!("px-2 py-0.5 rounded text-xs {}", problem.difficulty_class())>
                                {problem.difficulty.clone()}
                            </span>
                            <span class="px-2 py-0.5 rounded text-xs bg-gray-100">{problem.category.clone()}</span>
                        </div>
                        <p class="text-gray-700">{problem.description.clone()}</p>
                        {examples}
                        <ul class="list-disc pl-5">{constraints}</ul>
                    </div>
                }
            })
        })
    };

    let progress = move || {
        marathon.with(|marathon| {
            format!(
                "已完成 {}/{} 题 · 剩余 {} 题 · 限时 {}",
                marathon.solved(),
                marathon.total(),
                marathon.remaining(),
                marathon.time_limit()
            )
        })
    };

    let verdict_view = move || {
        verdict.get().map(|verdict| {
            let (label, class) = if verdict.is_accepted() {
                ("通过", "text-green-600")
            } else {
                ("未通过", "text-red-600")
            };

            view! {
                <div class="bg-white rounded-lg shadow-sm p-4 space-y-1">
                    <p class=format!("font-medium {class}")>
                        {format!("{label} · {}/{} 测试用例", verdict.passed, verdict.total)}
                    </p>
                    <p class="text-sm text-gray-600">{format!("执行用时 {} · 内存消耗 {}", verdict.runtime, verdict.memory)}</p>
                    <p class="text-sm text-gray-700">{verdict.feedback}</p>
                </div>
            }
        })
    };

    view! {
        <div class="space-y-4">
            <div class="bg-white rounded-lg shadow-sm p-4">
                <p class="text-sm text-gray-600 mb-2">{progress}</p>
                <div class="h-2 bg-gray-200 rounded">
                    <div
                        class="h-2 bg-blue-500 rounded"
                        style=move || format!("width: {}%", marathon.with(Marathon::percent_complete))
                    ></div>
                </div>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="bg-white rounded-lg shadow-sm p-6">{problem}</div>
                <div class="flex flex-col space-y-3">
                    <textarea
                        class="min-h-[320px] p-4 font-mono text-sm bg-gray-900 text-green-200 rounded-lg"
                        prop:value=move || code.get()
                        on:input=move |event| code.set(event_target_value(&event))
                    ></textarea>
                    <div class="flex space-x-3">
                        <button
                            type="button"
                            class="px-4 py-2 bg-blue-500 text-white rounded-lg"
                            on:click=move |_| {
                                let judged = marathon.with_untracked(|marathon| marathon.submit(&code.get_untracked()));
                                verdict.set(judged);
                            }
                        >
                            "提交代码"
                        </button>
                        <button
                            type="button"
                            class="px-4 py-2 border rounded-lg"
                            on:click=move |_| {
                                marathon.update(Marathon::advance);
                                code.set(STARTER_CODE.to_string());
                                verdict.set(None);
                            }
                        >
                            "下一题"
                        </button>
                    </div>
                    {verdict_view}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectsView(projects: Vec<ProjectBrief>) -> impl IntoView {
    let selected = RwSignal::new(projects.first().map(|project| project.id));
    let details_source = projects.clone();

    let list = projects
        .into_iter()
        .map(|project| {
            let id = project.id;
            let class = move || {
                if selected.get() == Some(id) {
                    "w-full text-left p-4 rounded-lg border-2 border-blue-500 bg-blue-50"
                } else {
                    "w-full text-left p-4 rounded-lg border hover:border-blue-300"
                }
            };

            view! {
                <button type="button" class=class on:click=move |_| selected.set(Some(id))>
                    <p class="font-medium">{project.title}</p>
                    <p class="text-sm text-gray-500">
                        {format!("{} · {} · {}分", project.category, project.expected_time, project.points)}
                    </p>
                </button>
            }
        })
        .collect_view();

    let details = move || {
        let project = selected
            .get()
            .and_then(|id| details_source.iter().find(|project| project.id == id).cloned())?;

        let bullets = |entries: &[String]| {
            entries
                .iter()
                .map(|entry| view! { <li>{entry.clone()}</li> })
                .collect_view()
        };
        let skills = project
            .skills
            .iter()
            .map(|skill| view! { <span class="px-2 py-0.5 rounded bg-gray-100 text-xs">{skill.clone()}</span> })
            .collect_view();

        Some(view! {
            <div class="bg-white rounded-lg shadow-sm p-6 space-y-4">
                <h2 class="text-xl font-bold">{project.title.clone()}</h2>
                <p class="text-gray-700">{project.description.clone()}</p>
                <div class="flex flex-wrap gap-2">{skills}</div>
                <h3 class="font-medium">"项目要求"</h3>
                <ul class="list-disc pl-5 text-sm">{bullets(&project.requirements)}</ul>
                <h3 class="font-medium">"提交内容"</h3>
                <ul class="list-disc pl-5 text-sm">{bullets(&project.deliverables)}</ul>
                <h3 class="font-medium">"评分标准"</h3>
                <ul class="list-disc pl-5 text-sm">{bullets(&project.criteria)}</ul>
                <p class="text-sm text-gray-600">{format!("完成可获得：{}", project.certificate)}</p>
            </div>
        })
    };

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="space-y-3">{list}</div>
            <div class="lg:col-span-2">{details}</div>
        </div>
    }
}

#[component]
fn InterviewView(center: Arc<AssessmentCenter>) -> impl IntoView {
    let track = RwSignal::new(Track::Frontend);
    let level = RwSignal::new(Seniority::Junior);
    let interview = RwSignal::new(None::<InterviewSession>);
    let seconds = center.interview().seconds_per_topic();

    let start = {
        let center = Arc::clone(&center);

        move |_: MouseEvent| {
            let mut started = center.interview().session(track.get_untracked(), level.get_untracked());
            started.start();
            interview.set(Some(started));
        }
    };

    let certification = move || {
        center
            .interview()
            .certification(track.get(), level.get())
            .map(|certification| {
                format!(
                    "{} · {} · 有效期 {}",
                    certification.name, certification.organization, certification.valid_for
                )
            })
    };

    let choices = move || {
        let tracks = Track::ALL
            .into_iter()
            .map(|option| {
                view! {
                    <button
                        type="button"
                        class=move || choice_class(track.get() == option)
                        on:click=move |_| track.set(option)
                    >
                        {option.label()}
                    </button>
                }
            })
            .collect_view();
        let levels = Seniority::ALL
            .into_iter()
            .map(|option| {
                view! {
                    <button
                        type="button"
                        class=move || choice_class(level.get() == option)
                        on:click=move |_| level.set(option)
                    >
                        {option.label()}
                    </button>
                }
            })
            .collect_view();

        view! {
            <div class="space-y-2">
                <div class="flex space-x-2">{tracks}</div>
                <div class="flex space-x-2">{levels}</div>
            </div>
        }
    };

    let stage = move || {
        interview.with(|session| {
            let Some(session) = session else {
                return view! { <p class="text-gray-500">{format!("每个主题限时 {}", format_clock(seconds))}</p> }.into_any();
            };

            match session.stage() {
                InterviewStage::Prep => view! { <p class="text-gray-500">"准备开始"</p> }.into_any(),
                InterviewStage::Ongoing(topic) => view! {
                    <div class="space-y-3">
                        <p class="text-sm text-gray-500">
                            {format!("主题 {}/{} · 限时 {}", topic + 1, session.topics().len(), format_clock(seconds))}
                        </p>
                        <p class="text-lg font-medium">{session.current_topic().map(str::to_string)}</p>
                        <button
                            type="button"
                            class="px-4 py-2 bg-blue-500 text-white rounded-lg"
                            on:click=move |_| {
                                interview.update(|session| {
                                    if let Some(session) = session {
                                        session.next_topic();
                                    }
                                });
                            }
                        >
                            "下一个主题"
                        </button>
                    </div>
                }
                .into_any(),
                InterviewStage::Feedback => {
                    feedback_view(session, move || interview.set(None)).into_any()
                }
            }
        })
    };

    view! {
        <div class="bg-white rounded-lg shadow-sm p-6 space-y-6">
            {choices}
            <p class="text-sm text-gray-600">{certification}</p>
            <button type="button" class="px-4 py-2 bg-blue-500 text-white rounded-lg" on:click=start>
                "开始面试"
            </button>
            {stage}
        </div>
    }
}

fn feedback_view(
    session: &InterviewSession,
    reset: impl Fn() + 'static,
) -> Option<AnyView> {
    let feedback = session.feedback().cloned()?;

    let scores = session
        .topics()
        .iter()
        .zip(&feedback.topic_scores)
        .map(|(topic, score)| {
            view! {
                <li class="flex justify-between text-sm">
                    <span>{topic.clone()}</span>
                    <span class="font-medium">{score.score}</span>
                </li>
            }
        })
        .collect_view();
    let strengths = feedback
        .strengths
        .iter()
        .map(|strength| view! { <li>{strength.clone()}</li> })
        .collect_view();
    let improvements = feedback
        .improvements
        .iter()
        .map(|improvement| view! { <li>{improvement.clone()}</li> })
        .collect_view();

    Some(view! {
        <div class="space-y-4">
            <p class="text-2xl font-bold">{format!("综合得分 {}", feedback.overall_score())}</p>
            <ul class="space-y-1">{scores}</ul>
            <h3 class="font-medium">"优势"</h3>
            <ul class="list-disc pl-5 text-sm">{strengths}</ul>
            <h3 class="font-medium">"改进建议"</h3>
            <ul class="list-disc pl-5 text-sm">{improvements}</ul>
            <button type="button" class="px-4 py-2 border rounded-lg" on:click=move |_| reset()>
                "重新面试"
            </button>
        </div>
    }
    .into_any())
}

const fn choice_class(selected: bool) -> &'static str {
    if selected {
        "px-3 py-1.5 rounded-lg bg-blue-500 text-white"
    } else {
        "px-3 py-1.5 rounded-lg border"
    }
}
