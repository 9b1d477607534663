//! Sign-in and registration. Credentials aren't checked; any non-blank
//! username signs in.

use keepstudy::routes::Route;
use leptos::{ev::SubmitEvent, prelude::*};

use crate::{
    routing::{href, navigate},
    state::AppState,
};

/// Why a registration form can't be submitted.
fn registration_problem(username: &str, password: &str, confirm: &str) -> Option<&'static str> {
    if username.trim().is_empty() {
        Some("请输入用户名")
    } else if password.is_empty() {
        Some("请输入密码")
    } else if password != confirm {
        Some("两次输入的密码不一致")
    } else {
        None
    }
}

#[component]
pub(crate) fn LoginPage(state: AppState) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let problem = RwSignal::new(None::<String>);

    let submit = move |event: SubmitEvent| {
        event.prevent_default();

        let name = username.get_untracked();

        if name.trim().is_empty() {
            problem.set(Some("请输入用户名".to_string()));
            return;
        }

        match state.sign_in(name.trim(), remember.get_untracked()) {
            Ok(()) => navigate(&Route::Home),
            Err(error) => problem.set(Some(error)),
        }
    };

    view! {
        <AuthCard title="登录 KeepStudy">
            <form class="space-y-4" on:submit=submit>
                <TextField label="用户名" kind="text" value=username />
                <TextField label="密码" kind="password" value=password />
                <label class="flex items-center text-sm text-gray-600">
                    <input
                        type="checkbox"
                        class="mr-2"
                        prop:checked=move || remember.get()
                        on:change=move |event| remember.set(event_target_checked(&event))
                    />
                    "记住我"
                </label>
                {move || problem.get().map(|message| view! { <p class="text-sm text-red-600">{message}</p> })}
                <button type="submit" class="w-full py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600">
                    "登录"
                </button>
            </form>
            <p class="mt-6 text-center text-sm text-gray-600">
                "还没有账号？"
                <a href=href(&Route::Register) class="text-blue-600">"立即注册"</a>
            </p>
        </AuthCard>
    }
}

#[component]
pub(crate) fn RegisterPage(state: AppState) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let problem = RwSignal::new(None::<String>);

    let submit = move |event: SubmitEvent| {
        event.prevent_default();

        let name = username.get_untracked();
        let issue = password.with_untracked(|password| {
            confirm.with_untracked(|confirm| registration_problem(&name, password, confirm))
        });

        if let Some(issue) = issue {
            problem.set(Some(issue.to_string()));
            return;
        }

        match state.sign_in(name.trim(), false) {
            Ok(()) => navigate(&Route::Home),
            Err(error) => problem.set(Some(error)),
        }
    };

    view! {
        <AuthCard title="注册 KeepStudy">
            <form class="space-y-4" on:submit=submit>
                <TextField label="用户名" kind="text" value=username />
                <TextField label="邮箱" kind="email" value=email />
                <TextField label="密码" kind="password" value=password />
                <TextField label="确认密码" kind="password" value=confirm />
                {move || problem.get().map(|message| view! { <p class="text-sm text-red-600">{message}</p> })}
                <button type="submit" class="w-full py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600">
                    "注册"
                </button>
            </form>
            <p class="mt-6 text-center text-sm text-gray-600">
                "已有账号？"
                <a href=href(&Route::Login) class="text-blue-600">"去登录"</a>
            </p>
        </AuthCard>
    }
}

#[component]
fn AuthCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 to-indigo-100">
            <div class="w-full max-w-md bg-white rounded-xl shadow-lg p-8">
                <a href=href(&Route::Home) class="block text-center text-2xl font-bold text-blue-600 italic font-serif mb-2">
                    "KeepStudy"
                </a>
                <h1 class="text-center text-lg text-gray-700 mb-6">{title}</h1>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn TextField(label: &'static str, kind: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-gray-600 mb-1">{label}</span>
            <input
                type=kind
                class="w-full px-4 py-2 border rounded-lg"
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
            />
        </label>
    }
}
