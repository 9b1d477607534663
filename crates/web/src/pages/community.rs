use keepstudy::{
    community::{ChannelFeed, ChannelKind, Message},
    routes::Route,
};
use leptos::{ev::SubmitEvent, prelude::*};

use crate::routing::href;

#[component]
pub(crate) fn CommunityPage() -> impl IntoView {
    match ChannelFeed::demo() {
        Ok(feed) => view! { <Board feed=RwSignal::new(feed) /> }.into_any(),
        Err(error) => view! {
            <div class="mx-auto max-w-3xl mt-20 rounded-lg border border-red-200 bg-red-50 p-4">
                <p class="text-sm text-red-700">{error.to_string()}</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn Board(feed: RwSignal<ChannelFeed>) -> impl IntoView {
    let draft = RwSignal::new(String::new());

    let post = move |event: SubmitEvent| {
        event.prevent_default();

        let posted = feed
            .try_update(|feed| feed.post(&draft.get_untracked()).is_some())
            .unwrap_or(false);

        if posted {
            draft.set(String::new());
        }
    };

    let channels = move || {
        feed.with(|current| {
            let selected = current.selected().map(|channel| channel.id);

            current.channels()
                .iter()
                .map(|channel| {
                    let id = channel.id;
                    let prefix = match channel.kind {
                        ChannelKind::Text => "#",
                        ChannelKind::Voice => "🔊",
                    };
                    let class = if selected == Some(id) {
                        "w-full text-left px-3 py-1.5 rounded bg-gray-600 text-white"
                    } else {
                        "w-full text-left px-3 py-1.5 rounded text-gray-400 hover:bg-gray-700 hover:text-gray-200"
                    };

                    view! {
                        <button
                            type="button"
                            class=class
                            on:click=move |_| {
                                feed.update(|feed| {
                                    feed.select(id);
                                });
                            }
                        >
                            {format!("{prefix} {}", channel.name)}
                            {channel.unread.then(|| view! { <span class="ml-2 inline-block w-2 h-2 rounded-full bg-white"></span> })}
                        </button>
                    }
                })
                .collect_view()
        })
    };

    let members = move || {
        feed.with(|feed| {
            feed.members()
                .iter()
                .map(|member| {
                    view! {
                        <li class="flex items-center py-1.5">
                            <span class="relative">
                                <img src=member.avatar.clone() alt=member.name.clone() class="w-8 h-8 rounded-full" />
                                <span class=format!(
                                    "absolute bottom-0 right-0 w-2.5 h-2.5 rounded-full border-2 border-gray-800 {}",
                                    member.status.dot_class(),
                                )></span>
                            </span>
                            <span class="ml-2 text-sm text-gray-300">{member.name.clone()}</span>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="flex h-screen bg-gray-700 text-gray-100">
            <aside class="w-60 bg-gray-800 flex flex-col">
                <a href=href(&Route::Home) class="p-4 font-bold border-b border-gray-900">"KeepStudy 社区"</a>
                <nav class="p-2 space-y-1 overflow-y-auto">{channels}</nav>
            </aside>
            <main class="flex-1 flex flex-col">
                <header class="h-12 px-4 flex items-center border-b border-gray-800 font-medium">
                    {move || feed.with(|feed| feed.selected().map(|channel| format!("# {}", channel.name)))}
                </header>
                <div class="flex-1 overflow-y-auto p-4 space-y-4">
                    {move || {
                        feed.with(|feed| {
                            feed.messages()
                                .iter()
                                .cloned()
                                .map(|message| view! { <MessageRow message=message /> })
                                .collect_view()
                        })
                    }}
                </div>
                <form class="p-4" on:submit=post>
                    <input
                        type="text"
                        placeholder="发送消息"
                        class="w-full px-4 py-2 rounded-lg bg-gray-600 text-gray-100 placeholder-gray-400"
                        prop:value=move || draft.get()
                        on:input=move |event| draft.set(event_target_value(&event))
                    />
                </form>
            </main>
            <aside class="w-60 bg-gray-800 p-4">
                <h3 class="text-xs uppercase text-gray-400 mb-2">"成员"</h3>
                <ul>{members}</ul>
            </aside>
        </div>
    }
}

#[component]
fn MessageRow(message: Message) -> impl IntoView {
    let reactions = message
        .reactions
        .iter()
        .map(|reaction| {
            view! {
                <span class="px-2 py-0.5 rounded bg-gray-600 text-xs">
                    {format!("{} {}", reaction.emoji, reaction.count)}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="flex">
            <img src=message.avatar alt=message.author.clone() class="w-10 h-10 rounded-full" />
            <div class="ml-3">
                <div class="flex items-baseline space-x-2">
                    <span class="font-medium">{message.author}</span>
                    {message.bot.then(|| view! { <span class="px-1 rounded bg-blue-500 text-[10px]">"BOT"</span> })}
                    <span class="text-xs text-gray-400">{message.timestamp}</span>
                </div>
                <p class="text-gray-200">{message.content}</p>
                <div class="flex space-x-1 mt-1">{reactions}</div>
            </div>
        </div>
    }
}
