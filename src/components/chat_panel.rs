//! Real-time project chat panel displaying and sending messages.

use leptos::prelude::*;

use crate::app::ChannelSender;
use crate::net::types::{ChannelEvent, ProjectMessage, Sender, ai_message_text};
use crate::state::chat::{ChatState, prepare_draft};
use crate::state::session::{SessionState, first_name};

/// Chat panel showing the message sequence and an input for sending.
///
/// A send publishes to the channel and immediately appends an optimistic
/// local copy; inbound events are appended by the channel client. The
/// displayed sequence is append-only for the lifetime of the screen.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let channel = expect_context::<RwSignal<ChannelSender>>();

    let draft = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.get().entries.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some(text) = prepare_draft(&draft.get()) else {
            return;
        };
        let Some(user) = session.get_untracked().user else {
            return;
        };

        let message = ProjectMessage { sender: Sender::from(&user), message: text };
        if !channel.get_untracked().send(&ChannelEvent::message(&message)) {
            leptos::logging::warn!("message publish dropped: no active channel");
        }
        chat.update(|c| c.push_local(message.sender, message.message));
        draft.set(String::new());
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
            ev.prevent_default();
            do_send();
        }
    };

    let hero_name = move || {
        session
            .get()
            .user
            .map(|u| first_name(&u.email).to_owned())
            .unwrap_or_else(|| "User".to_owned())
    };

    let can_send = move || !draft.get().trim().is_empty();

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let entries = chat.get().entries;
                    if entries.is_empty() {
                        return view! {
                            <div class="chat-panel__hero">
                                <h1 class="chat-panel__greeting">"Hello, " {hero_name} "."</h1>
                                <p class="chat-panel__prompt">"How can I help you today?"</p>
                                <p class="chat-panel__tip">
                                    "Tip: press " <kbd>"Ctrl/\u{2318} + Enter"</kbd> " to send."
                                </p>
                                <p class="chat-panel__tip">
                                    "Tip: write " <kbd>"@ai"</kbd> " to interact with the AI."
                                </p>
                            </div>
                        }
                            .into_any();
                    }

                    let own_id = session
                        .get()
                        .user
                        .map(|u| u.id)
                        .unwrap_or_default();

                    entries
                        .iter()
                        .map(|entry| {
                            let mine = entry.sender.id == own_id;
                            let is_ai = entry.is_ai();
                            let email = entry.sender.email.clone();
                            let body = if is_ai {
                                ai_message_text(&entry.body)
                                    .unwrap_or_else(|| entry.body.clone())
                            } else {
                                entry.body.clone()
                            };
                            view! {
                                <div
                                    class="chat-panel__message"
                                    class:chat-panel__message--mine=mine
                                    class:chat-panel__message--ai=is_ai
                                >
                                    <small class="chat-panel__author">{email}</small>
                                    <p class="chat-panel__text">{body}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Enter a prompt here..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
