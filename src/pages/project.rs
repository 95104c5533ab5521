//! Project page — the collaborative chat workspace.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::ChannelSender;
use crate::components::chat_panel::ChatPanel;
use crate::components::collaborator_modal::CollaboratorModal;
use crate::state::chat::ChatState;
use crate::state::project::{ConnectionStatus, ProjectPhase, ProjectState};
use crate::state::session::SessionState;

/// Project page — sidebar, chat panel, and the collaborator modal.
///
/// Reads the project id from the route parameter. On mount it resets the
/// per-project state, spawns the realtime channel, and issues the project
/// detail and collaborator list reads in parallel; neither read blocks the
/// other. On unmount the message handler is deregistered and the state is
/// cleared.
#[component]
pub fn ProjectPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let project = expect_context::<RwSignal<ProjectState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let sender = expect_context::<RwSignal<ChannelSender>>();
    let params = use_params_map();

    let show_modal = RwSignal::new(false);
    let close_modal = Callback::new(move |()| show_modal.set(false));
    let load_error = RwSignal::new(None::<String>);

    // Extract project id from the route.
    let route_project_id = move || params.read().get("id");

    // Mount wiring, re-run when the route param changes.
    Effect::new(move || {
        let Some(id) = route_project_id() else {
            project.update(ProjectState::reset);
            return;
        };
        if project.with_untracked(|p| p.project_id.as_deref() == Some(id.as_str())) {
            return;
        }

        chat.set(ChatState::default());
        load_error.set(None);
        project.update(|p| p.begin(id.clone()));

        #[cfg(feature = "hydrate")]
        {
            let tx = crate::net::channel::spawn_channel(id.clone(), project, chat);
            sender.set(ChannelSender::new(tx));

            let detail_id = id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_project(&detail_id).await {
                    Ok(detail) => {
                        project.update(|p| {
                            // A stale response for a previous screen is dropped.
                            if p.project_id.as_deref() == Some(detail_id.as_str()) {
                                p.ready(detail);
                            }
                        });
                    }
                    Err(e) => {
                        leptos::logging::warn!("project load failed: {e}");
                        load_error.set(Some(e.to_string()));
                    }
                }
            });

            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_users().await {
                    Ok(users) => project.update(|p| p.collaborators = users),
                    Err(e) => leptos::logging::warn!("collaborator list load failed: {e}"),
                }
            });
        }
    });

    // Best-effort session cache of the displayed message sequence.
    Effect::new(move || {
        let entries = chat.get().entries;
        crate::util::storage::cache_recent_messages(&entries);
    });

    // Deregister the message handler and clear per-project state.
    on_cleanup(move || {
        project.update(ProjectState::reset);
        chat.set(ChatState::default());
        sender.set(ChannelSender::default());
    });

    // Redirect to login if not authenticated.
    let navigate = use_navigate();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let user_email = move || {
        session
            .get()
            .user
            .map(|u| u.email)
            .unwrap_or_default()
    };

    let project_title = move || {
        let state = project.get();
        match state.phase {
            ProjectPhase::Idle | ProjectPhase::Loading => "Loading project...".to_owned(),
            ProjectPhase::Ready => state
                .project
                .map(|p| p.name)
                .unwrap_or_default(),
        }
    };

    let connection_label = move || match project.get().connection_status {
        ConnectionStatus::Connected => "live",
        ConnectionStatus::Connecting => "connecting",
        ConnectionStatus::Disconnected => "offline",
    };

    view! {
        <div class="project-page">
            <aside class="project-page__sidebar">
                <h1 class="project-page__brand">"Searchifi AI"</h1>

                <div class="project-page__user-card">
                    <span class="project-page__user-email">{user_email}</span>
                    <span class="project-page__user-note">"Logged in"</span>
                </div>

                <button
                    class="btn btn--primary project-page__add-collaborator"
                    on:click=move |_| show_modal.set(true)
                >
                    "+ Add Collaborator"
                </button>

                <div class="project-page__recent">
                    <h2 class="project-page__recent-title">"Recent Chats"</h2>
                    {move || {
                        let user_id = session
                            .get()
                            .user
                            .map(|u| u.id)
                            .unwrap_or_default();
                        let state = chat.get();
                        let recent = state
                            .recent_own(&user_id, 5)
                            .into_iter()
                            .map(|entry| {
                                let body = entry.body.clone();
                                let title = body.clone();
                                view! {
                                    <div class="project-page__recent-item" title=title>
                                        {body}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>();
                        if recent.is_empty() {
                            view! {
                                <p class="project-page__recent-empty">"No recent user chats"</p>
                            }
                                .into_any()
                        } else {
                            recent.into_any()
                        }
                    }}
                </div>

                <footer class="project-page__footer">
                    <span class="project-page__title">{project_title}</span>
                    <span class="project-page__connection">{connection_label}</span>
                </footer>
            </aside>

            <section class="project-page__chat">
                {move || {
                    load_error
                        .get()
                        .map(|msg| view! { <p class="project-page__error">{msg}</p> })
                }}
                <ChatPanel/>
            </section>

            <Show when=move || show_modal.get()>
                <CollaboratorModal on_close=close_modal/>
            </Show>
        </div>
    }
}
