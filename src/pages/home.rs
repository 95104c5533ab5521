//! Home page listing the user's projects with create and delete actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::project_card::ProjectCard;
use crate::net::types::Project;
use crate::state::projects::ProjectsState;
use crate::state::session::SessionState;

/// Home page — project grid, create dialog, delete confirmation, logout.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let navigate = use_navigate();

    // Force one reload per browser session before anything else mounts.
    Effect::new(move || {
        if !crate::util::storage::home_reloaded() {
            crate::util::storage::mark_home_reloaded();
            crate::util::storage::reload();
        }
    });

    // Redirect to login if not authenticated.
    let nav_redirect = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            nav_redirect("/login", NavigateOptions::default());
        }
    });

    // Load the project list once the session user is present.
    let loaded = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    Effect::new(move || {
        if session.get().user.is_none() || loaded.get() {
            return;
        }
        loaded.set(true);

        #[cfg(feature = "hydrate")]
        {
            projects.update(|p| p.loading = true);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_projects().await {
                    Ok(items) => {
                        projects.update(|p| {
                            p.items = items;
                            p.loading = false;
                        });
                    }
                    Err(e) => {
                        leptos::logging::warn!("project list load failed: {e}");
                        load_error.set(Some(e.to_string()));
                        projects.update(|p| p.loading = false);
                    }
                }
            });
        }
    });

    // Create-project dialog state.
    let show_create = RwSignal::new(false);
    let new_project_name = RwSignal::new(String::new());
    let confirm_delete = RwSignal::new(None::<Project>);

    let on_create = move |_| {
        show_create.set(true);
        new_project_name.set(String::new());
    };
    let on_close_create = Callback::new(move |()| show_create.set(false));

    let nav_open = navigate.clone();
    let on_open = Callback::new(move |id: String| {
        nav_open(&format!("/project/{id}"), NavigateOptions::default());
    });

    let on_request_delete = Callback::new(move |project: Project| {
        confirm_delete.set(Some(project));
    });

    // Confirmed deletion: optimistic removal, fire-and-forget request.
    let on_confirm_delete = Callback::new(move |()| {
        let Some(target) = confirm_delete.get() else {
            return;
        };
        projects.update(|p| p.remove(&target.id));
        confirm_delete.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::delete_project(&target.id).await {
                leptos::logging::warn!("project delete failed: {e}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    });
    let on_cancel_delete = Callback::new(move |()| confirm_delete.set(None));

    let nav_logout = navigate.clone();
    let on_logout = move |_| {
        crate::util::storage::clear_session();
        session.update(SessionState::clear);
        nav_logout("/login", NavigateOptions::default());
    };

    let user_email = move || {
        session
            .get()
            .user
            .map(|u| u.email)
            .unwrap_or_default()
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Searchifi"</h1>
                <div class="home-page__session">
                    <span class="home-page__email">{user_email}</span>
                    <a class="btn" href="/playground">"Playground"</a>
                    <button class="btn" on:click=on_logout>
                        "Logout"
                    </button>
                    <button class="btn btn--primary" on:click=on_create>
                        "+ New Project"
                    </button>
                </div>
            </header>

            {move || {
                load_error
                    .get()
                    .map(|msg| view! { <p class="home-page__error">{msg}</p> })
            }}

            <div class="home-page__grid">
                {move || {
                    let state = projects.get();
                    if state.loading {
                        return view! { <p class="home-page__loading">"Loading projects..."</p> }
                            .into_any();
                    }
                    if state.items.is_empty() {
                        return view! {
                            <p class="home-page__empty">"No projects yet. Create one to get started."</p>
                        }
                            .into_any();
                    }

                    state
                        .items
                        .into_iter()
                        .map(|project| {
                            view! {
                                <ProjectCard
                                    project=project
                                    on_open=on_open
                                    on_delete=on_request_delete
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <Show when=move || show_create.get()>
                <CreateProjectDialog name=new_project_name on_close=on_close_create/>
            </Show>

            {move || {
                confirm_delete.get().map(|project| {
                    view! {
                        <ConfirmDeleteDialog
                            name=project.name.clone()
                            on_confirm=on_confirm_delete
                            on_cancel=on_cancel_delete
                        />
                    }
                })
            }}
        </div>
    }
}

/// Modal dialog for creating a new project.
///
/// The created project is appended to the displayed list as soon as the
/// create call resolves.
#[component]
fn CreateProjectDialog(name: RwSignal<String>, on_close: Callback<()>) -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |_| {
        let project_name = name.get();
        if project_name.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let project_name = project_name.trim().to_owned();
            projects.update(|p| p.create_pending = true);
            leptos::task::spawn_local(async move {
                match crate::net::api::create_project(&project_name).await {
                    Ok(project) => {
                        projects.update(|p| {
                            p.insert(project);
                            p.create_pending = false;
                        });
                        on_close.run(());
                    }
                    Err(e) => {
                        leptos::logging::warn!("project create failed: {e}");
                        projects.update(|p| p.create_pending = false);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = project_name;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create New Project"</h2>
                <label class="dialog__label">
                    "Project Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                {move || {
                    error.get().map(|msg| view! { <p class="dialog__error">{msg}</p> })
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || projects.get().create_pending
                        on:click=move |_| submit.run(())
                    >
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog shown before a project is deleted.
#[component]
fn ConfirmDeleteDialog(
    name: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Project"</h2>
                <p class="dialog__text">
                    "Are you sure you want to delete " <strong>{name}</strong> "?"
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
