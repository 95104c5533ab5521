//! Modal for selecting users and granting them project membership.

use leptos::prelude::*;

use crate::state::project::ProjectState;

/// Collaborator selection modal.
///
/// Selection is a set-valued toggle: clicking a selected user removes it,
/// otherwise adds it. Committing issues one combined add request for the
/// whole set, with no per-user confirmation or partial-failure handling.
#[component]
pub fn CollaboratorModal(on_close: Callback<()>) -> impl IntoView {
    let project = expect_context::<RwSignal<ProjectState>>();

    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |_| {
        let state = project.get();
        let Some(project_id) = state.project_id else {
            return;
        };
        let users: Vec<String> = state.selected.iter().cloned().collect();

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::add_collaborators(&project_id, &users).await {
                    Ok(()) => {
                        project.update(|p| p.selected.clear());
                        on_close.run(());
                    }
                    Err(e) => {
                        leptos::logging::warn!("add collaborators failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (project_id, users);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog collaborator-modal" on:click=move |ev| ev.stop_propagation()>
                <header class="collaborator-modal__header">
                    <h2>"Select User"</h2>
                    <button class="collaborator-modal__close" title="Close" on:click=move |_| on_close.run(())>
                        "\u{d7}"
                    </button>
                </header>

                <div class="collaborator-modal__list">
                    {move || {
                        let state = project.get();
                        state
                            .collaborators
                            .iter()
                            .map(|user| {
                                let id = user.id.clone();
                                let selected = state.selected.contains(&id);
                                let email = user.email.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="collaborator-modal__user"
                                        class:collaborator-modal__user--selected=selected
                                        on:click=move |_| {
                                            project.update(|p| p.toggle_selected(&id));
                                        }
                                    >
                                        {email}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                {move || {
                    error
                        .get()
                        .map(|msg| view! { <p class="collaborator-modal__error">{msg}</p> })
                }}

                <button
                    class="btn btn--primary collaborator-modal__submit"
                    disabled=move || pending.get()
                    on:click=move |_| submit.run(())
                >
                    "Add Collaborators"
                </button>
            </div>
        </div>
    }
}
