//! Reusable card component for project list items on the home page.

use leptos::prelude::*;

use crate::net::types::Project;

/// A clickable card representing a project: name, collaborator count, and a
/// delete button that defers to the owning page for confirmation.
#[component]
pub fn ProjectCard(
    project: Project,
    on_open: Callback<String>,
    on_delete: Callback<Project>,
) -> impl IntoView {
    let open_id = project.id.clone();
    let delete_target = project.clone();
    let collaborators = project.users.len();

    view! {
        <div class="project-card" on:click=move |_| on_open.run(open_id.clone())>
            <button
                class="project-card__delete"
                title="Delete project"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_delete.run(delete_target.clone());
                }
            >
                "\u{d7}"
            </button>
            <span class="project-card__name">{project.name.clone()}</span>
            <span class="project-card__collaborators">
                {collaborators} " collaborators"
            </span>
        </div>
    }
}
