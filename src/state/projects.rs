#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::types::Project;

/// Home-screen project list state.
///
/// List mutations are optimistic: a created project is appended as soon as
/// the create call resolves, and a confirmed deletion removes the entry
/// immediately, regardless of server response latency.
#[derive(Clone, Debug, Default)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    pub loading: bool,
    pub create_pending: bool,
}

impl ProjectsState {
    /// Append a project, replacing any existing entry with the same id.
    pub fn insert(&mut self, project: Project) {
        if let Some(existing) = self.items.iter_mut().find(|p| p.id == project.id) {
            *existing = project;
        } else {
            self.items.push(project);
        }
    }

    /// Remove a project by id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|p| p.id != id);
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|p| p.id == id)
    }
}
