#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use std::collections::HashSet;

use crate::net::types::{Project, User};

/// Active-project state: which project the screen is on, its loaded detail,
/// the selectable collaborator list, and the pending selection set.
#[derive(Clone, Debug, Default)]
pub struct ProjectState {
    pub project_id: Option<String>,
    pub phase: ProjectPhase,
    pub project: Option<Project>,
    pub collaborators: Vec<User>,
    pub selected: HashSet<String>,
    pub connection_status: ConnectionStatus,
}

/// Lifecycle of the project screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectPhase {
    /// No project selected.
    #[default]
    Idle,
    /// Project id known, backend reads in flight.
    Loading,
    /// Project detail arrived; chat and collaborator actions are live.
    Ready,
}

/// Channel connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ProjectState {
    /// Enter `Loading` for a project id, dropping any previous screen state.
    pub fn begin(&mut self, project_id: String) {
        self.reset();
        self.project_id = Some(project_id);
        self.phase = ProjectPhase::Loading;
    }

    /// Install the loaded project detail and enter `Ready`.
    pub fn ready(&mut self, project: Project) {
        self.project = Some(project);
        self.phase = ProjectPhase::Ready;
    }

    /// Set-valued collaborator toggle: selecting a selected id removes it,
    /// otherwise adds it.
    pub fn toggle_selected(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_owned());
        }
    }

    /// Clear everything back to `Idle` (screen unmount).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
