use super::*;

fn project(id: &str) -> Project {
    Project {
        id: id.to_owned(),
        name: "Demo".to_owned(),
        users: vec!["u-1".to_owned()],
        file_tree: serde_json::Value::Null,
    }
}

// =============================================================
// Screen lifecycle
// =============================================================

#[test]
fn default_is_idle_and_disconnected() {
    let state = ProjectState::default();
    assert_eq!(state.phase, ProjectPhase::Idle);
    assert_eq!(state.connection_status, ConnectionStatus::Disconnected);
    assert!(state.project_id.is_none());
    assert!(state.selected.is_empty());
}

#[test]
fn begin_enters_loading_for_the_project() {
    let mut state = ProjectState::default();
    state.begin("p-1".to_owned());
    assert_eq!(state.phase, ProjectPhase::Loading);
    assert_eq!(state.project_id.as_deref(), Some("p-1"));
}

#[test]
fn begin_drops_previous_screen_state() {
    let mut state = ProjectState::default();
    state.begin("p-1".to_owned());
    state.ready(project("p-1"));
    state.toggle_selected("u-1");

    state.begin("p-2".to_owned());
    assert_eq!(state.project_id.as_deref(), Some("p-2"));
    assert_eq!(state.phase, ProjectPhase::Loading);
    assert!(state.project.is_none());
    assert!(state.selected.is_empty());
}

#[test]
fn ready_installs_detail_and_enters_ready() {
    let mut state = ProjectState::default();
    state.begin("p-1".to_owned());
    state.ready(project("p-1"));
    assert_eq!(state.phase, ProjectPhase::Ready);
    assert_eq!(state.project.as_ref().map(|p| p.name.as_str()), Some("Demo"));
}

#[test]
fn reset_returns_to_idle() {
    let mut state = ProjectState::default();
    state.begin("p-1".to_owned());
    state.ready(project("p-1"));
    state.reset();
    assert_eq!(state.phase, ProjectPhase::Idle);
    assert!(state.project_id.is_none());
    assert!(state.project.is_none());
}

// =============================================================
// Collaborator selection toggle
// =============================================================

#[test]
fn toggle_adds_then_removes() {
    let mut state = ProjectState::default();
    state.toggle_selected("u-1");
    assert!(state.selected.contains("u-1"));
    state.toggle_selected("u-1");
    assert!(!state.selected.contains("u-1"));
}

#[test]
fn toggle_twice_restores_original_set() {
    let mut state = ProjectState::default();
    state.toggle_selected("u-1");
    state.toggle_selected("u-2");
    let before = state.selected.clone();

    state.toggle_selected("u-3");
    state.toggle_selected("u-3");
    assert_eq!(state.selected, before);
}

#[test]
fn toggle_is_independent_per_id() {
    let mut state = ProjectState::default();
    state.toggle_selected("u-1");
    state.toggle_selected("u-2");
    state.toggle_selected("u-1");
    assert!(!state.selected.contains("u-1"));
    assert!(state.selected.contains("u-2"));
}
