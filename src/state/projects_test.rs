use super::*;

fn project(id: &str, name: &str) -> Project {
    Project {
        id: id.to_owned(),
        name: name.to_owned(),
        users: Vec::new(),
        file_tree: serde_json::Value::Null,
    }
}

#[test]
fn projects_state_defaults() {
    let state = ProjectsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(!state.create_pending);
}

// =============================================================
// Optimistic list mutations
// =============================================================

#[test]
fn create_on_empty_list_yields_single_entry() {
    let mut state = ProjectsState::default();
    state.insert(project("p-1", "Demo"));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].name, "Demo");
}

#[test]
fn insert_replaces_existing_entry_with_same_id() {
    let mut state = ProjectsState::default();
    state.insert(project("p-1", "Demo"));
    state.insert(project("p-1", "Renamed"));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].name, "Renamed");
}

#[test]
fn insert_appends_in_arrival_order() {
    let mut state = ProjectsState::default();
    state.insert(project("p-1", "First"));
    state.insert(project("p-2", "Second"));
    assert_eq!(state.items[0].id, "p-1");
    assert_eq!(state.items[1].id, "p-2");
}

#[test]
fn remove_drops_only_the_deleted_id() {
    let mut state = ProjectsState::default();
    state.insert(project("p-1", "Keep"));
    state.insert(project("p-2", "Drop"));
    state.remove("p-2");
    assert!(state.contains("p-1"));
    assert!(!state.contains("p-2"));
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let mut state = ProjectsState::default();
    state.insert(project("p-1", "Keep"));
    state.remove("p-9");
    assert_eq!(state.items.len(), 1);
}
