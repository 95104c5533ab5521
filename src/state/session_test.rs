use super::*;

fn user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "dev@example.com".to_owned(),
        profile_pic: None,
    }
}

// =============================================================
// SessionState lifecycle
// =============================================================

#[test]
fn session_starts_loading_with_no_user() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
}

#[test]
fn establish_installs_user_and_stops_loading() {
    let mut state = SessionState::default();
    state.establish(user());
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-1"));
    assert!(!state.loading);
}

#[test]
fn establish_overwrites_previous_user() {
    let mut state = SessionState::default();
    state.establish(user());
    let mut other = user();
    other.id = "u-2".to_owned();
    state.establish(other);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-2"));
}

#[test]
fn clear_drops_user() {
    let mut state = SessionState::default();
    state.establish(user());
    state.clear();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

// =============================================================
// first_name
// =============================================================

#[test]
fn first_name_takes_local_part_of_email() {
    assert_eq!(first_name("dev@example.com"), "dev");
}

#[test]
fn first_name_without_at_returns_whole_string() {
    assert_eq!(first_name("dev"), "dev");
}

#[test]
fn first_name_empty_falls_back() {
    assert_eq!(first_name(""), "User");
    assert_eq!(first_name("@example.com"), "User");
}
