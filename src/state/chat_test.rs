use super::*;

fn user_sender(id: &str) -> Sender {
    Sender { id: id.to_owned(), email: format!("{id}@example.com") }
}

fn remote(id: &str, text: &str) -> ProjectMessage {
    ProjectMessage { sender: user_sender(id), message: text.to_owned() }
}

#[test]
fn chat_state_default_empty_entries() {
    let state = ChatState::default();
    assert!(state.entries.is_empty());
}

// =============================================================
// Append-only sequence
// =============================================================

#[test]
fn length_equals_local_sends_plus_channel_receives() {
    let mut state = ChatState::default();
    state.push_local(user_sender("u-1"), "one".to_owned());
    state.push_remote(remote("u-2", "two"));
    state.push_local(user_sender("u-1"), "three".to_owned());
    state.push_remote(remote("u-2", "four"));
    assert_eq!(state.entries.len(), 4);
}

#[test]
fn entries_keep_insertion_order() {
    let mut state = ChatState::default();
    state.push_local(user_sender("u-1"), "first".to_owned());
    state.push_remote(remote("u-2", "second"));
    let bodies: Vec<&str> = state.entries.iter().map(|e| e.body.as_str()).collect();
    assert_eq!(bodies, vec!["first", "second"]);
}

#[test]
fn remote_echo_of_own_message_is_not_deduplicated() {
    let mut state = ChatState::default();
    state.push_local(user_sender("u-1"), "hello".to_owned());
    state.push_remote(remote("u-1", "hello"));
    assert_eq!(state.entries.len(), 2);
}

#[test]
fn entries_get_distinct_list_keys() {
    let mut state = ChatState::default();
    state.push_local(user_sender("u-1"), "hello".to_owned());
    state.push_local(user_sender("u-1"), "hello".to_owned());
    assert_ne!(state.entries[0].id, state.entries[1].id);
}

#[test]
fn ai_entries_are_flagged() {
    let mut state = ChatState::default();
    state.push_remote(ProjectMessage {
        sender: Sender::ai(),
        message: "{\"text\":\"hi\"}".to_owned(),
    });
    assert!(state.entries[0].is_ai());
}

// =============================================================
// Draft validation
// =============================================================

#[test]
fn empty_draft_is_rejected() {
    assert_eq!(prepare_draft(""), None);
    assert_eq!(prepare_draft("   "), None);
    assert_eq!(prepare_draft("\n\t"), None);
}

#[test]
fn draft_is_trimmed() {
    assert_eq!(prepare_draft("  hello  ").as_deref(), Some("hello"));
}

// =============================================================
// Recent own messages
// =============================================================

#[test]
fn recent_own_filters_by_sender() {
    let mut state = ChatState::default();
    state.push_local(user_sender("u-1"), "mine".to_owned());
    state.push_remote(remote("u-2", "theirs"));
    let recent = state.recent_own("u-1", 5);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].body, "mine");
}

#[test]
fn recent_own_caps_at_limit_keeping_newest() {
    let mut state = ChatState::default();
    for i in 0..7 {
        state.push_local(user_sender("u-1"), format!("m{i}"));
    }
    let recent = state.recent_own("u-1", 5);
    assert_eq!(recent.len(), 5);
    assert_eq!(recent.first().map(|e| e.body.as_str()), Some("m2"));
    assert_eq!(recent.last().map(|e| e.body.as_str()), Some("m6"));
}
