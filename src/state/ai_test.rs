use super::*;

#[test]
fn ai_state_default_has_placeholder_content() {
    let state = AiState::default();
    assert!(!state.content.is_empty());
    assert!(!state.loading);
}
