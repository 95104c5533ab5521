use super::*;

// =============================================================
// Channel endpoint derivation
// =============================================================

#[test]
fn channel_url_maps_http_to_ws() {
    let url = channel_url("http://localhost:3000", "p-1", None);
    assert_eq!(url, "ws://localhost:3000/socket?project_id=p-1");
}

#[test]
fn channel_url_maps_https_to_wss() {
    let url = channel_url("https://api.example.com", "p-1", None);
    assert_eq!(url, "wss://api.example.com/socket?project_id=p-1");
}

#[test]
fn channel_url_appends_token_when_present() {
    let url = channel_url("https://api.example.com", "p-1", Some("jwt-abc"));
    assert_eq!(
        url,
        "wss://api.example.com/socket?project_id=p-1&token=jwt-abc"
    );
}

#[test]
fn channel_url_leaves_unknown_schemes_alone() {
    let url = channel_url("wss://api.example.com", "p-1", None);
    assert!(url.starts_with("wss://api.example.com"));
}

// =============================================================
// Event envelope
// =============================================================

#[test]
fn envelope_decodes_event_and_payload() {
    let raw = "{\"event\":\"project-message\",\"data\":{\"sender\":\"ai\",\"message\":\"hi\"}}";
    let event: crate::net::types::ChannelEvent = serde_json::from_str(raw).expect("event");
    assert_eq!(event.event, "project-message");
    let msg = crate::net::types::parse_project_message(&event.data).expect("message");
    assert!(msg.sender.is_ai());
    assert_eq!(msg.message, "hi");
}

#[test]
fn envelope_rejects_missing_event_name() {
    let raw = "{\"data\":{}}";
    assert!(serde_json::from_str::<crate::net::types::ChannelEvent>(raw).is_err());
}
