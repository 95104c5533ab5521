use super::*;

// =============================================================
// Server error payload extraction
// =============================================================

#[test]
fn server_error_message_prefers_message_then_error() {
    assert_eq!(
        server_error_message("{\"message\":\"m1\",\"error\":\"m2\"}"),
        "m1"
    );
    assert_eq!(server_error_message("{\"error\":\"m2\"}"), "m2");
}

#[test]
fn server_error_message_falls_back_to_raw_body() {
    assert_eq!(server_error_message("plain failure"), "plain failure");
    assert_eq!(server_error_message("  spaced  "), "spaced");
}

#[test]
fn server_error_message_handles_empty_body() {
    assert_eq!(server_error_message(""), "request failed");
    assert_eq!(server_error_message("{}"), "{}");
}

// =============================================================
// URL assembly
// =============================================================

#[test]
fn api_url_joins_base_and_path() {
    let url = api_url("/users/login");
    assert!(url.ends_with("/users/login"));
    assert!(!api_base().ends_with('/'));
}

#[test]
fn api_error_display_includes_status() {
    let err = ApiError::Server { status: 401, message: "bad credentials".to_owned() };
    assert_eq!(err.to_string(), "server returned 401: bad credentials");
}
