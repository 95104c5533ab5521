use super::*;

// =============================================================
// Sender parsing
// =============================================================

#[test]
fn parse_sender_from_user_object() {
    let value = serde_json::json!({"_id": "u-1", "email": "dev@example.com"});
    let sender = parse_sender(&value).expect("sender");
    assert_eq!(sender.id, "u-1");
    assert_eq!(sender.email, "dev@example.com");
    assert!(!sender.is_ai());
}

#[test]
fn parse_sender_accepts_bare_ai_tag() {
    let value = serde_json::json!("ai");
    let sender = parse_sender(&value).expect("sender");
    assert!(sender.is_ai());
}

#[test]
fn parse_sender_object_with_ai_id_is_ai() {
    let value = serde_json::json!({"_id": "ai", "email": "AI"});
    let sender = parse_sender(&value).expect("sender");
    assert!(sender.is_ai());
}

#[test]
fn parse_sender_falls_back_to_plain_id_field() {
    let value = serde_json::json!({"id": "u-2"});
    let sender = parse_sender(&value).expect("sender");
    assert_eq!(sender.id, "u-2");
    assert_eq!(sender.email, "u-2");
}

#[test]
fn parse_sender_rejects_malformed_values() {
    assert!(parse_sender(&serde_json::json!(null)).is_none());
    assert!(parse_sender(&serde_json::json!("")).is_none());
    assert!(parse_sender(&serde_json::json!({"email": "no-id@example.com"})).is_none());
}

// =============================================================
// Message payload parsing
// =============================================================

#[test]
fn parse_project_message_roundtrips_published_payload() {
    let outbound = ProjectMessage {
        sender: Sender { id: "u-1".to_owned(), email: "dev@example.com".to_owned() },
        message: "hello".to_owned(),
    };
    let event = ChannelEvent::message(&outbound);
    assert_eq!(event.event, MESSAGE_TOPIC);

    let parsed = parse_project_message(&event.data).expect("message");
    assert_eq!(parsed, outbound);
}

#[test]
fn parse_project_message_rejects_missing_fields() {
    assert!(parse_project_message(&serde_json::json!({"message": "no sender"})).is_none());
    assert!(
        parse_project_message(&serde_json::json!({"sender": {"_id": "u-1"}})).is_none()
    );
    assert!(parse_project_message(&serde_json::json!({"message": 42, "sender": "ai"})).is_none());
}

// =============================================================
// AI reply text extraction
// =============================================================

#[test]
fn ai_message_text_reads_text_field() {
    let body = "{\"text\":\"fn main() {}\",\"fileTree\":{}}";
    assert_eq!(ai_message_text(body).as_deref(), Some("fn main() {}"));
}

#[test]
fn ai_message_text_rejects_plain_strings() {
    assert!(ai_message_text("just words").is_none());
    assert!(ai_message_text("{\"other\":1}").is_none());
}

// =============================================================
// REST schema decoding
// =============================================================

#[test]
fn auth_response_decodes_token_and_user() {
    let body = serde_json::json!({
        "token": "jwt-abc",
        "user": {"_id": "u-1", "email": "dev@example.com"}
    });
    let auth: AuthResponse = serde_json::from_value(body).expect("auth");
    assert_eq!(auth.token, "jwt-abc");
    assert_eq!(auth.user.id, "u-1");
    assert!(auth.user.profile_pic.is_none());
}

#[test]
fn auth_response_rejects_missing_token() {
    let body = serde_json::json!({
        "user": {"_id": "u-1", "email": "dev@example.com"}
    });
    assert!(serde_json::from_value::<AuthResponse>(body).is_err());
}

#[test]
fn project_decodes_mongo_shape_with_optional_fields() {
    let body = serde_json::json!({
        "_id": "p-1",
        "name": "Demo",
        "users": ["u-1", "u-2"],
        "fileTree": {"src": {"main.rs": "fn main() {}"}}
    });
    let project: Project = serde_json::from_value(body).expect("project");
    assert_eq!(project.id, "p-1");
    assert_eq!(project.users.len(), 2);
    assert!(project.file_tree.get("src").is_some());

    let sparse = serde_json::json!({"_id": "p-2", "name": "Bare"});
    let project: Project = serde_json::from_value(sparse).expect("project");
    assert!(project.users.is_empty());
    assert!(project.file_tree.is_null());
}

#[test]
fn projects_response_defaults_to_empty_list() {
    let body = serde_json::json!({});
    let resp: ProjectsResponse = serde_json::from_value(body).expect("projects");
    assert!(resp.projects.is_empty());
}
