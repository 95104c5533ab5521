//! Typed payloads for the REST surface and the realtime channel.
//!
//! The backend stores documents with Mongo-style `_id` keys and populates
//! some fields loosely, so inbound channel payloads go through tolerant
//! parse helpers with field fallbacks while outbound payloads serialize
//! from the structs directly.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sender identifier used by the assistant identity on the message topic.
pub const AI_SENDER_ID: &str = "ai";

/// The single channel topic carrying project chat traffic.
pub const MESSAGE_TOPIC: &str = "project-message";

/// An authenticated user. Created on registration, read-only afterward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(rename = "profilePic", default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

/// A collaborative project: name, member user ids, and an opaque file tree
/// owned entirely by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(rename = "fileTree", default)]
    pub file_tree: Value,
}

/// Originator of a chat message: a user reference, or the literal `"ai"`
/// identity for assistant replies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
}

impl Sender {
    /// The assistant identity.
    #[must_use]
    pub fn ai() -> Self {
        Self { id: AI_SENDER_ID.to_owned(), email: "AI".to_owned() }
    }

    #[must_use]
    pub fn is_ai(&self) -> bool {
        self.id == AI_SENDER_ID
    }
}

impl From<&User> for Sender {
    fn from(user: &User) -> Self {
        Self { id: user.id.clone(), email: user.email.clone() }
    }
}

/// Wire payload on the [`MESSAGE_TOPIC`] topic.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectMessage {
    pub sender: Sender,
    pub message: String,
}

/// Envelope for every event crossing the socket channel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChannelEvent {
    pub event: String,
    pub data: Value,
}

impl ChannelEvent {
    /// Wrap a chat message in a [`MESSAGE_TOPIC`] envelope.
    ///
    /// # Panics
    ///
    /// Never panics in practice; `ProjectMessage` serializes infallibly.
    #[must_use]
    pub fn message(payload: &ProjectMessage) -> Self {
        Self {
            event: MESSAGE_TOPIC.to_owned(),
            data: serde_json::to_value(payload).unwrap_or(Value::Null),
        }
    }
}

/// Parse a sender from an inbound payload.
///
/// Accepts either a populated user object or a bare identity string (the
/// backend sends the literal `"ai"` for assistant messages).
#[must_use]
pub fn parse_sender(value: &Value) -> Option<Sender> {
    if let Some(tag) = value.as_str() {
        if tag.is_empty() {
            return None;
        }
        return Some(if tag == AI_SENDER_ID {
            Sender::ai()
        } else {
            Sender { id: tag.to_owned(), email: tag.to_owned() }
        });
    }

    let id = value
        .get("_id")
        .and_then(Value::as_str)
        .or_else(|| value.get("id").and_then(Value::as_str))?
        .to_owned();
    let email = value
        .get("email")
        .and_then(Value::as_str)
        .unwrap_or(id.as_str())
        .to_owned();

    Some(Sender { id, email })
}

/// Parse a chat message from a [`MESSAGE_TOPIC`] event payload.
///
/// Returns `None` when the payload carries no message text or no
/// recognizable sender.
#[must_use]
pub fn parse_project_message(data: &Value) -> Option<ProjectMessage> {
    let message = data.get("message").and_then(Value::as_str)?.to_owned();
    let sender = parse_sender(data.get("sender")?)?;
    Some(ProjectMessage { sender, message })
}

/// Extract the display text of an assistant reply.
///
/// AI messages arrive as a serialized object with a `text` field; plain
/// strings fall through to `None` and are rendered verbatim by the caller.
#[must_use]
pub fn ai_message_text(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("text").and_then(Value::as_str).map(ToOwned::to_owned)
}

/// Response body shared by register and login.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectsResponse {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectResponse {
    pub project: Project,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub result: String,
}
