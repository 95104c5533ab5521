#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{ProjectMessage, Sender};

/// State for the project chat panel.
///
/// The entry sequence is append-only for the lifetime of the screen.
/// Ordering is insertion order: concurrent sends from collaborators may
/// interleave relative to true causal order, and no correction is applied.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
}

/// A single displayed message. `id` is a client-generated key for stable
/// list rendering only; it never goes on the wire.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatEntry {
    pub id: String,
    pub sender: Sender,
    pub body: String,
}

impl ChatEntry {
    #[must_use]
    pub fn new(sender: Sender, body: String) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), sender, body }
    }

    #[must_use]
    pub fn is_ai(&self) -> bool {
        self.sender.is_ai()
    }
}

impl ChatState {
    /// Append an optimistic local copy of a just-published message.
    pub fn push_local(&mut self, sender: Sender, body: String) {
        self.entries.push(ChatEntry::new(sender, body));
    }

    /// Append an inbound channel message. Unconditional: no deduplication
    /// against optimistic local entries.
    pub fn push_remote(&mut self, msg: ProjectMessage) {
        self.entries.push(ChatEntry::new(msg.sender, msg.message));
    }

    /// The user's own most recent messages, oldest first, capped at `limit`.
    #[must_use]
    pub fn recent_own(&self, user_id: &str, limit: usize) -> Vec<&ChatEntry> {
        let own: Vec<&ChatEntry> =
            self.entries.iter().filter(|e| e.sender.id == user_id).collect();
        let skip = own.len().saturating_sub(limit);
        own.into_iter().skip(skip).collect()
    }
}

/// Validate a draft for sending: trims surrounding whitespace and rejects
/// empty drafts (no local append, no publish).
#[must_use]
pub fn prepare_draft(draft: &str) -> Option<String> {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
