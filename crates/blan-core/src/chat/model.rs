//! Community chat domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::channel::Authored;
use crate::time::now_millis;

/// Origin of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKind {
    #[default]
    User,
    System,
    Security,
}

/// One message on the community broadcast channel.
///
/// Messages are append-only in insertion order; there are no edits or
/// deletes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub text: String,
    pub timestamp: i64,
    /// Stored messages may omit the field; plain user messages are the
    /// historical default.
    #[serde(rename = "type", default)]
    pub kind: MessageKind,
}

impl ChatMessage {
    /// Builds a message with a fresh id and the current timestamp.
    pub fn new(
        sender_id: impl Into<String>,
        sender_name: impl Into<String>,
        text: impl Into<String>,
        kind: MessageKind,
    ) -> Self {
        Self {
            id: format!("m-{}", Uuid::new_v4()),
            sender_id: sender_id.into(),
            sender_name: sender_name.into(),
            text: text.into(),
            timestamp: now_millis(),
            kind,
        }
    }
}

impl Authored for ChatMessage {
    fn author_id(&self) -> &str {
        &self.sender_id
    }
}
