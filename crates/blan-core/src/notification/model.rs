//! Cross-cutting notification domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::now_millis;

/// Retention cap for notifications; the list is kept newest-first.
pub const MAX_NOTIFICATIONS: usize = 10;

/// Which subsystem produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    Security,
    Chat,
    System,
}

/// A notification as supplied by a producer, before the aggregator assigns
/// an id and timestamp.
#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl NotificationDraft {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
        }
    }
}

/// A persisted notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub timestamp: i64,
}

impl Notification {
    /// Stamps a draft with a fresh id and the current timestamp.
    pub fn from_draft(draft: NotificationDraft) -> Self {
        Self {
            id: format!("notif-{}", Uuid::new_v4()),
            title: draft.title,
            message: draft.message,
            kind: draft.kind,
            timestamp: now_millis(),
        }
    }
}
