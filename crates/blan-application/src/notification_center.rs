//! Cross-cutting notification aggregation.

use std::sync::Arc;

use tokio::sync::Mutex;

use blan_core::channel::{names, StateChannel};
use blan_core::notification::{Notification, NotificationDraft, MAX_NOTIFICATIONS};
use blan_core::store::KeyValueStore;

/// Bounded, most-recent-first list of cross-cutting alerts fed by multiple
/// producers (security, chat, system), independently persisted.
///
/// The list is capped at [`MAX_NOTIFICATIONS`]; pushing beyond the cap
/// discards the oldest entries. No deduplication: pushing the same logical
/// alert twice produces two entries.
pub struct NotificationCenter {
    channel: StateChannel<Vec<Notification>>,
    items: Mutex<Vec<Notification>>,
}

impl NotificationCenter {
    /// Opens the aggregator, restoring the persisted list.
    pub async fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let channel = StateChannel::new(names::NOTIFICATIONS, store);
        let items = channel.load(Vec::new()).await;
        Self {
            channel,
            items: Mutex::new(items),
        }
    }

    /// Stamps the draft with an id and timestamp, prepends it, truncates
    /// to the cap, and persists.
    ///
    /// A failed persist is non-fatal; the notification stays in memory for
    /// the session.
    pub async fn push(&self, draft: NotificationDraft) -> Notification {
        let notification = Notification::from_draft(draft);
        let snapshot = {
            let mut items = self.items.lock().await;
            items.insert(0, notification.clone());
            items.truncate(MAX_NOTIFICATIONS);
            items.clone()
        };
        if let Err(e) = self.channel.save(&snapshot).await {
            tracing::warn!(error = %e, "failed to persist notifications, keeping in memory");
        }
        notification
    }

    /// Empties both memory and persisted state.
    pub async fn clear(&self) {
        let mut items = self.items.lock().await;
        items.clear();
        if let Err(e) = self.channel.save(&Vec::new()).await {
            tracing::warn!(error = %e, "failed to persist cleared notifications");
        }
    }

    /// Current notifications, newest first.
    pub async fn list(&self) -> Vec<Notification> {
        self.items.lock().await.clone()
    }
}
