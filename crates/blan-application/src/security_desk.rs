//! Security log and emergency broadcast.

use std::sync::Arc;

use blan_core::channel::{names, StateChannel};
use blan_core::chat::{ChatMessage, MessageKind};
use blan_core::notification::{NotificationDraft, NotificationKind};
use blan_core::security::{SecurityAlert, Severity, MAX_ALERTS};
use blan_core::store::KeyValueStore;
use blan_core::Result;

use crate::notification_center::NotificationCenter;
use crate::seeds;

/// Camera label stamped on manually triggered broadcasts.
const MANUAL_CAMERA: &str = "Manual Override";

/// Sender identity for security cross-posts into the chat channel.
const SECURITY_SENDER_ID: &str = "SYSTEM";
const SECURITY_SENDER_NAME: &str = "SECURITY CLUSTER";

/// Use-case service over the security log, with the documented cross-post
/// into the chat channel.
pub struct SecurityDesk {
    alerts: StateChannel<Vec<SecurityAlert>>,
    chat: StateChannel<Vec<ChatMessage>>,
    notifications: Arc<NotificationCenter>,
}

impl SecurityDesk {
    pub fn new(store: Arc<dyn KeyValueStore>, notifications: Arc<NotificationCenter>) -> Self {
        Self {
            alerts: StateChannel::new(names::SECURITY_LOGS, Arc::clone(&store)),
            chat: StateChannel::new(names::CHAT_MESSAGES, store),
            notifications,
        }
    }

    /// Current alerts, newest first, seeded on first load.
    pub async fn alerts(&self) -> Vec<SecurityAlert> {
        self.alerts.load(seeds::initial_alerts()).await
    }

    /// Prepends an alert to the log, discarding entries beyond the cap.
    pub async fn record_alert(&self, alert: SecurityAlert) -> Result<()> {
        let mut alerts = self.alerts().await;
        alerts.insert(0, alert);
        alerts.truncate(MAX_ALERTS);
        self.alerts.save(&alerts).await
    }

    /// Triggers an emergency broadcast:
    ///
    /// 1. logs a CRITICAL alert locally,
    /// 2. appends one SECURITY message to the chat channel (load-then-
    ///    append, so the human-authored history is never overwritten),
    /// 3. pushes a SECURITY notification.
    pub async fn broadcast(&self, message: &str) -> Result<SecurityAlert> {
        let alert = SecurityAlert::new(MANUAL_CAMERA, message, Severity::Critical);
        self.record_alert(alert.clone()).await?;

        let mut chat = self.chat.load(Vec::new()).await;
        chat.push(ChatMessage::new(
            SECURITY_SENDER_ID,
            SECURITY_SENDER_NAME,
            message,
            MessageKind::Security,
        ));
        self.chat.save(&chat).await?;

        self.notifications
            .push(NotificationDraft::new(
                "Security Alert",
                message,
                NotificationKind::Security,
            ))
            .await;

        tracing::warn!(broadcast = %message, "emergency broadcast issued");
        Ok(alert)
    }
}
