//! Community chat use cases: sending, the Neighborhood Bot auto-reply,
//! and the polling view of external messages.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use blan_core::channel::{names, StateChannel};
use blan_core::chat::{ChatMessage, MessageKind};
use blan_core::notification::{NotificationDraft, NotificationKind};
use blan_core::store::KeyValueStore;
use blan_core::Result;

use crate::notification_center::NotificationCenter;
use crate::seeds;
use crate::sync::PollingSynchronizer;

const BOT_SENDER_ID: &str = "SYSTEM";
const BOT_SENDER_NAME: &str = "Neighborhood Bot";
const BOT_REPLY_TEXT: &str = "If you need assistance, please use the 'Honey Do' board or \
                              trigger an emergency alert in the Security tab.";

/// Result of a send: the stored message, plus the scheduled bot reply task
/// when the text asked for help.
pub struct SendOutcome {
    pub message: ChatMessage,
    /// Present when the auto-reply was scheduled; resolves to the reply
    /// once it has been appended.
    pub bot_reply: Option<JoinHandle<Result<ChatMessage>>>,
}

/// Use-case service over the chat channel for one local actor.
pub struct ChatService {
    channel: StateChannel<Vec<ChatMessage>>,
    actor_id: String,
    actor_name: String,
    notifications: Arc<NotificationCenter>,
    reply_delay: Duration,
}

impl ChatService {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        actor_id: impl Into<String>,
        actor_name: impl Into<String>,
        notifications: Arc<NotificationCenter>,
        reply_delay: Duration,
    ) -> Self {
        Self {
            channel: StateChannel::new(names::CHAT_MESSAGES, store),
            actor_id: actor_id.into(),
            actor_name: actor_name.into(),
            notifications,
            reply_delay,
        }
    }

    /// Current messages in append order, seeded on first load.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.channel.load(seeds::initial_messages()).await
    }

    /// Appends a USER message authored by the local actor.
    ///
    /// Blank text is ignored (returns `None`). When the text mentions
    /// "help" or "status", the Neighborhood Bot reply is scheduled after
    /// the configured delay; the reply appends rather than overwrites so
    /// the triggering message is never lost.
    pub async fn send(&self, text: &str) -> Result<Option<SendOutcome>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let message = ChatMessage::new(&self.actor_id, &self.actor_name, text, MessageKind::User);
        let mut messages = self.messages().await;
        messages.push(message.clone());
        self.channel.save(&messages).await?;

        let bot_reply = if Self::wants_bot_reply(text) {
            Some(self.spawn_bot_reply())
        } else {
            None
        };

        Ok(Some(SendOutcome { message, bot_reply }))
    }

    fn wants_bot_reply(text: &str) -> bool {
        let lower = text.to_lowercase();
        lower.contains("help") || lower.contains("status")
    }

    fn spawn_bot_reply(&self) -> JoinHandle<Result<ChatMessage>> {
        let channel = self.channel.clone();
        let notifications = Arc::clone(&self.notifications);
        let delay = self.reply_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let reply =
                ChatMessage::new(BOT_SENDER_ID, BOT_SENDER_NAME, BOT_REPLY_TEXT, MessageKind::System);
            let mut messages = channel.load(Vec::new()).await;
            messages.push(reply.clone());
            channel.save(&messages).await?;

            notifications
                .push(NotificationDraft::new(
                    "New Message",
                    format!("{}: {}", BOT_SENDER_NAME, reply.text),
                    NotificationKind::Chat,
                ))
                .await;

            Ok(reply)
        })
    }

    /// Builds the polling view over this channel for the local actor,
    /// primed with the current snapshot so history does not replay as
    /// events.
    pub async fn synchronizer(&self) -> PollingSynchronizer<ChatMessage> {
        let view = self.messages().await;
        PollingSynchronizer::with_initial_view(self.channel.clone(), self.actor_id.clone(), view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blan_infrastructure::MemoryStore;

    async fn service(store: &Arc<MemoryStore>) -> ChatService {
        let store_dyn = Arc::clone(store) as Arc<dyn KeyValueStore>;
        let notifications = Arc::new(NotificationCenter::open(Arc::clone(&store_dyn)).await);
        ChatService::new(
            store_dyn,
            "u-777",
            "Alex Rivera",
            notifications,
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn test_send_appends_user_message() {
        let store = Arc::new(MemoryStore::new());
        let chat = service(&store).await;

        let before = chat.messages().await.len();
        let outcome = chat.send("Good morning!").await.unwrap().unwrap();
        assert!(outcome.bot_reply.is_none());

        let messages = chat.messages().await;
        assert_eq!(messages.len(), before + 1);
        let last = messages.last().unwrap();
        assert_eq!(last.text, "Good morning!");
        assert_eq!(last.sender_id, "u-777");
        assert_eq!(last.kind, MessageKind::User);
    }

    #[tokio::test]
    async fn test_blank_text_is_ignored() {
        let store = Arc::new(MemoryStore::new());
        let chat = service(&store).await;
        assert!(chat.send("   ").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_help_triggers_bot_reply_append() {
        let store = Arc::new(MemoryStore::new());
        let chat = service(&store).await;

        let outcome = chat.send("Can anyone help with my fence?").await.unwrap().unwrap();
        let reply = outcome.bot_reply.expect("reply scheduled").await.unwrap().unwrap();
        assert_eq!(reply.kind, MessageKind::System);
        assert_eq!(reply.sender_name, "Neighborhood Bot");

        // The reply appended after the human message; nothing was lost.
        let messages = chat.messages().await;
        let len = messages.len();
        assert_eq!(messages[len - 2].text, "Can anyone help with my fence?");
        assert_eq!(messages[len - 1].id, reply.id);

        // And a CHAT notification was pushed.
        let notifications = chat.notifications.list().await;
        assert_eq!(notifications[0].kind, NotificationKind::Chat);
    }

    #[tokio::test]
    async fn test_status_triggers_bot_reply() {
        let store = Arc::new(MemoryStore::new());
        let chat = service(&store).await;
        let outcome = chat.send("What's the STATUS?").await.unwrap().unwrap();
        assert!(outcome.bot_reply.is_some());
    }

    #[tokio::test]
    async fn test_synchronizer_sees_external_messages_only() {
        let store = Arc::new(MemoryStore::new());
        let chat = service(&store).await;
        chat.send("hello").await.unwrap();

        let mut sync = chat.synchronizer().await;

        // An external actor appends directly to the channel.
        let channel: StateChannel<Vec<ChatMessage>> = StateChannel::new(
            names::CHAT_MESSAGES,
            Arc::clone(&store) as Arc<dyn KeyValueStore>,
        );
        let mut messages = channel.load(Vec::new()).await;
        messages.push(ChatMessage::new(
            "u-elderly-1",
            "Mrs. Gable",
            "Hello dear!",
            MessageKind::User,
        ));
        channel.save(&messages).await.unwrap();

        let events = sync.poll_once().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].text, "Hello dear!");
    }
}
