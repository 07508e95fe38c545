//! End-to-end flows over a durable store: the documented cross-posting
//! paths, the claim workflow, and the notification cap, exactly as the
//! views drive them.

use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use blan_application::{
    ChatService, JobBoard, NotificationCenter, OfflineMatcher, SecurityDesk,
};
use blan_core::channel::{names, StateChannel};
use blan_core::chat::{ChatMessage, MessageKind};
use blan_core::config::Config;
use blan_core::job::ClaimOutcome;
use blan_core::notification::NotificationKind;
use blan_core::store::KeyValueStore;
use blan_infrastructure::JsonDirStore;

fn durable_store(dir: &TempDir) -> Arc<dyn KeyValueStore> {
    Arc::new(JsonDirStore::new(dir.path()))
}

#[tokio::test]
async fn test_security_broadcast_reaches_chat_and_notifications() {
    let dir = TempDir::new().unwrap();
    let store = durable_store(&dir);

    let notifications = Arc::new(NotificationCenter::open(Arc::clone(&store)).await);
    let desk = SecurityDesk::new(Arc::clone(&store), Arc::clone(&notifications));

    // A human message is already on the channel.
    let chat: StateChannel<Vec<ChatMessage>> =
        StateChannel::new(names::CHAT_MESSAGES, Arc::clone(&store));
    chat.save(&vec![ChatMessage::new(
        "u-777",
        "Alex Rivera",
        "quiet evening so far",
        MessageKind::User,
    )])
    .await
    .unwrap();

    let msg = "Manual emergency broadcast: Unidentified activity reported in Section C.";
    desk.broadcast(msg).await.expect("broadcast should succeed");

    // Chat grew by exactly one SECURITY entry and kept the human message.
    let messages = chat.load(Vec::new()).await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text, "quiet evening so far");
    assert_eq!(messages[1].kind, MessageKind::Security);
    assert_eq!(messages[1].text, msg);

    // The notification landed, and it survives a reopen of the store.
    drop(notifications);
    let reopened = NotificationCenter::open(store).await;
    let listed = reopened.list().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].kind, NotificationKind::Security);
}

#[tokio::test]
async fn test_claim_is_durable_and_monotonic() {
    let dir = TempDir::new().unwrap();
    let store = durable_store(&dir);

    let config = Config::default();
    let board = JobBoard::new(
        Arc::clone(&store),
        Arc::new(OfflineMatcher),
        config.matcher_timeout(),
    );

    assert_eq!(
        board.claim("job-1", "u-777").await.unwrap(),
        ClaimOutcome::Claimed
    );

    // A second board over the same store sees the claim and rejects a rival.
    let rival_board = JobBoard::new(store, Arc::new(OfflineMatcher), config.matcher_timeout());
    assert_eq!(
        rival_board.claim("job-1", "u-999").await.unwrap(),
        ClaimOutcome::AlreadyClaimed
    );

    let jobs = rival_board.list().await;
    let job = jobs.iter().find(|j| j.id == "job-1").unwrap();
    assert_eq!(job.assigned_to.as_deref(), Some("u-777"));
}

#[tokio::test]
async fn test_chat_sync_picks_up_security_broadcast() {
    let dir = TempDir::new().unwrap();
    let store = durable_store(&dir);

    let notifications = Arc::new(NotificationCenter::open(Arc::clone(&store)).await);
    let chat = ChatService::new(
        Arc::clone(&store),
        "u-777",
        "Alex Rivera",
        Arc::clone(&notifications),
        Duration::ZERO,
    );
    chat.send("all quiet").await.unwrap();

    let mut sync = chat.synchronizer().await;

    let desk = SecurityDesk::new(store, notifications);
    desk.broadcast("Movement at the gate").await.unwrap();

    let events = sync.poll_once().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, MessageKind::Security);
    assert_eq!(events[0].text, "Movement at the gate");
}
