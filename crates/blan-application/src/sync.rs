//! Polling synchronizer.
//!
//! Gives the illusion of multi-actor real-time update within a
//! single-process, storage-only system: a per-view timed loop re-reads a
//! channel, detects growth relative to the last observed snapshot, and
//! emits an event for each new entry that did not originate from the local
//! actor.
//!
//! This is explicitly a cancelable periodic task, not a push subscription:
//! consumers see changes no sooner than one poll interval after they land
//! in the store.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use blan_core::channel::{Authored, StateChannel};

/// A per-view polling loop over one channel.
///
/// Each tick runs to completion (load, compare, emit) before the next may
/// fire; ticks never overlap. The comparison is by length only, not
/// content: a simultaneous removal-and-addition of equal net length is
/// invisible. Shrinkage resyncs the local view silently and emits nothing
/// (this covers "Clear All").
pub struct PollingSynchronizer<T> {
    channel: StateChannel<Vec<T>>,
    actor_id: String,
    view: Vec<T>,
}

impl<T> PollingSynchronizer<T>
where
    T: Authored + Clone + Serialize + DeserializeOwned + Send + 'static,
{
    /// Creates a synchronizer for `actor_id` over the given channel,
    /// starting from an empty observed snapshot.
    pub fn new(channel: StateChannel<Vec<T>>, actor_id: impl Into<String>) -> Self {
        Self {
            channel,
            actor_id: actor_id.into(),
            view: Vec::new(),
        }
    }

    /// Starts from an already-observed snapshot (e.g. the view's initial
    /// load), so seed entries do not replay as events.
    pub fn with_initial_view(
        channel: StateChannel<Vec<T>>,
        actor_id: impl Into<String>,
        view: Vec<T>,
    ) -> Self {
        Self {
            channel,
            actor_id: actor_id.into(),
            view,
        }
    }

    /// The collection as of the last completed tick.
    pub fn view(&self) -> &[T] {
        &self.view
    }

    /// Runs one tick: reload the channel, adopt the stored collection as
    /// the new local view, and return the entries beyond the previously
    /// observed length that were authored by someone other than the local
    /// actor, in insertion order.
    ///
    /// If the stored collection is not strictly longer than the observed
    /// one, nothing is returned and the view resyncs silently.
    pub async fn poll_once(&mut self) -> Vec<T> {
        let current = self.channel.load(Vec::new()).await;
        let observed = self.view.len();

        let mut external = Vec::new();
        if current.len() > observed {
            for entry in &current[observed..] {
                if entry.author_id() != self.actor_id {
                    external.push(entry.clone());
                }
            }
        }

        self.view = current;
        external
    }

    /// Spawns the background loop, polling on `interval` and forwarding
    /// each new external entry on the returned channel.
    ///
    /// Slow loads serialize ticks rather than letting them burst or
    /// overlap. After [`SyncHandle::cancel`] no further event is
    /// delivered, even if a load was in flight when the token fired.
    pub fn spawn(mut self, interval: Duration) -> (SyncHandle, mpsc::UnboundedReceiver<T>) {
        let token = CancellationToken::new();
        let loop_token = token.clone();
        let (tx, rx) = mpsc::unbounded_channel();

        let join = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            tracing::debug!(channel = %self.channel.name(), "synchronizer started");

            loop {
                tokio::select! {
                    _ = loop_token.cancelled() => break,
                    _ = ticker.tick() => {
                        let external = self.poll_once().await;
                        if loop_token.is_cancelled() {
                            break;
                        }
                        for entry in external {
                            if tx.send(entry).is_err() {
                                // Receiver gone, the consuming view is torn down.
                                return;
                            }
                        }
                    }
                }
            }
            tracing::debug!(channel = %self.channel.name(), "synchronizer stopped");
        });

        (SyncHandle { token, join }, rx)
    }
}

/// Handle owning a spawned synchronizer loop.
///
/// Dropping the handle cancels the loop, so no event can outlive the
/// consuming view.
pub struct SyncHandle {
    token: CancellationToken,
    join: JoinHandle<()>,
}

impl SyncHandle {
    /// Stops the loop. Idempotent: canceling twice is safe.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the loop has been canceled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancels and waits for the loop task to finish.
    pub async fn shutdown(mut self) {
        self.token.cancel();
        let _ = (&mut self.join).await;
    }
}

impl Drop for SyncHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use blan_core::channel::names;
    use blan_core::chat::{ChatMessage, MessageKind};
    use blan_core::store::KeyValueStore;
    use blan_infrastructure::MemoryStore;

    fn chat_channel(store: &Arc<MemoryStore>) -> StateChannel<Vec<ChatMessage>> {
        StateChannel::new(
            names::CHAT_MESSAGES,
            Arc::clone(store) as Arc<dyn KeyValueStore>,
        )
    }

    fn msg(sender: &str, text: &str) -> ChatMessage {
        ChatMessage::new(sender, sender, text, MessageKind::User)
    }

    #[tokio::test]
    async fn test_growth_emits_external_entries_in_order() {
        let store = Arc::new(MemoryStore::new());
        let channel = chat_channel(&store);

        let initial = vec![msg("u-777", "one"), msg("u-other", "two")];
        channel.save(&initial).await.unwrap();

        let mut sync = PollingSynchronizer::with_initial_view(
            channel.clone(),
            "u-777",
            initial.clone(),
        );

        let mut grown = initial;
        grown.push(msg("u-other", "three"));
        grown.push(msg("u-other", "four"));
        grown.push(msg("u-other", "five"));
        channel.save(&grown).await.unwrap();

        let events = sync.poll_once().await;
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].text, "three");
        assert_eq!(events[1].text, "four");
        assert_eq!(events[2].text, "five");
        assert_eq!(sync.view().len(), 5);
    }

    #[tokio::test]
    async fn test_own_entries_do_not_emit() {
        let store = Arc::new(MemoryStore::new());
        let channel = chat_channel(&store);

        let mut sync = PollingSynchronizer::new(channel.clone(), "u-777");
        channel
            .save(&vec![msg("u-777", "mine"), msg("u-other", "theirs")])
            .await
            .unwrap();

        let events = sync.poll_once().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].text, "theirs");
        assert_eq!(sync.view().len(), 2);
    }

    #[tokio::test]
    async fn test_shrinkage_resyncs_silently() {
        let store = Arc::new(MemoryStore::new());
        let channel = chat_channel(&store);

        let initial = vec![msg("u-other", "a"), msg("u-other", "b")];
        channel.save(&initial).await.unwrap();
        let mut sync =
            PollingSynchronizer::with_initial_view(channel.clone(), "u-777", initial);

        // Clear All.
        channel.save(&Vec::new()).await.unwrap();
        let events = sync.poll_once().await;
        assert!(events.is_empty());
        assert!(sync.view().is_empty());
    }

    #[tokio::test]
    async fn test_equal_length_swap_is_invisible() {
        let store = Arc::new(MemoryStore::new());
        let channel = chat_channel(&store);

        let initial = vec![msg("u-other", "a"), msg("u-other", "b")];
        channel.save(&initial).await.unwrap();
        let mut sync =
            PollingSynchronizer::with_initial_view(channel.clone(), "u-777", initial);

        // Remove one, add one: net length unchanged, so no events.
        channel
            .save(&vec![msg("u-other", "a"), msg("u-other", "c")])
            .await
            .unwrap();
        let events = sync.poll_once().await;
        assert!(events.is_empty());
        assert_eq!(sync.view()[1].text, "c");
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_loop_delivers_then_cancels() {
        let store = Arc::new(MemoryStore::new());
        let channel = chat_channel(&store);

        let sync = PollingSynchronizer::new(channel.clone(), "u-777");
        let (handle, mut rx) = sync.spawn(Duration::from_millis(10));

        channel.save(&vec![msg("u-other", "ping")]).await.unwrap();
        let delivered = rx.recv().await.expect("event should arrive");
        assert_eq!(delivered.text, "ping");

        handle.cancel();
        handle.cancel(); // idempotent

        // Entries written after cancellation never surface as events.
        channel
            .save(&vec![msg("u-other", "ping"), msg("u-other", "late")])
            .await
            .unwrap();
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_waits_for_loop() {
        let store = Arc::new(MemoryStore::new());
        let channel = chat_channel(&store);

        let sync = PollingSynchronizer::new(channel, "u-777");
        let (handle, _rx) = sync.spawn(Duration::from_millis(10));
        handle.shutdown().await;
    }
}
