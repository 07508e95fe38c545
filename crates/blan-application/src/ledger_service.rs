//! Karma ledger use cases.

use std::sync::Arc;

use blan_core::channel::{names, StateChannel};
use blan_core::ledger::LedgerEntry;
use blan_core::store::KeyValueStore;
use blan_core::Result;

use crate::seeds;

/// Use-case service over the ledger channel.
///
/// Entries are append-only and stamped with their fingerprint once at
/// creation; the hash is never recomputed or chained.
pub struct LedgerService {
    channel: StateChannel<Vec<LedgerEntry>>,
}

impl LedgerService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            channel: StateChannel::new(names::LEDGER, store),
        }
    }

    /// Records a karma transfer and returns the stored entry.
    pub async fn record(
        &self,
        from: impl Into<String>,
        to: impl Into<String>,
        amount: i64,
        reason: impl Into<String>,
    ) -> Result<LedgerEntry> {
        let entry = LedgerEntry::record(from, to, amount, reason)?;
        let mut entries = self.entries().await;
        entries.push(entry.clone());
        self.channel.save(&entries).await?;
        tracing::debug!(id = %entry.id, amount, "ledger entry recorded");
        Ok(entry)
    }

    /// All entries in append order, seeded on first load.
    pub async fn entries(&self) -> Vec<LedgerEntry> {
        self.channel.load(seeds::initial_ledger()).await
    }

    /// Entries involving the given user, as sender or recipient.
    pub async fn entries_for(&self, user_id: &str) -> Vec<LedgerEntry> {
        self.entries()
            .await
            .into_iter()
            .filter(|e| e.involves(user_id))
            .collect()
    }
}
