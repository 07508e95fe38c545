//! Karma ledger domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::hash;
use crate::time::now_millis;

/// One karma transfer recorded on the community ledger.
///
/// The fingerprint is computed over the entry's content once at creation
/// and never recomputed. It is a display-only integrity marker: no entry
/// references a prior entry's hash, so the ledger is not tamper-evident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: String,
    pub from: String,
    pub to: String,
    pub amount: i64,
    pub timestamp: i64,
    pub reason: String,
    pub hash: String,
}

/// The fields the fingerprint covers, in their stored order.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntryContent<'a> {
    id: &'a str,
    from: &'a str,
    to: &'a str,
    amount: i64,
    timestamp: i64,
    reason: &'a str,
}

impl LedgerEntry {
    /// Builds a new entry with a fresh id, the current timestamp, and its
    /// creation-time fingerprint.
    pub fn record(
        from: impl Into<String>,
        to: impl Into<String>,
        amount: i64,
        reason: impl Into<String>,
    ) -> Result<Self> {
        let id = format!("tx-{}", Uuid::new_v4());
        let from = from.into();
        let to = to.into();
        let reason = reason.into();
        let timestamp = now_millis();
        let hash = hash::fingerprint(&EntryContent {
            id: &id,
            from: &from,
            to: &to,
            amount,
            timestamp,
            reason: &reason,
        })?;
        Ok(Self {
            id,
            from,
            to,
            amount,
            timestamp,
            reason,
            hash,
        })
    }

    /// Whether this entry touches the given user, as sender or recipient.
    pub fn involves(&self, user_id: &str) -> bool {
        self.from == user_id || self.to == user_id
    }
}
