//! Key-value storage capability.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Durable, process-external string-keyed storage of JSON documents.
///
/// This is an injected capability: every channel consumer receives an
/// explicit store reference, never an ambient global. Writes are
/// last-write-wins with no transactions, partial writes, or locking;
/// correctness under truly concurrent writers is not guaranteed.
///
/// Reads of an absent key return `Ok(None)` and must not fail. A failing
/// medium surfaces as [`BlanError::StorageUnavailable`], which callers
/// treat as non-fatal (state remains in memory for the session).
///
/// [`BlanError::StorageUnavailable`]: crate::BlanError::StorageUnavailable
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the document stored under `key`, or `None` if absent.
    async fn read(&self, key: &str) -> Result<Option<Value>>;

    /// Writes `value` under `key`, replacing any previous document.
    async fn write(&self, key: &str, value: Value) -> Result<()>;
}
