//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use blan_core::error::{BlanError, Result};
use blan_core::store::KeyValueStore;

/// A process-local [`KeyValueStore`] backed by a HashMap.
///
/// Used as the session fallback when no durable medium is available, and
/// as the store of choice in tests. The fault toggle lets tests exercise
/// the StorageUnavailable recovery path.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, Value>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every read and write fails with StorageUnavailable,
    /// simulating a full or detached medium.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(BlanError::storage_unavailable("memory store marked failing"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<Value>> {
        self.check_available()?;
        Ok(self.data.lock().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: Value) -> Result<()> {
        self.check_available()?;
        self.data.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}
