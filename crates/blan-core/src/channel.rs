//! Typed channels over the key-value store.
//!
//! A channel is one named, independently persisted slot in the store,
//! holding a single logical collection (jobs, chat messages, ...). Each
//! consumer goes through a [`StateChannel`] rather than touching raw keys.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::store::KeyValueStore;

/// Fixed application prefix for every persisted key, so unrelated data in
/// the same physical store is never touched.
pub const KEY_PREFIX: &str = "blan_";

/// Well-known channel names.
pub mod names {
    pub const NOTIFICATIONS: &str = "notifications";
    pub const CHAT_MESSAGES: &str = "chat_messages";
    pub const JOBS: &str = "jobs";
    pub const LEDGER: &str = "ledger";
    pub const SECURITY_LOGS: &str = "security_logs";
    pub const PROFILE: &str = "profile";
}

/// An entry that carries the identity of the actor who authored it.
///
/// Used by the polling synchronizer to decide whether a freshly appeared
/// entry originated from the local actor or from elsewhere.
pub trait Authored {
    fn author_id(&self) -> &str;
}

/// A typed accessor over one named slot in the key-value store.
///
/// Concurrent writers within one process share only the last-known value
/// each caller holds; the last `save` wins and can silently overwrite a
/// concurrent writer's append. Each view is assumed to be the sole writer
/// of its channel except the documented cross-posting paths, which must
/// load-then-append rather than overwrite.
pub struct StateChannel<T> {
    name: String,
    key: String,
    store: Arc<dyn KeyValueStore>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for StateChannel<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            key: self.key.clone(),
            store: Arc::clone(&self.store),
            _marker: PhantomData,
        }
    }
}

impl<T> StateChannel<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a channel over `name`, backed by the given store.
    pub fn new(name: impl Into<String>, store: Arc<dyn KeyValueStore>) -> Self {
        let name = name.into();
        let key = format!("{}{}", KEY_PREFIX, name);
        Self {
            name,
            key,
            store,
            _marker: PhantomData,
        }
    }

    /// The channel's logical name (without the key prefix).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Loads the stored collection, or `default` if the key is absent, the
    /// stored JSON is malformed, or the medium is unavailable.
    ///
    /// Repeated loads of a never-written channel are stable: they return
    /// the supplied default every time.
    pub async fn load(&self, default: T) -> T {
        match self.store.read(&self.key).await {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!(channel = %self.name, error = %e, "malformed stored data, using default");
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                tracing::warn!(channel = %self.name, error = %e, "storage read failed, using default");
                default
            }
        }
    }

    /// Persists `value` as the channel's new content (last write wins).
    ///
    /// A [`StorageUnavailable`] result is non-fatal: the caller keeps its
    /// in-memory state for the session and continues.
    ///
    /// [`StorageUnavailable`]: crate::BlanError::StorageUnavailable
    pub async fn save(&self, value: &T) -> Result<()> {
        let serialized = serde_json::to_value(value)?;
        self.store.write(&self.key, serialized).await
    }
}
