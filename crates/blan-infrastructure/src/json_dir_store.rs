//! Directory-backed JSON key-value store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use blan_core::error::{BlanError, Result};
use blan_core::store::KeyValueStore;

use crate::paths::BlanPaths;

/// A [`KeyValueStore`] persisting one JSON document per key.
///
/// Directory structure:
/// ```text
/// base_dir/
/// ├── blan_jobs.json
/// ├── blan_chat_messages.json
/// └── ...
/// ```
///
/// Writes are whole-file replacements (last write wins); there are no
/// transactions or locks. A missing file reads as `None`, never an error.
pub struct JsonDirStore {
    base_dir: PathBuf,
}

impl JsonDirStore {
    /// Creates a store at the platform default data location.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(BlanPaths::store_dir()?))
    }

    /// Creates a store rooted at a custom directory (used in tests).
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The directory documents are stored under.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for JsonDirStore {
    async fn read(&self, key: &str) -> Result<Option<Value>> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(BlanError::storage_unavailable(format!(
                    "failed to read {:?}: {}",
                    path, e
                )));
            }
        };
        let value = serde_json::from_str(&content)
            .map_err(|e| BlanError::malformed(key, e.to_string()))?;
        Ok(Some(value))
    }

    async fn write(&self, key: &str, value: Value) -> Result<()> {
        fs::create_dir_all(&self.base_dir).await.map_err(|e| {
            BlanError::storage_unavailable(format!(
                "failed to create {:?}: {}",
                self.base_dir, e
            ))
        })?;
        let path = self.path_for(key);
        let serialized = serde_json::to_string(&value)?;
        fs::write(&path, serialized).await.map_err(|e| {
            BlanError::storage_unavailable(format!("failed to write {:?}: {}", path, e))
        })?;
        tracing::debug!(key, path = ?path, "document written");
        Ok(())
    }
}
