//! Configuration service implementation.
//!
//! Loads the runtime configuration from `~/.config/blan/config.toml`,
//! falling back to defaults when the file is absent or unreadable.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use blan_core::config::Config;

use crate::paths::BlanPaths;

/// Configuration service that loads and caches the runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<Config>>>,
    /// Override path for tests; None means the platform config file.
    config_path: Option<PathBuf>,
}

impl ConfigService {
    /// Creates a new ConfigService. The configuration is loaded lazily on
    /// first access.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service reading from an explicit file (used in tests).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            config_path: Some(path.into()),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Config {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_default();

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load_config(&self) -> Option<Config> {
        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => BlanPaths::config_file().ok()?,
        };
        Self::read_toml(&path)
    }

    fn read_toml(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "failed to read config file, using defaults");
                return None;
            }
        };
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "failed to parse config file, using defaults");
                None
            }
        }
    }
}
