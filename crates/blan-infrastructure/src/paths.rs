//! Unified path management for B-LAN storage and configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/blan/              # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/blan/         # Data directory
//! └── store/                   # JSON key-value documents (JsonDirStore)
//! ```

use std::path::PathBuf;

use blan_core::error::{BlanError, Result};

/// Unified path management for B-LAN.
pub struct BlanPaths;

impl BlanPaths {
    /// Returns the B-LAN configuration directory (e.g. `~/.config/blan/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("blan"))
            .ok_or_else(|| BlanError::storage_unavailable("cannot find config directory"))
    }

    /// Returns the B-LAN data directory (e.g. `~/.local/share/blan/`).
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("blan"))
            .ok_or_else(|| BlanError::storage_unavailable("cannot find data directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default directory for the JSON document store.
    pub fn store_dir() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("store"))
    }
}
