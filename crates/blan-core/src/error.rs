//! Error types for the B-LAN state core.

use thiserror::Error;

/// A shared error type for the entire B-LAN core.
///
/// The taxonomy follows the system's recovery rules: storage and data errors
/// are absorbed with defaults at the channel layer, collaborator errors
/// degrade to empty results, and nothing in this enum is ever allowed to
/// crash the process or corrupt a channel.
#[derive(Error, Debug, Clone)]
pub enum BlanError {
    /// The persistence medium is unavailable or full. Callers must treat
    /// this as non-fatal; state stays in memory for the session.
    #[error("Storage unavailable: {message}")]
    StorageUnavailable { message: String },

    /// Stored JSON failed to parse. Treated identically to "key absent".
    #[error("Malformed data in channel '{channel}': {message}")]
    MalformedData { channel: String, message: String },

    /// The external skill-matching collaborator failed or timed out.
    #[error("Collaborator error: {0}")]
    Collaborator(String),

    /// Internal error (should not happen in normal operation).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlanError {
    /// Creates a StorageUnavailable error.
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
        }
    }

    /// Creates a MalformedData error.
    pub fn malformed(channel: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedData {
            channel: channel.into(),
            message: message.into(),
        }
    }

    /// Creates a Collaborator error.
    pub fn collaborator(message: impl Into<String>) -> Self {
        Self::Collaborator(message.into())
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a StorageUnavailable error.
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable { .. })
    }

    /// Check if this is a MalformedData error.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedData { .. })
    }
}

impl From<std::io::Error> for BlanError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageUnavailable {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for BlanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization failed: {}", err))
    }
}

/// A type alias for `Result<T, BlanError>`.
pub type Result<T> = std::result::Result<T, BlanError>;
