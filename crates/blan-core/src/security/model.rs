//! Security alert domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::now_millis;

/// Retention cap for the security log. Oldest entries beyond the cap are
/// discarded on insert; storage order is newest-first.
pub const MAX_ALERTS: usize = 50;

/// Severity of a camera alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// One alert raised by the shared camera cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityAlert {
    pub id: String,
    pub camera: String,
    pub timestamp: i64,
    pub message: String,
    pub severity: Severity,
}

impl SecurityAlert {
    /// Builds an alert with a fresh id and the current timestamp.
    pub fn new(camera: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: format!("a-{}", Uuid::new_v4()),
            camera: camera.into(),
            timestamp: now_millis(),
            message: message.into(),
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serialization() {
        let alert = SecurityAlert::new("Main Entrance", "Motion detected", Severity::Warning);
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json.get("severity"), Some(&serde_json::json!("WARNING")));
    }
}
