//! Timestamp helpers.

use chrono::Utc;

/// Current Unix timestamp in milliseconds, the unit every stored record
/// uses for its `timestamp` field.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
