//! Runtime configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_matcher_timeout_ms() -> u64 {
    8000
}

fn default_bot_reply_delay_ms() -> u64 {
    2000
}

/// Tunable knobs for the state core.
///
/// Loaded from `config.toml` by the infrastructure layer; every field has
/// a default so an absent or partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Interval between polling synchronizer ticks.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Hard timeout on every skill-matcher call.
    #[serde(default = "default_matcher_timeout_ms")]
    pub matcher_timeout_ms: u64,

    /// Delay before the Neighborhood Bot auto-reply is appended.
    #[serde(default = "default_bot_reply_delay_ms")]
    pub bot_reply_delay_ms: u64,

    /// Override for the on-disk store directory. None means the platform
    /// data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            matcher_timeout_ms: default_matcher_timeout_ms(),
            bot_reply_delay_ms: default_bot_reply_delay_ms(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn matcher_timeout(&self) -> Duration {
        Duration::from_millis(self.matcher_timeout_ms)
    }

    pub fn bot_reply_delay(&self) -> Duration {
        Duration::from_millis(self.bot_reply_delay_ms)
    }
}
