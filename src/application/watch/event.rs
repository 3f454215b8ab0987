//! Watch event types and options

use std::time::Duration;

/// Delay before the first poll, in milliseconds
pub const INITIAL_DELAY_MS: u64 = 1000;

/// Delay between polls, in milliseconds
pub const REFRESH_INTERVAL_MS: u64 = 400;

/// Watch options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchOptions {
    /// Wait before the first poll
    pub initial_delay: Duration,
    /// Wait between polls
    pub interval: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(INITIAL_DELAY_MS),
            interval: Duration::from_millis(REFRESH_INTERVAL_MS),
        }
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted {
        root: String,
    },
    Changed {
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },
    Error {
        message: String,
    },
    Shutdown,
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
