//! Per-session state
//!
//! Everything a client session keeps between two polls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ModTimeIndex;

/// State persisted for one polling client
///
/// While `has_index` is true, `mod_times` holds the baseline of the last
/// walk that did not report a change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub has_index: bool,
    #[serde(default)]
    pub mod_times: ModTimeIndex,
    /// When this session was last polled; used for idle expiry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
}

impl SessionState {
    /// A session that has not been indexed yet
    pub fn unindexed() -> Self {
        Self::default()
    }

    /// Drop the baseline so the next poll rebuilds it from scratch
    pub fn reset(&mut self) {
        self.has_index = false;
        self.mod_times.clear();
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_seen = Some(now);
    }

    /// Whether the session has been idle longer than `timeout_secs`.
    ///
    /// Sessions that were never touched do not expire.
    pub fn is_expired(&self, now: DateTime<Utc>, timeout_secs: u64) -> bool {
        match self.last_seen {
            Some(seen) if timeout_secs > 0 => {
                let idle = now.signed_duration_since(seen).num_seconds();
                idle > timeout_secs as i64
            }
            _ => false,
        }
    }
}
