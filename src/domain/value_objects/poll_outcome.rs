//! Result of one poll

use serde::Serialize;

/// What a poll reports back to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PollOutcome {
    /// Something under the watch root changed since the last poll
    Change,
    /// Nothing changed (or this poll only built the baseline)
    NoChange,
}

impl PollOutcome {
    /// Wire form of the outcome: `"1"` or `"0"`
    pub fn as_body(&self) -> &'static str {
        match self {
            PollOutcome::Change => "1",
            PollOutcome::NoChange => "0",
        }
    }

    pub fn is_change(&self) -> bool {
        matches!(self, PollOutcome::Change)
    }
}

impl std::fmt::Display for PollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_body())
    }
}
