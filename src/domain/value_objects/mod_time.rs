//! Modification time value object

use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Last-modified timestamp of a file, in UTC with sub-second precision.
///
/// Two values are equal only if the filesystem reported the exact same
/// instant; there is no tolerance window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModTime(DateTime<Utc>);

impl ModTime {
    /// Build from whole seconds since the Unix epoch.
    ///
    /// Out-of-range values clamp to the epoch.
    pub fn from_unix_secs(secs: i64) -> Self {
        Self(DateTime::from_timestamp(secs, 0).unwrap_or_default())
    }

    /// Seconds since the Unix epoch
    pub fn unix_secs(&self) -> i64 {
        self.0.timestamp()
    }
}

impl From<SystemTime> for ModTime {
    fn from(time: SystemTime) -> Self {
        Self(DateTime::<Utc>::from(time))
    }
}

impl From<DateTime<Utc>> for ModTime {
    fn from(time: DateTime<Utc>) -> Self {
        Self(time)
    }
}

impl fmt::Display for ModTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn from_unix_secs_round_trips_seconds() {
        assert_eq!(ModTime::from_unix_secs(100).unix_secs(), 100);
    }

    #[test]
    fn system_time_keeps_sub_second_precision() {
        let a = ModTime::from(UNIX_EPOCH + Duration::from_millis(100_250));
        let b = ModTime::from(UNIX_EPOCH + Duration::from_millis(100_500));

        assert_eq!(a.unix_secs(), b.unix_secs());
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_rfc3339() {
        assert_eq!(
            ModTime::from_unix_secs(0).to_string(),
            "1970-01-01T00:00:00+00:00"
        );
    }
}
