//! Human-relative age labels ("30분 전", "2시간 전", "3일 전").

use std::fmt;

use chrono::{DateTime, Utc};

/// Age of a timestamp, floored to the coarsest unit that keeps it below the
/// next boundary (60 minutes, then 24 hours).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recency {
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

impl Recency {
    /// Age of `timestamp` at `now`. Timestamps after `now` count as zero
    /// minutes old.
    #[must_use]
    pub fn between(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let elapsed = now.signed_duration_since(timestamp).max(chrono::Duration::zero());

        let minutes = elapsed.num_minutes();
        if minutes < 60 {
            return Self::Minutes(minutes);
        }

        let hours = elapsed.num_hours();
        if hours < 24 {
            return Self::Hours(hours);
        }

        Self::Days(elapsed.num_days())
    }
}

impl fmt::Display for Recency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes(n) => write!(f, "{n}분 전"),
            Self::Hours(n) => write!(f, "{n}시간 전"),
            Self::Days(n) => write!(f, "{n}일 전"),
        }
    }
}

/// Recency label for `timestamp` as seen at `now`.
#[must_use]
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    Recency::between(timestamp, now).to_string()
}
