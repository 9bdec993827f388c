//! Timestamp type for issuance times.
//!
//! Timestamps are Unix epoch seconds (UTC), set once by the issuance process
//! and immutable afterwards.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs();
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Format as a human-readable UTC date, e.g. "Jan 10, 2024".
    pub fn to_display_date(&self) -> String {
        match DateTime::from_timestamp(self.0 as i64, 0) {
            Some(dt) => dt.format("%b %-d, %Y").to_string(),
            None => "N/A".to_string(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
