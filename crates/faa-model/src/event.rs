//! Canonical airport event record.

use serde::{Deserialize, Serialize};

use crate::kind::EventKind;

/// Airport code used when no identifier field is present.
pub const UNKNOWN_AIRPORT: &str = "UNK";

/// One airport's active event, flattened from a feed delay-type block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub airport: String,
    /// Average delay in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_delay: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl EventRecord {
    /// Create a record with only the category and airport set.
    pub fn new(kind: EventKind, airport: impl Into<String>) -> Self {
        Self {
            kind,
            airport: airport.into(),
            avg_delay: None,
            trend: None,
            reason: None,
            start: None,
            end: None,
        }
    }

    #[must_use]
    pub fn with_avg_delay(mut self, minutes: Option<u64>) -> Self {
        self.avg_delay = minutes;
        self
    }

    #[must_use]
    pub fn with_trend(mut self, trend: Option<String>) -> Self {
        self.trend = trend;
        self
    }

    #[must_use]
    pub fn with_reason(mut self, reason: Option<String>) -> Self {
        self.reason = reason;
        self
    }

    #[must_use]
    pub fn with_window(mut self, start: Option<String>, end: Option<String>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Average delay used for ordering; a missing delay counts as zero.
    pub fn severity(&self) -> u64 {
        self.avg_delay.unwrap_or(0)
    }

    /// Identity used for de-duplication: (type, airport, reason or "").
    pub fn dedupe_key(&self) -> (&str, &str, &str) {
        (
            self.kind.as_str(),
            self.airport.as_str(),
            self.reason.as_deref().unwrap_or(""),
        )
    }
}
