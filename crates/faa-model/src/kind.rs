//! Event categories reported by the NAS status feed.
//!
//! The feed names its delay-type blocks in either singular or plural form
//! ("Ground Stops", "Ground Stop"). Both collapse to one canonical
//! [`EventKind`]; names outside the table are carried through verbatim.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Label used when a delay-type block carries no `Name`.
pub const UNNAMED_EVENT_LABEL: &str = "Event";

/// Feed block names and the canonical label each one maps to.
///
/// Lookup is exact and case-sensitive.
pub const TYPE_ALIASES: &[(&str, &str)] = &[
    ("Ground Delay Programs", "Ground Delay Program"),
    ("Ground Delay Program", "Ground Delay Program"),
    ("Ground Stops", "Ground Stop"),
    ("Ground Stop", "Ground Stop"),
    ("Airport Closures", "Airport Closure"),
    ("Airport Closure", "Airport Closure"),
    ("Departure Delays", "Departure Delay"),
    ("Departure Delay", "Departure Delay"),
    ("Arrival Delays", "Arrival Delay"),
    ("Arrival Delay", "Arrival Delay"),
    ("Deicing", "Deicing"),
];

/// Normalized event category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum EventKind {
    GroundStop,
    GroundDelayProgram,
    AirportClosure,
    DepartureDelay,
    ArrivalDelay,
    Deicing,
    /// Unrecognized block name, or [`UNNAMED_EVENT_LABEL`] when the block had none.
    Other(String),
}

impl EventKind {
    /// Resolve a raw feed block name through [`TYPE_ALIASES`].
    ///
    /// A missing or empty name yields the generic "Event" kind; an unknown
    /// name is passed through unchanged.
    pub fn from_feed_name(name: Option<&str>) -> Self {
        let Some(name) = name.filter(|name| !name.is_empty()) else {
            return Self::Other(UNNAMED_EVENT_LABEL.to_string());
        };
        TYPE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map_or_else(|| Self::Other(name.to_string()), |(_, label)| Self::from_label(label))
    }

    /// Build a kind from its display label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Ground Stop" => Self::GroundStop,
            "Ground Delay Program" => Self::GroundDelayProgram,
            "Airport Closure" => Self::AirportClosure,
            "Departure Delay" => Self::DepartureDelay,
            "Arrival Delay" => Self::ArrivalDelay,
            "Deicing" => Self::Deicing,
            other => Self::Other(other.to_string()),
        }
    }

    /// Display label, as used for grouping and count badges.
    pub fn as_str(&self) -> &str {
        match self {
            Self::GroundStop => "Ground Stop",
            Self::GroundDelayProgram => "Ground Delay Program",
            Self::AirportClosure => "Airport Closure",
            Self::DepartureDelay => "Departure Delay",
            Self::ArrivalDelay => "Arrival Delay",
            Self::Deicing => "Deicing",
            Self::Other(label) => label,
        }
    }

    /// Returns true for the categories in [`TYPE_ALIASES`].
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl From<String> for EventKind {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        kind.as_str().to_string()
    }
}
