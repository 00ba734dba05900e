use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// TimeOfDay
// ---------------------------------------------------------------------------

/// A wall-clock time expressed as minutes since midnight.
///
/// Normally in `0..1440`, but schedule arithmetic may push a slot past the
/// end of the day; formatting keeps counting hours past 23 rather than
/// wrapping around midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

/// A time string did not parse as `HH:MM` with hours 0-23 and minutes 0-59.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time '{0}' -- expected HH:MM with hours 00-23 and minutes 00-59")]
pub struct TimeParseError(pub String);

impl TimeOfDay {
    pub fn from_minutes(mins: u32) -> Self {
        TimeOfDay(mins)
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    /// Parse a strict `HH:MM` time. Both fields must be two digits; range
    /// checking is delegated to chrono.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(TimeParseError(s.to_string()));
        }
        let t = NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|_| TimeParseError(s.to_string()))?;
        Ok(TimeOfDay(t.hour() * 60 + t.minute()))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Add<u32> for TimeOfDay {
    type Output = TimeOfDay;

    fn add(self, mins: u32) -> TimeOfDay {
        TimeOfDay(self.0 + mins)
    }
}

// ---------------------------------------------------------------------------
// Serde: "HH:MM" on the wire
// ---------------------------------------------------------------------------

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
