//! Timestamp value object.
//!
//! Records carry wall-clock date-times. Naive input stays naive; input with
//! an offset (for example JavaScript's `toISOString()` output) keeps that
//! offset and is echoed back with it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a string is not an ISO-8601 date-time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date-time '{0}': expected ISO-8601 such as 2024-10-01T09:00:00")]
pub struct TimestampParseError(pub String);

/// A date-time attached to a record, with the offset it was given in, if any.
///
/// Ordered by wall-clock reading, then by offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    wall: NaiveDateTime,
    offset_seconds: Option<i32>,
}

impl Timestamp {
    const fn naive(wall: NaiveDateTime) -> Self {
        Self {
            wall,
            offset_seconds: None,
        }
    }

    fn aware(datetime: DateTime<FixedOffset>) -> Self {
        Self {
            wall: datetime.naive_local(),
            offset_seconds: Some(datetime.offset().local_minus_utc()),
        }
    }

    /// Builds a naive timestamp from calendar parts with zero seconds.
    ///
    /// Returns `None` if the parts do not form a valid date-time.
    #[must_use]
    pub fn from_parts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .map(Self::naive)
    }

    /// Returns the current local wall-clock time, without an offset.
    ///
    /// **Note**: impure (reads the system clock).
    #[must_use]
    pub fn now() -> Self {
        Self::naive(Local::now().naive_local())
    }

    /// Returns the offset the timestamp was given in, if any.
    #[must_use]
    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset_seconds.and_then(FixedOffset::east_opt)
    }

    /// Parses an ISO-8601 date-time, with or without an offset.
    ///
    /// Seconds may be omitted (`2024-10-01T09:00`), matching what HTML
    /// `datetime-local` inputs submit.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampParseError`] when neither form matches.
    pub fn parse(value: &str) -> Result<Self, TimestampParseError> {
        let trimmed = value.trim();
        trimmed
            .parse::<NaiveDateTime>()
            .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
            .map(Self::naive)
            .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(Self::aware))
            .map_err(|_| TimestampParseError(value.to_string()))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.wall.format("%Y-%m-%dT%H:%M:%S%.f"))?;
        match self.offset() {
            None => Ok(()),
            Some(offset) if offset.local_minus_utc() == 0 => formatter.write_str("Z"),
            Some(offset) => write!(formatter, "{offset}"),
        }
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
