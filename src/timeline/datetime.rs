//! Date normalization for the loose shapes the external store emits.
//!
//! Date fields arrive in several shapes depending on which client wrote the
//! record: a bare epoch-millisecond number, a `{seconds}` wrapper object, or
//! a date-time string. [`RawDate`] closes those shapes into one sum type and
//! [`RawDate::normalize`] is the single place in the crate that turns them
//! into a canonical instant. Everything else treats `None` as "drop the
//! record".

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// String formats accepted by the normalizer, tried in order after RFC 3339.
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

// ============================================================================
// Raw Date Input
// ============================================================================

/// A date value as it appears in a raw domain record.
///
/// Untagged: deserialization picks the first matching variant, so a JSON
/// number becomes [`RawDate::Millis`], a `{"seconds": ...}` map becomes
/// [`RawDate::Seconds`], a string becomes [`RawDate::Text`], and any other
/// shape falls through to [`RawDate::Other`] (normalized to unparseable
/// rather than failing the whole record).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RawDate {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// Server-timestamp wrapper convention: seconds since the Unix epoch.
    Seconds { seconds: i64 },
    /// A date or date-time string.
    Text(String),
    /// Anything else; never parseable.
    Other(serde_json::Value),
}

impl RawDate {
    /// Convert to a canonical instant, or `None` if the value cannot be
    /// interpreted. Exhaustive over the input shapes; never panics.
    pub fn normalize(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Millis(ms) => DateTime::from_timestamp_millis(*ms),
            Self::Seconds { seconds } => DateTime::from_timestamp(*seconds, 0),
            Self::Text(text) => parse_text(text),
            Self::Other(_) => None,
        }
    }
}

/// Normalize an optional raw date field. Absent fields are unparseable.
pub fn normalize(value: Option<&RawDate>) -> Option<DateTime<Utc>> {
    value.and_then(RawDate::normalize)
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN)));
        }
    }
    None
}

// ============================================================================
// Clock Time
// ============================================================================

static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("valid clock regex"));

/// A wall-clock time of day, parsed from `"H:MM"` or `"HH:MM"` labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    /// Create a clock time, clamping out-of-range components.
    pub fn new(hour: u32, minute: u32) -> Self {
        Self {
            hour: hour.min(23),
            minute: minute.min(59),
        }
    }

    /// Parse a `"H:MM"` / `"HH:MM"` label. Returns `None` for anything else,
    /// including out-of-range components.
    pub fn parse(label: &str) -> Option<Self> {
        let captures = CLOCK_RE.captures(label.trim())?;
        let hour: u32 = captures.get(1)?.as_str().parse().ok()?;
        let minute: u32 = captures.get(2)?.as_str().parse().ok()?;
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// The clock time of a canonical instant.
    pub fn of(instant: &DateTime<Utc>) -> Self {
        Self {
            hour: instant.hour(),
            minute: instant.minute(),
        }
    }

    /// Minutes since midnight.
    pub fn minutes_from_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
