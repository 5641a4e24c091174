//! Wit.ai timestamps
//!
//! The API sends timestamps as `2018-07-29T18:15:34-0700` or
//! `2018-01-01T00:00:01Z`: seconds precision, and an offset that is either
//! `Z` or a colon-less `±HHMM`. Anything else is rejected.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of the `YYYY-MM-DDTHH:MM:SS` part
const DATETIME_LEN: usize = 19;

/// Timestamp parse failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp {input:?}: {reason}")]
pub struct TimeParseError {
    input: String,
    reason: &'static str,
}

impl TimeParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// A point in time in the API's fixed textual layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WitTime(DateTime<FixedOffset>);

impl WitTime {
    /// Strictly parse the API layout
    pub fn parse(input: &str) -> Result<Self, TimeParseError> {
        let bytes = input.as_bytes();
        if bytes.len() <= DATETIME_LEN {
            return Err(TimeParseError::new(input, "too short"));
        }

        let layout_ok = bytes[..DATETIME_LEN].iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b'T',
            13 | 16 => *b == b':',
            _ => b.is_ascii_digit(),
        });
        if !layout_ok {
            return Err(TimeParseError::new(input, "expected YYYY-MM-DDTHH:MM:SS"));
        }

        // chrono reads :60 as a leap second; the API layout stops at :59
        if bytes[17] > b'5' {
            return Err(TimeParseError::new(input, "second out of range"));
        }

        // The first 19 bytes are ASCII, so this is a char boundary
        let (datetime, zone) = input.split_at(DATETIME_LEN);
        let naive = NaiveDateTime::parse_from_str(datetime, "%Y-%m-%dT%H:%M:%S")
            .map_err(|_| TimeParseError::new(input, "date or time out of range"))?;

        let offset_secs = parse_offset(zone).ok_or_else(|| {
            TimeParseError::new(input, "expected offset Z or +HHMM/-HHMM")
        })?;
        let offset = FixedOffset::east_opt(offset_secs)
            .ok_or_else(|| TimeParseError::new(input, "offset out of range"))?;

        offset
            .from_local_datetime(&naive)
            .single()
            .map(WitTime)
            .ok_or_else(|| TimeParseError::new(input, "ambiguous local time"))
    }

    /// Render back into the API layout
    pub fn format(&self) -> String {
        if self.0.offset().local_minus_utc() == 0 {
            self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
        } else {
            self.0.format("%Y-%m-%dT%H:%M:%S%z").to_string()
        }
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}

/// `Z` or `±HHMM`, returned as seconds east of UTC
fn parse_offset(zone: &str) -> Option<i32> {
    if zone == "Z" {
        return Some(0);
    }

    let bytes = zone.as_bytes();
    if bytes.len() != 5 || !bytes[1..].iter().all(u8::is_ascii_digit) {
        return None;
    }

    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digit = |i: usize| i32::from(bytes[i] - b'0');
    let hours = digit(1) * 10 + digit(2);
    let minutes = digit(3) * 10 + digit(4);
    if minutes >= 60 {
        return None;
    }

    Some(sign * (hours * 3600 + minutes * 60))
}

impl From<DateTime<FixedOffset>> for WitTime {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self(value)
    }
}

impl From<DateTime<Utc>> for WitTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.fixed_offset())
    }
}

impl FromStr for WitTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl Serialize for WitTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for WitTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        WitTime::parse(&raw).map_err(de::Error::custom)
    }
}
