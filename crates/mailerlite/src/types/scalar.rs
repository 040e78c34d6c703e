//! Weakly-typed scalars that tolerate MailerLite's inconsistent JSON encodings.

use std::fmt;
use std::ops::Deref;

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Format of date-time strings in MailerLite payloads (always UTC).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// [`TIMESTAMP_FORMAT`] with an optional fractional second, written only when nonzero.
const PRECISE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Unix values that land beyond this year as seconds are read as milliseconds.
const MAX_PLAUSIBLE_YEAR: i32 = 3000;

/// An integer that the API sometimes encodes as a JSON string.
///
/// Both `42` and `"42"` decode to `WeakInt(42)`. Always serializes as a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeakInt(pub i64);

impl WeakInt {
    /// The wrapped value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for WeakInt {
    fn from(value: i64) -> Self {
        WeakInt(value)
    }
}

impl From<WeakInt> for i64 {
    fn from(value: WeakInt) -> Self {
        value.0
    }
}

impl fmt::Display for WeakInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for WeakInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for WeakInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct WeakIntVisitor;

        impl Visitor<'_> for WeakIntVisitor {
            type Value = WeakInt;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or a string containing an integer")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<WeakInt, E> {
                Ok(WeakInt(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<WeakInt, E> {
                i64::try_from(v)
                    .map(WeakInt)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<WeakInt, E> {
                v.trim()
                    .parse()
                    .map(WeakInt)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(WeakIntVisitor)
    }
}

/// A point in time the API encodes either as a Unix epoch or a date string.
///
/// Accepted encodings:
///
/// - Unix seconds: `1609459200`
/// - Unix milliseconds: `1609459200000` (values that would land beyond
///   year 3000 as seconds are reinterpreted as milliseconds)
/// - A date-time string in UTC: `"2021-01-01 00:00:00"`
/// - Either epoch form wrapped in a string: `"1609459200"`
///
/// Serializes back to the date-time string form. Sub-second precision, as
/// carried by millisecond epochs, is kept as a fraction:
/// `"2021-01-01 00:00:00.123"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Interpret a Unix value as seconds, falling back to milliseconds when
    /// the result would be implausibly far in the future.
    pub fn from_unix(value: i64) -> Option<Self> {
        match DateTime::from_timestamp(value, 0) {
            Some(time) if time.year() <= MAX_PLAUSIBLE_YEAR => Some(Timestamp(time)),
            _ => DateTime::from_timestamp_millis(value).map(Timestamp),
        }
    }

    /// Parse a `YYYY-MM-DD HH:MM:SS` string, with an optional fractional
    /// second, as UTC.
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(s, PRECISE_FORMAT)
            .ok()
            .map(|naive| Timestamp(naive.and_utc()))
    }
}

impl Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(time: DateTime<Utc>) -> Self {
        Timestamp(time)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(PRECISE_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a Unix timestamp or a \"YYYY-MM-DD HH:MM:SS\" string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Timestamp, E> {
                Timestamp::from_unix(v)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Timestamp, E> {
                i64::try_from(v)
                    .ok()
                    .and_then(Timestamp::from_unix)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Timestamp, E> {
                Timestamp::parse(v)
                    .or_else(|| v.parse().ok().and_then(Timestamp::from_unix))
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_year_2021() -> Timestamp {
        Timestamp(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_weak_int_number_and_string() {
        let from_number: WeakInt = serde_json::from_str("42").unwrap();
        let from_string: WeakInt = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_number, WeakInt(42));
        assert_eq!(from_string, WeakInt(42));
    }

    #[test]
    fn test_weak_int_negative_and_padded() {
        let value: WeakInt = serde_json::from_str("\" -7 \"").unwrap();
        assert_eq!(value.get(), -7);
    }

    #[test]
    fn test_weak_int_rejects_non_numeric() {
        assert!(serde_json::from_str::<WeakInt>("\"abc\"").is_err());
        assert!(serde_json::from_str::<WeakInt>("true").is_err());
        assert!(serde_json::from_str::<WeakInt>("1.5").is_err());
    }

    #[test]
    fn test_weak_int_serializes_as_number() {
        assert_eq!(serde_json::to_string(&WeakInt(42)).unwrap(), "42");
    }

    #[test]
    fn test_timestamp_seconds() {
        let ts: Timestamp = serde_json::from_str("1609459200").unwrap();
        assert_eq!(ts, new_year_2021());
    }

    #[test]
    fn test_timestamp_milliseconds() {
        let ts: Timestamp = serde_json::from_str("1609459200000").unwrap();
        assert_eq!(ts, new_year_2021());
    }

    #[test]
    fn test_timestamp_string_format() {
        let ts: Timestamp = serde_json::from_str("\"2021-01-01 00:00:00\"").unwrap();
        assert_eq!(ts, new_year_2021());
    }

    #[test]
    fn test_timestamp_quoted_epoch() {
        let ts: Timestamp = serde_json::from_str("\"1609459200\"").unwrap();
        assert_eq!(ts, new_year_2021());
    }

    #[test]
    fn test_timestamp_year_3000_boundary() {
        // 32503680000 is 3000-01-01T00:00:00Z, still plausible as seconds.
        let ts = Timestamp::from_unix(32_503_680_000).unwrap();
        assert_eq!(ts.year(), 3000);

        // A year later is read as milliseconds instead.
        let ts = Timestamp::from_unix(32_535_216_000).unwrap();
        assert_eq!(ts.year(), 1971);
    }

    #[test]
    fn test_timestamp_rejects_other_formats() {
        assert!(serde_json::from_str::<Timestamp>("\"2021-01-01T00:00:00Z\"").is_err());
        assert!(serde_json::from_str::<Timestamp>("\"yesterday\"").is_err());
        assert!(serde_json::from_str::<Timestamp>("false").is_err());
    }

    #[test]
    fn test_timestamp_serializes_as_string() {
        let json = serde_json::to_string(&new_year_2021()).unwrap();
        assert_eq!(json, "\"2021-01-01 00:00:00\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, new_year_2021());
    }

    #[test]
    fn test_timestamp_keeps_milliseconds() {
        let ts: Timestamp = serde_json::from_str("1609459200123").unwrap();
        assert_eq!(ts.timestamp_subsec_millis(), 123);

        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2021-01-01 00:00:00.123\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn test_optional_timestamp_null() {
        let ts: Option<Timestamp> = serde_json::from_str("null").unwrap();
        assert!(ts.is_none());
    }
}
