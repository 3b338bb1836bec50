//! Timestamp formatting shared by the CSV file and the JSON responses.
//!
//! Rows are written as `YYYY-MM-DD HH:MM:SS`. Parsing is lenient and also
//! accepts the ISO `T` separator and fractional seconds.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

/// Canonical timestamp layout.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ACCEPTED_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Format a timestamp in the canonical layout.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp, returning `None` when no accepted layout matches.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Serde adapter: `#[serde(with = "timestamp")]`.
pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(ts))
}

/// Serde adapter: `#[serde(with = "timestamp")]`.
pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_format_canonical() {
        assert_eq!(format_timestamp(&sample()), "2024-03-05 14:30:00");
    }

    #[test]
    fn test_parse_canonical() {
        assert_eq!(parse_timestamp("2024-03-05 14:30:00"), Some(sample()));
    }

    #[test]
    fn test_parse_iso_separator() {
        assert_eq!(parse_timestamp("2024-03-05T14:30:00"), Some(sample()));
    }

    #[test]
    fn test_parse_fractional_seconds() {
        assert_eq!(parse_timestamp("2024-03-05 14:30:00.000000"), Some(sample()));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_timestamp("  2024-03-05 14:30:00 "), Some(sample()));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp(""), None);
    }
}
