//! Interpretation of the `date` field.
//!
//! Shared by validation and by the date sort on listing, so a record that
//! passes validation always has a sort key.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a `date` value.
///
/// Strings may be a calendar date (`yyyy-mm-dd`), an RFC 3339 timestamp
/// (normalized to UTC) or a local date-time. Integer numbers are read as
/// milliseconds since the Unix epoch. Anything else is `None`.
pub fn parse_date(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_date_str(s.trim()),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.naive_utc()),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
