//! Timestamp normalisation for `datetime` and `date` objects
//!
//! All timestamp parsing goes through [`normalize`], the one place where an
//! unparseable value becomes an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use thiserror::Error;

/// Timestamp errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// Value is not a recognizable date or date-time
    #[error("Invalid timestamp: {0}")]
    Invalid(String),
}

pub type TimestampResult<T> = Result<T, TimestampError>;

/// Naive date-time layouts, interpreted as UTC
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a timestamp into a UTC date-time
///
/// Accepts RFC 3339 with any offset, naive date-times (taken as UTC) and
/// bare `YYYY-MM-DD` dates (UTC midnight).
pub fn parse(value: &str) -> TimestampResult<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| TimestampError::Invalid(value.to_string()))
}

/// Normalize to `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn normalize(value: &str) -> TimestampResult<String> {
    parse(value).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Normalize to the UTC calendar date `YYYY-MM-DD`
pub fn normalize_date(value: &str) -> TimestampResult<String> {
    parse(value).map(|dt| dt.format("%Y-%m-%d").to_string())
}
