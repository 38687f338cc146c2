//! Lenient timestamp parsing for backend date strings.
//!
//! The backend is not consistent about timestamp shape: RFC 3339, naive
//! `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and bare dates all occur.
//! Anything that does not parse is treated as the Unix epoch so it sorts as
//! the oldest entry.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a backend timestamp into UTC. Naive values are taken as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse the calendar date part of a backend timestamp.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let head = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Milliseconds since the Unix epoch, or `0` when absent or unparseable.
#[must_use]
pub fn epoch_millis_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(parse_timestamp).map_or(0, |ts| ts.timestamp_millis())
}

/// Short `DD/MM/YYYY HH:MM` rendering for tables; the raw string when unparseable.
#[must_use]
pub fn display_timestamp(raw: Option<&str>) -> String {
    match raw {
        None => "—".to_owned(),
        Some(value) => parse_timestamp(value)
            .map_or_else(|| value.to_owned(), |ts| ts.format("%d/%m/%Y %H:%M").to_string()),
    }
}
