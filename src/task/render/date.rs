//! Human-readable timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Output format of [`format_date`].
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder for a missing timestamp.
pub const UNKNOWN_DATE: &str = "Unknown date";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Renders an ISO-8601 timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// Offsets, including a trailing `Z`, are accepted and the wall-clock time in
/// that offset is shown. Empty input yields `"Unknown date"`; anything else
/// that does not parse is returned unchanged.
#[must_use]
pub fn format_date(iso: &str) -> String {
    if iso.is_empty() {
        return UNKNOWN_DATE.to_owned();
    }
    parse_timestamp(iso).map_or_else(
        || iso.to_owned(),
        |timestamp| timestamp.format(DISPLAY_FORMAT).to_string(),
    )
}

fn parse_timestamp(iso: &str) -> Option<NaiveDateTime> {
    if let Ok(zoned) = DateTime::parse_from_rfc3339(iso) {
        return Some(zoned.naive_local());
    }
    let local = iso.strip_suffix('Z').unwrap_or(iso);
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(local, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(local, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}
