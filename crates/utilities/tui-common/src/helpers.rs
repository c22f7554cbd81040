//! Helper functions for formatting data in the TUI.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};

/// Shown for a timestamp that cannot be interpreted as an instant.
pub const INVALID_DATE: &str = "Invalid Date";

/// Display format for record timestamps.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Naive date-time layouts accepted after RFC 3339.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Truncate a URL to a maximum length for display.
///
/// If the URL is longer than `max_len` characters, it is cut and "..." is
/// appended.
///
/// # Examples
///
/// ```
/// use logscope_tui_common::truncate_url;
///
/// let url = "http://localhost:5005/api/search";
/// assert_eq!(truncate_url(url, 16), "http://localhost...");
/// ```
pub fn truncate_url(url: &str, max_len: usize) -> String {
    if url.chars().count() <= max_len {
        url.to_string()
    } else {
        format!("{}...", url.chars().take(max_len).collect::<String>())
    }
}

/// Interpret a record timestamp as an instant in `tz`.
///
/// Accepts RFC 3339 (with `Z` or an offset), naive ISO-8601 date-times, which
/// are read as wall-clock time in `tz`, and bare dates, which are read as UTC
/// midnight. A wall-clock time skipped by a forward offset change is read with
/// the offset in force before the change, so it lands after the jump.
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(tz));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return tz.from_local_datetime(&naive).earliest().or_else(|| resolve_gap(&naive, tz));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

/// Read a wall-clock time that does not exist in `tz` with the offset in force
/// a day earlier.
fn resolve_gap<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> Option<DateTime<Tz>> {
    let before = naive.checked_sub_signed(TimeDelta::days(1))?;
    let offset = tz.offset_from_utc_datetime(&before).fix();
    let utc = naive.checked_sub_signed(TimeDelta::seconds(offset.local_minus_utc().into()))?;
    Some(tz.from_utc_datetime(&utc))
}

/// Format a record timestamp as `YYYY-MM-DD HH:MM:SS` in `tz`.
///
/// Returns [`INVALID_DATE`] when the text is not a recognizable instant.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    parse_timestamp(raw, tz)
        .map_or_else(|| INVALID_DATE.to_string(), |t| t.format(TIMESTAMP_FORMAT).to_string())
}

/// Format a record timestamp in the viewer's local time zone.
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}
