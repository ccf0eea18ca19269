//! Calendar date helpers.

use chrono::{DateTime, Local, NaiveDate};

/// Today's date in the server's local time zone.
///
/// Services take "today" as an argument; only controllers call this.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses an event date given either as `YYYY-MM-DD` or as an RFC 3339 timestamp.
///
/// For a timestamp the date part as written is used, ignoring the offset, so
/// "2026-03-01T23:30:00-05:00" is 1 March.
///
/// # Returns
/// - `Some(NaiveDate)` - Parsed calendar date
/// - `None` - Neither format matched
pub fn parse_event_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}
