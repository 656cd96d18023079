use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::server::error::booking::BookingError;

/// Parses a stay date given as `YYYY-MM-DD` (midnight UTC) or as an RFC 3339 timestamp.
///
/// # Arguments
/// - `value` - The raw date, `None` when the client omitted it
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Parsed instant
/// - `Err(BookingError::InvalidDate)` - Missing, empty or unparseable value
pub fn parse_date(value: Option<&str>) -> Result<DateTime<Utc>, BookingError> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(BookingError::InvalidDate(String::new()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| BookingError::InvalidDate(value.to_string()))
}

/// Normalizes a catalog name for uniqueness checks: lowercase, spaces and hyphens removed.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
