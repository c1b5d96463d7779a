//! Timestamp helpers for stored RFC 3339 strings.

use chrono::{DateTime, Local, Utc};

use super::DbError;

/// Current time as stored in the database.
pub fn now_string() -> String {
    Utc::now().to_rfc3339()
}

/// Parse a stored timestamp.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DbError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::InvalidData(format!("bad timestamp {value:?}: {e}")))
}

/// Format a timestamp in local time for display.
pub fn format_local(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}
