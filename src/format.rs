//! Display Formatting
//!
//! Timestamp rendering for server-provided date strings.

use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a server timestamp for tables and cards.
///
/// Accepts RFC 3339 and naive ISO-8601 (the backend emits both); anything
/// else is shown as received.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}

/// Like [`format_timestamp`] with a placeholder for missing values
pub fn format_optional(raw: Option<&str>) -> String {
    raw.map(format_timestamp).unwrap_or_else(|| "-".to_string())
}
