use chrono::{DateTime, FixedOffset, Utc};

/// Formats a record timestamp for display in the given offset
///
/// Unparsable timestamps are shown as stored.
pub fn format_timestamp(timestamp: &str, offset: &FixedOffset) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt
            .with_timezone(offset)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Formats how long ago `past` was, relative to `now`
///
/// Examples:
/// - under a minute (or in the future): "just now"
/// - 1 minute: "1 minute ago"
/// - 5 minutes: "5 minutes ago"
/// - 2 hours: "2 hours ago"
/// - 1 day: "yesterday"
/// - 3 days: "3 days ago"
/// - 30 days or more: "on 2025-12-10"
pub fn format_time_since(past: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(past);

    if duration.num_seconds() < 60 {
        "just now".to_string()
    } else if duration.num_minutes() < 60 {
        let mins = duration.num_minutes();
        format!("{} minute{} ago", mins, if mins == 1 { "" } else { "s" })
    } else if duration.num_hours() < 24 {
        let hours = duration.num_hours();
        format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
    } else if duration.num_days() == 1 {
        "yesterday".to_string()
    } else if duration.num_days() < 30 {
        format!("{} days ago", duration.num_days())
    } else {
        format!("on {}", past.format("%Y-%m-%d"))
    }
}

/// [`format_time_since`] for a stored timestamp string; `None` if it does not parse
pub fn format_timestamp_since(timestamp: &str, now: DateTime<Utc>) -> Option<String> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| format_time_since(dt.with_timezone(&Utc), now))
}
