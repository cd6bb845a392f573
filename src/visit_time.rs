/// Visit timestamp formatting
use crate::error::RecoveryError;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeDisplay {
    /// `YYYY-MM-DD HH:MM:SS` in the zone of `now`
    Absolute,
    /// "3 hours ago"
    Relative,
}

/// Format a chrome.history timestamp (milliseconds since the epoch).
///
/// `now` supplies both the reference instant for relative labels and the
/// time zone for absolute ones.
pub fn format_visit_time<Tz>(time_ms: f64, display: TimeDisplay, now: &DateTime<Tz>) -> Result<String, RecoveryError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if !time_ms.is_finite() {
        return Err(RecoveryError::InvalidTimestamp(time_ms));
    }

    let visited = DateTime::from_timestamp_millis(time_ms as i64)
        .ok_or(RecoveryError::InvalidTimestamp(time_ms))?;

    Ok(match display {
        TimeDisplay::Absolute => visited
            .with_timezone(&now.timezone())
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        TimeDisplay::Relative => {
            relative_label((now.timestamp_millis() - visited.timestamp_millis()) / 1000)
        }
    })
}

fn relative_label(elapsed_secs: i64) -> String {
    // Visits in the future (clock skew) read as "just now"
    if elapsed_secs < MINUTE {
        return "just now".to_string();
    }

    let (count, unit) = if elapsed_secs < HOUR {
        (elapsed_secs / MINUTE, "minute")
    } else if elapsed_secs < DAY {
        (elapsed_secs / HOUR, "hour")
    } else if elapsed_secs < 30 * DAY {
        (elapsed_secs / DAY, "day")
    } else if elapsed_secs < 365 * DAY {
        (elapsed_secs / (30 * DAY), "month")
    } else {
        (elapsed_secs / (365 * DAY), "year")
    };

    format!("{} {}{} ago", count, unit, if count == 1 { "" } else { "s" })
}
