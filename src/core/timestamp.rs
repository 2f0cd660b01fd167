//! Timestamp formatting utilities
//!
//! Log lines carry a human-readable local timestamp by default
//! (`2025-01-08 10:30:45`). Other formats are available for destinations
//! that are consumed by machines.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

const LOCAL_SECONDS: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format options for the log line prefix
///
/// # Examples
///
/// ```
/// use oak_logger::TimestampFormat;
/// use chrono::{FixedOffset, TimeZone};
///
/// let offset = FixedOffset::east_opt(2 * 3600).unwrap();
/// let at = offset.with_ymd_and_hms(2025, 1, 8, 9, 5, 3).unwrap();
/// assert_eq!(TimestampFormat::default().format(&at), "2025-01-08 09:05:03");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local time, second resolution, zero padded: `2025-01-08 10:30:45`
    #[default]
    LocalSeconds,

    /// ISO 8601 in UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 with the local offset: `2025-01-08T10:30:45+02:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Custom strftime format, rendered in local time
    ///
    /// ```
    /// use oak_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Render a timestamp according to this format
    ///
    /// Log lines pass local time; any zone renders its own wall clock.
    /// An invalid custom format string falls back to [`LocalSeconds`](Self::LocalSeconds)
    /// rather than failing the log call.
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TimestampFormat::LocalSeconds => datetime.format(LOCAL_SECONDS).to_string(),
            TimestampFormat::Iso8601 => datetime
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut rendered = String::new();
                if write!(rendered, "{}", datetime.format(format_str)).is_err() {
                    rendered = datetime.format(LOCAL_SECONDS).to_string();
                }
                rendered
            }
        }
    }

    /// Check if this is a numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::Unix)
    }
}
