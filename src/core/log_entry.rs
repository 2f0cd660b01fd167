//! Log entry structure

use super::formatter::format_template;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Local};
use std::fmt::Display;

/// One log call, captured on the producer thread
///
/// The body is escaped on construction, so every entry renders as one line.
#[derive(Debug, Clone)]
pub struct LogEntry {
    level: LogLevel,
    message: String,
    timestamp: DateTime<Local>,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines with the two characters `\n` so every record
    /// stays on exactly one line.
    fn sanitize_message(message: &str) -> String {
        message.replace('\n', "\\n")
    }

    pub fn new(level: LogLevel, message: impl AsRef<str>) -> Self {
        Self {
            level,
            message: Self::sanitize_message(message.as_ref()),
            timestamp: Local::now(),
        }
    }

    /// Capture an entry whose body is `template` with `args` substituted
    pub fn formatted(level: LogLevel, template: &str, args: &[&dyn Display]) -> Self {
        Self::new(level, format_template(template, args))
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// The escaped message body
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Render the final line: `[LEVEL] TIMESTAMP: body`, without separator
    pub fn render(&self, timestamp_format: &TimestampFormat) -> String {
        format!(
            "[{}] {}: {}",
            self.level,
            timestamp_format.format(&self.timestamp),
            self.message
        )
    }
}
