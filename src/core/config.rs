//! Serializable logger configuration

use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Plain configuration value for [`Logger::from_config`](super::Logger::from_config)
///
/// # Example
///
/// ```
/// use oak_logger::{LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::new("app.log").with_min_level(LogLevel::Info);
/// assert_eq!(config.min_level, LogLevel::Info);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// File the logger appends to
    pub path: PathBuf,
    #[serde(default)]
    pub min_level: LogLevel,
    #[serde(default)]
    pub timestamp_format: TimestampFormat,
}

impl LoggerConfig {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            min_level: LogLevel::default(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}
