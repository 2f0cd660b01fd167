//! Core logger types and traits

pub mod config;
pub mod error;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod log_queue;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod timestamp;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use formatter::format_template;
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use log_queue::LogQueue;
pub use logger::{Logger, LoggerBuilder, WriteErrorCallback};
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use timestamp::TimestampFormat;
