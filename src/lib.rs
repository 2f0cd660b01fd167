//! # Oak Logger
//!
//! A minimal asynchronous file logger. Application threads format their
//! message and push it onto a queue; a single background worker writes the
//! queued lines to the destination in order, so log calls never wait on disk
//! I/O.
//!
//! ## Features
//!
//! - **Non-blocking calls**: formatting happens on the caller, I/O on the worker
//! - **Ordered output**: lines are written in the order they were enqueued
//! - **Graceful teardown**: everything logged before shutdown is drained
//! - **Thread safe**: share one `Logger` between any number of threads
//!
//! ```no_run
//! use oak_logger::prelude::*;
//! use oak_logger::info;
//!
//! let logger = Logger::new("log.txt")?;
//! info!(logger, "User {} performed {} in {} seconds.", 42, "login", 3.5);
//! logger.shutdown()?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        format_template, LogEntry, LogLevel, LogQueue, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, Result, Sink, TimestampFormat, WriteErrorCallback,
    };
    pub use crate::sinks::{FileSink, MemorySink};
}

pub use core::{
    format_template, LogEntry, LogLevel, LogQueue, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, Result, Sink, TimestampFormat, WriteErrorCallback,
};
pub use sinks::{FileSink, MemorySink};
