//! Logging macros for ergonomic template logging.
//!
//! The macros take a logger, a `{}` template and any number of arguments
//! implementing [`Display`](std::fmt::Display). Arguments are borrowed, never
//! moved, and substituted by [`format_template`](crate::format_template).
//!
//! # Examples
//!
//! ```
//! use oak_logger::prelude::*;
//! use oak_logger::{info, warning};
//!
//! let logger = Logger::with_sink(MemorySink::new()).unwrap();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! let user_id = 42;
//! let action = String::from("login");
//! warning!(logger, "User {} performed {} twice", user_id, action);
//! # logger.shutdown().unwrap();
//! ```

/// Log a template at an explicit level.
///
/// # Examples
///
/// ```
/// # use oak_logger::prelude::*;
/// # let logger = Logger::with_sink(MemorySink::new()).unwrap();
/// use oak_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $level,
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use oak_logger::prelude::*;
/// # let logger = Logger::with_sink(MemorySink::new()).unwrap();
/// use oak_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use oak_logger::prelude::*;
/// # let logger = Logger::with_sink(MemorySink::new()).unwrap();
/// use oak_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
