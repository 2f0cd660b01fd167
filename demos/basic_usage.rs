//! Basic usage example
//!
//! Logs a handful of messages to `log.txt` from the main thread and a few
//! worker threads, then shuts the logger down so every line is on disk.
//!
//! Run with: cargo run --example basic_usage

use oak_logger::prelude::*;
use oak_logger::{info, warning};
use std::thread;

fn main() {
    let logger = match Logger::new("log.txt") {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Failed to initialize logger: {}", e);
            std::process::exit(1);
        }
    };

    logger.info("Starting application.");

    let user_id = 42;
    let action = "login";
    let duration = 3.5;
    let world = "World";

    info!(logger, "User {} performed {} in {} seconds.", user_id, action, duration);
    info!(logger, "Hello {}", world);
    logger.info("This is a message without placeholders.");
    warning!(logger, "Multiple placeholders: {}, {}, {}.", 1, 2, 3);

    thread::scope(|scope| {
        for worker in 0..3 {
            let logger = &logger;
            scope.spawn(move || {
                info!(logger, "Worker {} finished", worker);
            });
        }
    });

    if let Err(e) = logger.shutdown() {
        eprintln!("Logger shutdown failed: {}", e);
    }

    println!(
        "Wrote {} lines to log.txt ({} failed)",
        logger.metrics().written_count(),
        logger.metrics().write_failure_count()
    );
}
