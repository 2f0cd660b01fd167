//! Integration tests for the asynchronous file logger
//!
//! These tests verify:
//! - End-to-end file output format and ordering
//! - Fail-fast construction when the destination is unavailable
//! - Drain on explicit shutdown and on drop
//! - Concurrent producers sharing one logger
//! - Blocking behaviour of the queue

use crossbeam_channel::{bounded, RecvTimeoutError};
use oak_logger::prelude::*;
use oak_logger::{error, info, warning};
use std::fs;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

fn assert_prefixed(line: &str, level: &str) -> String {
    // [LEVEL] YYYY-MM-DD HH:MM:SS: body
    let prefix = format!("[{}] ", level);
    assert!(line.starts_with(&prefix), "bad level prefix: {}", line);

    let rest = &line[prefix.len()..];
    let (timestamp, body) = rest.split_at(19);
    let bytes = timestamp.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        match i {
            4 | 7 => assert_eq!(*b, b'-', "bad timestamp: {}", timestamp),
            10 => assert_eq!(*b, b' ', "bad timestamp: {}", timestamp),
            13 | 16 => assert_eq!(*b, b':', "bad timestamp: {}", timestamp),
            _ => assert!(b.is_ascii_digit(), "bad timestamp: {}", timestamp),
        }
    }

    body.strip_prefix(": ")
        .unwrap_or_else(|| panic!("missing separator after timestamp: {}", line))
        .to_string()
}

#[test]
fn test_end_to_end_file_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("log.txt");

    let logger = Logger::new(&log_file).expect("Failed to create logger");

    info!(logger, "Hello {}", "World");
    warning!(
        logger,
        "User {} performed {} in {} seconds.",
        42,
        "login",
        3.5
    );
    logger.log(LogLevel::Debug, "No placeholders here.", &[]);
    error!(logger, "{} {} {}", 1, 2);
    logger.shutdown().expect("Failed to shut down");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.ends_with('\n'));

    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(assert_prefixed(lines[0], "INFO"), "Hello World");
    assert_eq!(
        assert_prefixed(lines[1], "WARNING"),
        "User 42 performed login in 3.5 seconds."
    );
    assert_eq!(
        assert_prefixed(lines[2], "DEBUG"),
        "No placeholders here."
    );
    assert_eq!(assert_prefixed(lines[3], "ERROR"), "1 2 {}");
}

#[test]
fn test_excess_arguments_in_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("excess.log");

    let logger = Logger::new(&log_file).expect("Failed to create logger");
    info!(logger, "{}", 1, 2);
    drop(logger);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(assert_prefixed(lines[0], "INFO"), "12");
}

#[test]
fn test_sink_unavailable_fails_fast() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("missing").join("nested").join("app.log");

    let err = Logger::new(&log_file).err().expect("construction must fail");
    match err {
        LoggerError::SinkUnavailable { path, .. } => assert_eq!(path, log_file),
        other => panic!("unexpected error: {}", other),
    }
    assert!(!log_file.exists());
}

#[test]
fn test_appends_across_logger_instances() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("append.log");

    for run in 0..3 {
        let logger = Logger::new(&log_file).expect("Failed to create logger");
        info!(logger, "run {}", run);
        logger.shutdown().expect("Failed to shut down");
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let bodies: Vec<String> = content
        .lines()
        .map(|line| assert_prefixed(line, "INFO"))
        .collect();
    assert_eq!(bodies, vec!["run 0", "run 1", "run 2"]);
}

#[test]
fn test_drop_drains_pending_messages() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("drop.log");

    {
        let logger = Logger::new(&log_file).expect("Failed to create logger");
        for i in 0..500 {
            info!(logger, "Message {}", i);
        }
        // No sleep, no explicit shutdown
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 500);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(assert_prefixed(line, "INFO"), format!("Message {}", i));
    }
}

#[test]
fn test_concurrent_producers() {
    const PRODUCERS: usize = 16;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");
    let logger = Logger::new(&log_file).expect("Failed to create logger");

    thread::scope(|scope| {
        for id in 0..PRODUCERS {
            let logger = &logger;
            scope.spawn(move || {
                info!(logger, "producer-{}-payload-{}", id, "x".repeat(64));
            });
        }
    });
    logger.shutdown().expect("Failed to shut down");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), PRODUCERS);

    let payload = "x".repeat(64);
    for id in 0..PRODUCERS {
        let expected = format!("producer-{}-payload-{}", id, payload);
        let matches = lines
            .iter()
            .filter(|line| assert_prefixed(line, "INFO") == expected)
            .count();
        assert_eq!(matches, 1, "producer {} should appear exactly once", id);
    }
}

#[test]
fn test_shared_logger_owner_shutdown() {
    let sink = MemorySink::new();
    let logger = Arc::new(Logger::with_sink(sink.clone()).expect("Failed to create logger"));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..25 {
                    info!(logger, "t{} m{}", t, i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("producer panicked");
    }

    // The owner tears down while other handles may still exist
    logger.shutdown().expect("Failed to shut down");
    assert!(logger.is_shut_down());
    assert_eq!(sink.lines().len(), 100);
    assert_eq!(logger.metrics().written_count(), 100);
    assert_eq!(logger.metrics().late_push_count(), 0);
}

#[test]
fn test_from_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("configured.log");

    let config = LoggerConfig::new(&log_file)
        .with_min_level(LogLevel::Warning)
        .with_timestamp_format(TimestampFormat::Unix);
    let logger = Logger::from_config(&config).expect("Failed to create logger");

    logger.info("filtered out");
    logger.error("kept");
    logger.shutdown().expect("Failed to shut down");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);

    let rest = lines[0].strip_prefix("[ERROR] ").expect("level prefix");
    let (timestamp, body) = rest.split_once(": ").expect("timestamp separator");
    assert!(timestamp.parse::<i64>().is_ok(), "not a unix timestamp: {}", timestamp);
    assert_eq!(body, "kept");
}

#[test]
fn test_log_injection_prevention() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("injection.log");

    let logger = Logger::new(&log_file).expect("Failed to create logger");
    let malicious = "User login\nERROR [2024-10-17] Fake error injected";
    info!(logger, "input: {}", malicious);
    logger.shutdown().expect("Failed to shut down");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.contains("\\n"));
    assert_eq!(content.lines().count(), 1, "Log should be a single line");
}

#[cfg(target_os = "linux")]
#[test]
fn test_full_device_failures_are_counted() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let device = std::path::Path::new("/dev/full");
    if !device.exists() {
        return;
    }

    let reported = Arc::new(AtomicUsize::new(0));
    let reported_clone = Arc::clone(&reported);
    let logger = Logger::builder()
        .path(device)
        .on_write_error(Arc::new(move |_err: &LoggerError| {
            reported_clone.fetch_add(1, Ordering::SeqCst);
        }))
        .build()
        .expect("Failed to open /dev/full");

    for i in 0..5 {
        info!(logger, "line {}", i);
    }
    logger.shutdown().expect("Failed to shut down");

    // Writes land in the buffer; every line is lost when the flush fails
    assert_eq!(logger.metrics().written_count(), 0);
    assert_eq!(logger.metrics().write_failure_count(), 5);
    assert!(reported.load(Ordering::SeqCst) >= 1);
}

#[test]
fn test_queue_pop_blocks_until_push() {
    let queue: Arc<LogQueue<String>> = Arc::new(LogQueue::new());
    let (tx, rx) = bounded(1);

    let consumer = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            while let Some(item) = queue.pop() {
                if tx.send(item).is_err() {
                    break;
                }
            }
        })
    };

    // Nothing arrives while the queue is empty
    assert_eq!(
        rx.recv_timeout(Duration::from_millis(100)),
        Err(RecvTimeoutError::Timeout)
    );

    queue.push("wake".to_string());
    assert_eq!(
        rx.recv_timeout(Duration::from_secs(5)).as_deref(),
        Ok("wake")
    );

    queue.shutdown();
    consumer.join().expect("consumer panicked");
    assert_eq!(
        rx.recv_timeout(Duration::from_millis(100)),
        Err(RecvTimeoutError::Disconnected)
    );
}
