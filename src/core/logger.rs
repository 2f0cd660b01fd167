//! Main logger implementation
//!
//! A [`Logger`] owns one [`LogQueue`], one worker thread and one [`Sink`].
//! Producers format their message on the calling thread and push the
//! finished line; the worker pops lines in FIFO order and writes them.
//! Teardown signals the queue, joins the worker (which drains everything
//! queued before the signal) and closes the sink.

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::LogLevel,
    log_queue::LogQueue,
    metrics::LoggerMetrics,
    sink::Sink,
    timestamp::TimestampFormat,
};
use crate::sinks::FileSink;
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

const WORKER_THREAD_NAME: &str = "oak-logger-worker";

/// Callback type for worker-side write failures
///
/// Invoked on the worker thread for every failed write, flush or close.
/// Producers never observe these errors, and a panicking callback does not
/// stop the worker.
pub type WriteErrorCallback = Arc<dyn Fn(&LoggerError) + Send + Sync>;

pub struct Logger {
    min_level: RwLock<LogLevel>,
    timestamp_format: TimestampFormat,
    queue: Arc<LogQueue<String>>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Open `path` for append and start the worker thread.
    ///
    /// Fails with [`LoggerError::SinkUnavailable`] if the file cannot be
    /// opened, in which case no thread is started.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use oak_logger::{Logger, LogLevel};
    ///
    /// let logger = Logger::new("log.txt")?;
    /// logger.log(LogLevel::Info, "User {} performed {}", &[&42, &"login"]);
    /// logger.shutdown()?;
    /// # Ok::<(), oak_logger::LoggerError>(())
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::builder().path(path).build()
    }

    /// Start a logger writing to an already constructed sink
    pub fn with_sink<S: Sink + 'static>(sink: S) -> Result<Self> {
        Self::builder().sink(sink).build()
    }

    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        Self::builder()
            .path(config.path.clone())
            .min_level(config.min_level)
            .timestamp_format(config.timestamp_format.clone())
            .build()
    }

    fn start(
        sink: Box<dyn Sink>,
        min_level: LogLevel,
        timestamp_format: TimestampFormat,
        on_write_error: Option<WriteErrorCallback>,
    ) -> Result<Self> {
        let queue = Arc::new(LogQueue::new());
        let metrics = Arc::new(LoggerMetrics::new());

        let worker = {
            let queue = Arc::clone(&queue);
            let metrics = Arc::clone(&metrics);
            thread::Builder::new()
                .name(WORKER_THREAD_NAME.to_string())
                .spawn(move || Worker::new(sink, queue, metrics, on_write_error).run())
                .map_err(|e| {
                    LoggerError::io_operation("spawning log worker", "thread creation failed", e)
                })?
        };

        Ok(Self {
            min_level: RwLock::new(min_level),
            timestamp_format,
            queue,
            worker: Mutex::new(Some(worker)),
            metrics,
        })
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    /// Format `template` with `args` and enqueue the line.
    ///
    /// Never blocks on I/O and never fails. Entries below the minimum level
    /// are discarded before formatting.
    pub fn log(&self, level: LogLevel, template: &str, args: &[&dyn Display]) {
        if level < self.min_level() {
            return;
        }

        self.submit(LogEntry::formatted(level, template, args));
    }

    /// Enqueue an already captured entry, subject to the minimum level
    pub fn log_entry(&self, entry: LogEntry) {
        if entry.level() < self.min_level() {
            return;
        }

        self.submit(entry);
    }

    fn submit(&self, entry: LogEntry) {
        let line = entry.render(&self.timestamp_format);
        self.metrics.record_enqueued();
        if !self.queue.push(line) {
            self.metrics.record_late_push();
        }
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message.as_ref(), &[]);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message.as_ref(), &[]);
    }

    #[inline]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warning, message.as_ref(), &[]);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message.as_ref(), &[]);
    }

    /// Number of lines waiting for the worker
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_shut_down(&self) -> bool {
        self.queue.is_shutdown()
    }

    /// Get the logger metrics for observability
    ///
    /// # Example
    ///
    /// ```
    /// use oak_logger::{Logger, sinks::MemorySink};
    ///
    /// let logger = Logger::with_sink(MemorySink::new()).unwrap();
    /// logger.info("hello");
    /// logger.shutdown().unwrap();
    ///
    /// assert_eq!(logger.metrics().written_count(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Signal shutdown, wait for the worker to drain the queue, close the sink.
    ///
    /// Every line enqueued before this call is written before it returns.
    /// Lines logged concurrently with or after this call may be lost.
    /// Calling it again is a no-op; a concurrent second caller waits for the
    /// first to finish.
    ///
    /// Returns [`LoggerError::WorkerPanicked`] if the worker thread panicked.
    pub fn shutdown(&self) -> Result<()> {
        self.queue.shutdown();

        let mut worker = self.worker.lock();
        if let Some(handle) = worker.take() {
            handle.join().map_err(|panic_info| {
                LoggerError::worker_panicked(panic_message(panic_info.as_ref()))
            })?;
        }
        Ok(())
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            eprintln!("[LOGGER ERROR] Log worker failed during shutdown: {}", e);
        }

        let failed = self.metrics.write_failure_count();
        if failed > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} failed writes (failure rate: {:.2}%)",
                failed,
                self.metrics.failure_rate()
            );
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level())
            .field("timestamp_format", &self.timestamp_format)
            .field("queue", &self.queue)
            .finish()
    }
}

/// State owned by the worker thread
struct Worker {
    sink: Box<dyn Sink>,
    sink_name: String,
    queue: Arc<LogQueue<String>>,
    metrics: Arc<LoggerMetrics>,
    on_write_error: Option<WriteErrorCallback>,
    /// Lines accepted by the sink but not yet confirmed by a flush
    unflushed: u64,
    warned: bool,
    callback_warned: bool,
}

impl Worker {
    fn new(
        sink: Box<dyn Sink>,
        queue: Arc<LogQueue<String>>,
        metrics: Arc<LoggerMetrics>,
        on_write_error: Option<WriteErrorCallback>,
    ) -> Self {
        let sink_name = sink.name().to_string();
        Self {
            sink,
            sink_name,
            queue,
            metrics,
            on_write_error,
            unflushed: 0,
            warned: false,
            callback_warned: false,
        }
    }

    /// Write every popped line until shutdown empties the queue, then close
    fn run(mut self) {
        while let Some(line) = self.queue.pop() {
            let sink = &mut self.sink;
            match isolate(&self.sink_name, || sink.write_line(&line)) {
                Ok(()) => self.unflushed += 1,
                Err(e) => self.report_failure(&e, 1),
            }

            // Flush whenever the worker is about to go idle
            if self.unflushed > 0 && self.queue.is_empty() {
                let sink = &mut self.sink;
                let result = isolate(&self.sink_name, || sink.flush());
                self.settle(result);
            }
        }

        let sink = &mut self.sink;
        let result = isolate(&self.sink_name, || sink.close());
        self.settle(result);
    }

    /// Account for buffered lines once a flush or close has resolved them
    fn settle(&mut self, result: Result<()>) {
        let lines = std::mem::take(&mut self.unflushed);
        match result {
            Ok(()) => {
                self.metrics.record_written_lines(lines);
            }
            Err(e) => self.report_failure(&e, lines),
        }
    }

    fn report_failure(&mut self, error: &LoggerError, lost_lines: u64) {
        self.metrics.record_write_failures(lost_lines);

        // Warn once on stderr; the callback sees every failure
        if !self.warned {
            self.warned = true;
            eprintln!(
                "[LOGGER WARNING] Log sink '{}' failed: {}. \
                 Further failures are counted but not reported here.",
                self.sink_name, error
            );
        }

        if let Some(callback) = &self.on_write_error {
            let outcome =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| callback(error)));
            if let Err(panic_info) = outcome {
                if !self.callback_warned {
                    self.callback_warned = true;
                    eprintln!(
                        "[LOGGER ERROR] Write error callback panicked: {}. \
                         The log worker continues.",
                        panic_message(panic_info.as_ref())
                    );
                }
            }
        }
    }
}

/// Run a sink operation, converting a panic into a writer error
fn isolate(sink_name: &str, op: impl FnOnce() -> Result<()>) -> Result<()> {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(op)) {
        Ok(result) => result,
        Err(panic_info) => Err(LoggerError::writer(format!(
            "sink '{}' panicked: {}",
            sink_name,
            panic_message(panic_info.as_ref())
        ))),
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use oak_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .path("app.log")
///     .min_level(LogLevel::Info)
///     .timestamp_format(TimestampFormat::Rfc3339)
///     .on_write_error(Arc::new(|err: &LoggerError| {
///         eprintln!("ALERT: log write failed: {}", err);
///     }))
///     .build()?;
/// # Ok::<(), LoggerError>(())
/// ```
pub struct LoggerBuilder {
    path: Option<PathBuf>,
    sink: Option<Box<dyn Sink>>,
    min_level: LogLevel,
    timestamp_format: TimestampFormat,
    on_write_error: Option<WriteErrorCallback>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            path: None,
            sink: None,
            min_level: LogLevel::default(),
            timestamp_format: TimestampFormat::default(),
            on_write_error: None,
        }
    }

    /// Append to the file at `path`
    #[must_use = "builder methods return a new value"]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Write to a custom sink instead of a file; takes precedence over `path`
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set a callback for worker-side write failures
    #[must_use = "builder methods return a new value"]
    pub fn on_write_error(mut self, callback: WriteErrorCallback) -> Self {
        self.on_write_error = Some(callback);
        self
    }

    /// Open the sink and start the worker
    pub fn build(self) -> Result<Logger> {
        let sink: Box<dyn Sink> = match (self.sink, self.path) {
            (Some(sink), _) => sink,
            (None, Some(path)) => Box::new(FileSink::open(path)?),
            (None, None) => {
                return Err(LoggerError::config(
                    "LoggerBuilder",
                    "no destination: set a path or a sink",
                ))
            }
        };

        Logger::start(sink, self.min_level, self.timestamp_format, self.on_write_error)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
