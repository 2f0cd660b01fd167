//! Logger metrics for observability
//!
//! Counters for monitoring the asynchronous pipeline: how many lines were
//! queued, how many reached the sink, and how many were lost to write
//! failures or to pushes that arrived after shutdown.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use oak_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_enqueued();
/// metrics.record_written();
///
/// assert_eq!(metrics.enqueued_count(), 1);
/// assert_eq!(metrics.written_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Lines pushed onto the queue by producers
    enqueued: AtomicU64,

    /// Lines successfully handed to the sink
    written: AtomicU64,

    /// Lines the sink failed to write
    write_failures: AtomicU64,

    /// Lines pushed after shutdown was signaled
    late_pushes: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            enqueued: AtomicU64::new(0),
            written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            late_pushes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn enqueued_count(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written_count(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failure_count(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Lines pushed after shutdown; these are not guaranteed to be written
    #[inline]
    pub fn late_push_count(&self) -> u64 {
        self.late_pushes.load(Ordering::Relaxed)
    }

    /// Record an enqueued line, returning the previous count
    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.enqueued.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record lines confirmed written by a successful flush
    #[inline]
    pub fn record_written_lines(&self, lines: u64) -> u64 {
        self.written.fetch_add(lines, Ordering::Relaxed)
    }

    /// Record a failed write, returning the previous failure count
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Record lines lost together, e.g. still buffered when a flush failed
    #[inline]
    pub fn record_write_failures(&self, lines: u64) -> u64 {
        self.write_failures.fetch_add(lines, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_late_push(&self) -> u64 {
        self.late_pushes.fetch_add(1, Ordering::Relaxed)
    }

    /// Failure rate as a percentage (0.0 - 100.0) of lines the worker handled
    ///
    /// Returns 0.0 if nothing has been processed.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failure_count();
        let handled = failed + self.written_count();
        if handled == 0 {
            0.0
        } else {
            (failed as f64 / handled as f64) * 100.0
        }
    }
}
