//! In-memory sink, useful for tests and for embedding the logger

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects rendered lines in memory.
///
/// Cloning a `MemorySink` yields another handle onto the same buffer, so a
/// clone can be kept to read lines back after the original has been handed
/// to a logger.
///
/// ```
/// use oak_logger::sinks::MemorySink;
/// use oak_logger::Sink;
///
/// let mut sink = MemorySink::new();
/// let reader = sink.clone();
/// sink.write_line("hello").unwrap();
/// assert_eq!(reader.lines(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// The buffer as it would appear in a file
    pub fn contents(&self) -> String {
        self.lines
            .lock()
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
