//! Sink trait for log output destinations

use super::error::Result;

/// An append-only destination for rendered log lines.
///
/// A sink is owned and driven by the log worker thread alone, so it only
/// needs to be `Send`.
pub trait Sink: Send {
    /// Append one rendered line followed by a newline
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    /// Flush and release the destination. Called once by the worker on exit.
    fn close(&mut self) -> Result<()> {
        self.flush()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}
