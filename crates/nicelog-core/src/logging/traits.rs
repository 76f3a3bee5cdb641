//! Console sink trait definition

use std::sync::Arc;

use crate::format::Stream;

/// Console abstraction the logger prints through
///
/// Implementations:
/// - `StdConsole`: stdout/stderr of the process
/// - `NoOpConsole`: discards everything
/// - `MemoryConsole`: keeps lines in memory for inspection
pub trait Console: Send + Sync {
    /// Write a line to the standard output stream
    fn out(&self, line: &str);

    /// Write a line to the error/warning stream
    ///
    /// Also receives diagnostics from the background file writer.
    fn err(&self, line: &str);

    /// Write a line to the given stream
    fn write(&self, stream: Stream, line: &str) {
        match stream {
            Stream::Stdout => self.out(line),
            Stream::Stderr => self.err(line),
        }
    }
}

/// Type alias for an Arc-wrapped console
pub type SharedConsole = Arc<dyn Console>;
