//! No-op console implementation

use super::traits::Console;

/// A console that discards everything
///
/// Useful when only the log file matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpConsole;

impl NoOpConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for NoOpConsole {
    fn out(&self, _line: &str) {}
    fn err(&self, _line: &str) {}
}
