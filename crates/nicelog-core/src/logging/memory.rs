//! In-memory console implementation

use parking_lot::Mutex;

use super::traits::Console;
use crate::format::Stream;

/// Records every console line in memory
///
/// Lines are stored verbatim, including ANSI color codes.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<(Stream, String)>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines in the order they were written
    pub fn lines(&self) -> Vec<(Stream, String)> {
        self.lines.lock().clone()
    }

    pub fn stdout_lines(&self) -> Vec<String> {
        self.lines_for(Stream::Stdout)
    }

    pub fn stderr_lines(&self) -> Vec<String> {
        self.lines_for(Stream::Stderr)
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    fn lines_for(&self, stream: Stream) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line.clone())
            .collect()
    }
}

impl Console for MemoryConsole {
    fn out(&self, line: &str) {
        self.lines.lock().push((Stream::Stdout, line.to_string()));
    }

    fn err(&self, line: &str) {
        self.lines.lock().push((Stream::Stderr, line.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console_records_streams() {
        let console = MemoryConsole::new();
        assert!(console.is_empty());

        console.out("one");
        console.err("two");
        console.write(Stream::Stdout, "three");

        assert_eq!(console.len(), 3);
        assert_eq!(console.stdout_lines(), vec!["one", "three"]);
        assert_eq!(console.stderr_lines(), vec!["two"]);
        assert_eq!(console.lines()[1], (Stream::Stderr, "two".to_string()));

        console.clear();
        assert!(console.is_empty());
    }
}
