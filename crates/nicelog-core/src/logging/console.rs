//! Process console implementation

use super::traits::Console;

/// Prints to the process stdout and stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn out(&self, line: &str) {
        println!("{}", line);
    }

    fn err(&self, line: &str) {
        eprintln!("{}", line);
    }
}
