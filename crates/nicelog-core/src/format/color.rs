//! ANSI font colors for console prefixes

use std::fmt;
use std::str::FromStr;

use crate::error::LogError;

/// Font colors understood by `colorize`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Crimson,
}

impl Color {
    pub const ALL: [Color; 9] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Crimson,
    ];

    /// ANSI escape sequence selecting this font color
    pub fn code(&self) -> &'static str {
        match self {
            Color::Black => "\x1b[30m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
            Color::Crimson => "\x1b[38m",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Crimson => "crimson",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Color::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .ok_or_else(|| LogError::UnknownColor(s.to_string()))
    }
}

/// Reset sequence appended after colored text (back to white)
pub const RESET: &str = "\x1b[37m";

/// Wrap `text` in `color` and reset to white afterwards
pub fn colorize(text: &str, color: Color) -> String {
    format!("{}{}{}", color.code(), text, RESET)
}
