//! Level labels and the padded line prefix

use std::fmt;
use std::str::FromStr;

use super::color::Color;
use crate::error::LogError;

/// Minimum width of a prefix, in characters
pub const PREFIX_WIDTH: usize = 40;

/// Which console stream a level prints to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// The five logging methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Console only
    Log,
    /// File only
    Write,
    Info,
    Warn,
    Error,
}

impl Level {
    pub const ALL: [Level; 5] = [Level::Log, Level::Write, Level::Info, Level::Warn, Level::Error];

    pub fn label(&self) -> &'static str {
        match self {
            Level::Log => "LOG",
            Level::Write => "WRITE",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Console color of the prefix, `None` for file-only levels
    pub fn color(&self) -> Option<Color> {
        match self {
            Level::Log => Some(Color::Green),
            Level::Write => None,
            Level::Info => Some(Color::Cyan),
            Level::Warn => Some(Color::Yellow),
            Level::Error => Some(Color::Red),
        }
    }

    /// Console stream, `None` for file-only levels
    pub fn stream(&self) -> Option<Stream> {
        match self {
            Level::Log | Level::Info => Some(Stream::Stdout),
            Level::Warn | Level::Error => Some(Stream::Stderr),
            Level::Write => None,
        }
    }

    /// Whether the level appends to the log file
    pub fn writes_file(&self) -> bool {
        !matches!(self, Level::Log)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOG" => Ok(Level::Log),
            "WRITE" => Ok(Level::Write),
            "INFO" => Ok(Level::Info),
            "WARN" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            _ => Err(LogError::UnknownLevel(s.to_string())),
        }
    }
}

/// `"<timestamp> <LEVEL>: "` right-padded with spaces to `PREFIX_WIDTH`
///
/// Longer prefixes are kept whole.
pub fn build_prefix(timestamp: &str, level: Level) -> String {
    let prefix = format!("{} {}: ", timestamp, level.label());
    format!("{:<width$}", prefix, width = PREFIX_WIDTH)
}
