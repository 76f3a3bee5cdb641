//! Error types

use thiserror::Error;

/// Errors returned by the fallible helpers of this crate
///
/// The logging methods themselves never return these; file-append failures
/// are reported to the console's error channel instead.
#[derive(Error, Debug)]
pub enum LogError {
    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Color name outside the known palette
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    /// Level label outside LOG/WRITE/INFO/WARN/ERROR
    #[error("Unknown level: {0}")]
    UnknownLevel(String),

    /// The background file writer is gone
    #[error("File writer stopped")]
    WorkerStopped,

    /// A global logger was already installed
    #[error("A global logger is already installed")]
    AlreadyInstalled,
}

pub type LogResult<T> = Result<T, LogError>;
