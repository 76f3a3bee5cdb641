//! Logger configuration
//!
//! The crate reads no configuration on its own. `LoggerConfig` derives serde
//! so a host application can embed it in whatever file format it already uses.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name used when no log file path is given
pub const DEFAULT_LOG_FILE_NAME: &str = ".log";

/// Settings a `Logger` is constructed with
///
/// # Example
///
/// ```
/// use nicelog_core::LoggerConfig;
///
/// let config = LoggerConfig::new("/var/log/app.log").with_allow_console(false);
/// assert!(!config.allow_console);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// File that `write`, `info`, `warn` and `error` append to
    pub log_file_path: PathBuf,
    /// Whether console output is emitted at all
    pub allow_console: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_file_path: default_log_file_path(),
            allow_console: true,
        }
    }
}

impl LoggerConfig {
    /// Create a config that appends to `path` with console output enabled
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            log_file_path: path.into(),
            allow_console: true,
        }
    }

    pub fn with_log_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file_path = path.into();
        self
    }

    pub fn with_allow_console(mut self, allow: bool) -> Self {
        self.allow_console = allow;
        self
    }

    pub fn log_file_path(&self) -> &Path {
        &self.log_file_path
    }
}

/// `.log` in the current working directory
pub fn default_log_file_path() -> PathBuf {
    std::env::current_dir()
        .map(|dir| dir.join(DEFAULT_LOG_FILE_NAME))
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE_NAME))
}
