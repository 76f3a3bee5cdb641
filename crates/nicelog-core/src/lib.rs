//! NiceLog Core
//!
//! Timestamped, color-coded console logging with a plain-text copy appended
//! to a log file in the background.
//!
//! Every line starts with a prefix such as
//! `[09.03.2024 07:05:03:042 UTC+2] INFO:   ` (padded to 40 columns). On the
//! console the prefix is colored per level; the file copy is plain text.
//! File appends are fire-and-forget: the calling method never waits for them
//! and never sees their failures.
//!
//! ```rust,no_run
//! use nicelog_core::{log_info, log_write, Arg, Logger, LoggerConfig};
//!
//! let logger = Logger::new(LoggerConfig::new("/tmp/app.log")).unwrap();
//!
//! log_info!(logger, "build", "ok");
//! log_write!(logger, serde_json::json!({"a": 1}));
//! logger.warn(&[Arg::from("disk"), Arg::from(93), Arg::from("%")]);
//!
//! logger.flush().unwrap();
//! ```

pub mod error;
pub mod config;
pub mod format;
pub mod logging;
pub mod global;

// Re-export commonly used types
pub use error::{LogError, LogResult};

pub use config::LoggerConfig;

pub use format::{
    Arg, Clock, Color, FixedClock, Level, Stream, SystemClock,
    build_prefix, colorize, format_timestamp, join_args, nice_date_time,
};

pub use logging::{
    Console, SharedConsole, StdConsole, NoOpConsole, MemoryConsole,
    FileWriter, Logger,
};

pub use global::{global, install, FlushGuard};
