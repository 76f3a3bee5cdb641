//! The logger: five methods over a console sink and a log file

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use super::console::StdConsole;
use super::file_writer::FileWriter;
use super::traits::SharedConsole;
use crate::config::LoggerConfig;
use crate::error::LogResult;
use crate::format::{build_prefix, colorize, join_args, nice_date_time, Arg, Clock, Level, SystemClock};

/// Timestamped, color-coded console logger with a plain-text file copy
///
/// | method  | console         | color  | file |
/// |---------|-----------------|--------|------|
/// | `log`   | stdout          | green  | no   |
/// | `write` | no              |        | yes  |
/// | `info`  | stdout          | cyan   | yes  |
/// | `warn`  | stderr          | yellow | yes  |
/// | `error` | stderr          | red    | yes  |
///
/// None of the methods block on the file or report its failures to the
/// caller. Call [`Logger::flush`] to wait for queued appends.
///
/// # Example
///
/// ```no_run
/// use nicelog_core::{log_info, Logger, LoggerConfig};
///
/// let logger = Logger::new(LoggerConfig::new("/tmp/app.log")).unwrap();
/// log_info!(logger, "build", "ok");
/// logger.flush().unwrap();
/// ```
pub struct Logger {
    log_file_path: RwLock<PathBuf>,
    allow_console: AtomicBool,
    console: SharedConsole,
    clock: Arc<dyn Clock>,
    writer: FileWriter,
}

impl Logger {
    /// Create a logger printing to the process console with the system clock
    pub fn new(config: LoggerConfig) -> LogResult<Self> {
        Self::with_parts(config, Arc::new(StdConsole::new()), Arc::new(SystemClock))
    }

    /// Create a logger with an explicit console and clock
    pub fn with_parts(
        config: LoggerConfig,
        console: SharedConsole,
        clock: Arc<dyn Clock>,
    ) -> LogResult<Self> {
        let writer = FileWriter::spawn(console.clone())?;
        Ok(Self {
            log_file_path: RwLock::new(config.log_file_path),
            allow_console: AtomicBool::new(config.allow_console),
            console,
            clock,
            writer,
        })
    }

    /// Console only, green
    pub fn log(&self, args: &[Arg]) {
        self.emit(Level::Log, args);
    }

    /// File only
    pub fn write(&self, args: &[Arg]) {
        self.emit(Level::Write, args);
    }

    pub fn info(&self, args: &[Arg]) {
        self.emit(Level::Info, args);
    }

    pub fn warn(&self, args: &[Arg]) {
        self.emit(Level::Warn, args);
    }

    pub fn error(&self, args: &[Arg]) {
        self.emit(Level::Error, args);
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.log_file_path.read().clone()
    }

    /// Redirect later file appends; already queued lines keep their target
    pub fn set_log_file_path(&self, path: impl Into<PathBuf>) {
        *self.log_file_path.write() = path.into();
    }

    pub fn allow_console(&self) -> bool {
        self.allow_console.load(Ordering::Relaxed)
    }

    /// Turn console output on or off; file output is unaffected
    pub fn set_allow_console(&self, allow: bool) {
        self.allow_console.store(allow, Ordering::Relaxed);
    }

    /// Snapshot of the current settings
    pub fn config(&self) -> LoggerConfig {
        LoggerConfig {
            log_file_path: self.log_file_path(),
            allow_console: self.allow_console(),
        }
    }

    /// Block until every file append issued so far has been attempted
    pub fn flush(&self) -> LogResult<()> {
        self.writer.flush()
    }

    pub async fn flush_async(&self) -> LogResult<()> {
        self.writer.flush_async().await
    }

    fn emit(&self, level: Level, args: &[Arg]) {
        let prefix = build_prefix(&nice_date_time(self.clock.as_ref()), level);
        let joined = join_args(args);

        if let (Some(stream), Some(color)) = (level.stream(), level.color()) {
            if self.allow_console() {
                let mut line = colorize(&prefix, color);
                if !args.is_empty() {
                    line.push(' ');
                    line.push_str(&joined);
                }
                self.console.write(stream, &line);
            }
        }

        if level.writes_file() {
            self.writer
                .append(self.log_file_path(), format!("{}{}\n", prefix, joined));
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("log_file_path", &self.log_file_path())
            .field("allow_console", &self.allow_console())
            .field("writer", &self.writer)
            .finish()
    }
}

/// Convenience macros converting each argument with `Arg::from`
#[macro_export]
macro_rules! log_log {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(&[$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! log_write {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.write(&[$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info(&[$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn(&[$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(&[$($crate::Arg::from($arg)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Color, FixedClock, Stream, RESET};
    use crate::logging::memory::MemoryConsole;
    use chrono::{FixedOffset, TimeZone, Timelike};
    use serde_json::json;
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    const TS: &str = "[09.03.2024 07:05:03:042 UTC+2]";

    fn fixed_clock() -> Arc<dyn Clock> {
        let instant = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 9, 7, 5, 3)
            .unwrap()
            .with_nanosecond(42_000_000)
            .unwrap();
        Arc::new(FixedClock(instant))
    }

    fn setup() -> (TempDir, Arc<MemoryConsole>, Logger) {
        let dir = tempdir().unwrap();
        let console = Arc::new(MemoryConsole::new());
        let config = LoggerConfig::new(dir.path().join("app.log"));
        let logger = Logger::with_parts(config, console.clone(), fixed_clock()).unwrap();
        (dir, console, logger)
    }

    fn file_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// `^\[\d{2}\.\d{2}\.\d{4} \d{2}:\d{2}:\d{2}:\d{3} UTC[+-]?\d+\] *LEVEL: *rest$`
    fn matches_line_shape(line: &str, level: &str, rest: &str) -> bool {
        let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        let Some(close) = line.find(']') else {
            return false;
        };
        let ts = &line[..=close];
        let shape_ok = ts.len() >= 30
            && ts.starts_with('[')
            && digits(&ts[1..3])
            && &ts[3..4] == "."
            && digits(&ts[4..6])
            && &ts[6..7] == "."
            && digits(&ts[7..11])
            && &ts[11..12] == " "
            && digits(&ts[12..14])
            && &ts[14..15] == ":"
            && digits(&ts[15..17])
            && &ts[17..18] == ":"
            && digits(&ts[18..20])
            && &ts[20..21] == ":"
            && digits(&ts[21..24])
            && &ts[24..28] == " UTC"
            && digits(ts[28..ts.len() - 1].trim_start_matches(['+', '-']));
        let tail = line[close + 1..].trim_start_matches(' ');
        let Some(after_level) = tail.strip_prefix(&format!("{}:", level)) else {
            return false;
        };
        shape_ok && after_level.trim_start_matches(' ') == rest
    }

    #[test]
    fn test_info_writes_expected_line() {
        let (dir, _console, logger) = setup();
        log_info!(logger, "build", "ok");
        logger.flush().unwrap();

        let content = std::fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert_eq!(content, format!("{} INFO:   build ok\n", TS));
        assert!(matches_line_shape(content.trim_end_matches('\n'), "INFO", "build ok"));
    }

    #[test]
    fn test_info_line_shape_with_system_clock() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        let logger = Logger::with_parts(
            LoggerConfig::new(&path),
            Arc::new(MemoryConsole::new()),
            Arc::new(SystemClock),
        )
        .unwrap();

        log_info!(logger, "build", "ok");
        logger.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        assert_eq!(content.matches('\n').count(), 1);
        assert!(matches_line_shape(content.trim_end_matches('\n'), "INFO", "build ok"));
    }

    #[test]
    fn test_write_is_file_only() {
        let (dir, console, logger) = setup();
        log_write!(logger, json!({"a": 1}));
        logger.flush().unwrap();

        assert!(console.is_empty());
        let lines = file_lines(&dir.path().join("app.log"));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(r#"{"a":1}"#));
        assert!(lines[0].starts_with(&format!("{} WRITE: ", TS)));
    }

    #[test]
    fn test_log_is_console_only() {
        let (dir, console, logger) = setup();
        log_log!(logger, "hello", 3);
        logger.flush().unwrap();

        assert!(!dir.path().join("app.log").exists());
        let out = console.stdout_lines();
        assert_eq!(out.len(), 1);
        let prefix = build_prefix(TS, Level::Log);
        assert_eq!(out[0], format!("{}{}{} hello 3", Color::Green.code(), prefix, RESET));
        assert!(console.stderr_lines().is_empty());
    }

    #[test]
    fn test_info_warn_error_hit_both_sinks() {
        let (dir, console, logger) = setup();
        log_info!(logger, "i");
        log_warn!(logger, "w");
        log_error!(logger, "e");
        logger.flush().unwrap();

        let out = console.stdout_lines();
        let err = console.stderr_lines();
        assert_eq!(out.len(), 1);
        assert_eq!(err.len(), 2);
        assert!(out[0].starts_with(Color::Cyan.code()));
        assert!(err[0].starts_with(Color::Yellow.code()));
        assert!(err[1].starts_with(Color::Red.code()));

        let lines = file_lines(&dir.path().join("app.log"));
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains(" INFO: "));
        assert!(lines[1].contains(" WARN: "));
        assert!(lines[2].contains(" ERROR: "));
        // The file copy is plain text
        assert!(lines.iter().all(|l| !l.contains('\x1b')));
    }

    #[test]
    fn test_append_failure_does_not_escape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("app.log");
        let console = Arc::new(MemoryConsole::new());
        let logger =
            Logger::with_parts(LoggerConfig::new(&path), console.clone(), fixed_clock()).unwrap();

        log_error!(logger, "boom");
        logger.flush().unwrap();

        let err = console.stderr_lines();
        assert_eq!(err.len(), 2);
        assert!(err[0].starts_with(Color::Red.code()));
        assert!(err[1].contains("app.log"));
        assert!(!path.exists());
    }

    #[test]
    fn test_allow_console_gate() {
        let (dir, console, logger) = setup();
        logger.set_allow_console(false);
        assert!(!logger.allow_console());

        log_log!(logger, "hidden");
        log_warn!(logger, "still in file");
        logger.flush().unwrap();

        assert!(console.is_empty());
        assert_eq!(file_lines(&dir.path().join("app.log")).len(), 1);

        logger.set_allow_console(true);
        log_log!(logger, "shown");
        assert_eq!(console.stdout_lines().len(), 1);
    }

    #[test]
    fn test_set_log_file_path() {
        let (dir, _console, logger) = setup();
        let other = dir.path().join("other.log");

        log_info!(logger, "first");
        logger.set_log_file_path(&other);
        log_info!(logger, "second");
        logger.flush().unwrap();

        assert_eq!(logger.config().log_file_path, other);
        assert_eq!(file_lines(&dir.path().join("app.log")).len(), 1);
        let moved = file_lines(&other);
        assert_eq!(moved.len(), 1);
        assert!(moved[0].ends_with("second"));
    }

    #[test]
    fn test_no_args() {
        let (dir, console, logger) = setup();
        logger.info(&[]);
        logger.flush().unwrap();

        let prefix = build_prefix(TS, Level::Info);
        assert_eq!(console.stdout_lines()[0], colorize(&prefix, Color::Cyan));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("app.log")).unwrap(),
            format!("{}\n", prefix)
        );
    }

    #[test]
    fn test_mixed_argument_types() {
        let (dir, _console, logger) = setup();
        logger.info(&[
            Arg::from("user"),
            Arg::from(7u32),
            Arg::json(&json!({"roles": ["admin"]})),
            Arg::from(false),
        ]);
        logger.flush().unwrap();

        let lines = file_lines(&dir.path().join("app.log"));
        assert!(lines[0].ends_with(r#"user 7 {"roles":["admin"]} false"#));
    }

    #[test]
    fn test_concurrent_callers() {
        let (dir, console, logger) = setup();
        let logger = Arc::new(logger);
        let mut handles = vec![];

        for t in 0..8 {
            let logger = Arc::clone(&logger);
            handles.push(std::thread::spawn(move || {
                for i in 0..25 {
                    log_info!(logger, "thread", t, "message", i);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        logger.flush().unwrap();

        let lines = file_lines(&dir.path().join("app.log"));
        assert_eq!(lines.len(), 200);
        assert!(lines.iter().all(|l| l.starts_with(TS) && l.contains(" message ")));
        assert_eq!(console.lines().iter().filter(|(s, _)| *s == Stream::Stdout).count(), 200);
    }

    #[tokio::test]
    async fn test_flush_async() {
        let (dir, _console, logger) = setup();
        log_write!(logger, "from async");
        logger.flush_async().await.unwrap();

        assert_eq!(file_lines(&dir.path().join("app.log")).len(), 1);
    }
}
