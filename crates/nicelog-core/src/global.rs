//! Process-wide logger installed explicitly at startup
//!
//! Nothing is created implicitly: until [`install`] succeeds, [`global`]
//! returns `None`. The installed logger lives in a static and is never
//! dropped, so [`install`] hands back a [`FlushGuard`]. Keep it alive in
//! `main`; when it goes out of scope every queued append is written.
//!
//! ```no_run
//! use nicelog_core::{global, install, log_info, Logger, LoggerConfig};
//!
//! let _guard = install(Logger::new(LoggerConfig::new("/tmp/app.log")).unwrap()).unwrap();
//! for i in 0..200 {
//!     log_info!(global().unwrap(), "line", i);
//! }
//! // all 200 lines are on disk once `_guard` drops at the end of main
//! ```

use once_cell::sync::OnceCell;

use crate::error::{LogError, LogResult};
use crate::logging::Logger;

static GLOBAL: OnceCell<Logger> = OnceCell::new();

/// Flushes the global logger when dropped
#[must_use = "queued appends are only guaranteed to reach the file when this guard drops"]
#[derive(Debug)]
pub struct FlushGuard {
    _private: (),
}

impl Drop for FlushGuard {
    fn drop(&mut self) {
        if let Some(logger) = global() {
            let _ = logger.flush();
        }
    }
}

/// Install `logger` for the rest of the process
///
/// Fails with `LogError::AlreadyInstalled` on every call after the first.
pub fn install(logger: Logger) -> LogResult<FlushGuard> {
    GLOBAL.set(logger).map_err(|_| LogError::AlreadyInstalled)?;
    Ok(FlushGuard { _private: () })
}

/// The installed logger, if any
pub fn global() -> Option<&'static Logger> {
    GLOBAL.get()
}
