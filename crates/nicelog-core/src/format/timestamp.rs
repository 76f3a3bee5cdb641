//! Timestamp formatting for the line prefix

use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};

/// Source of the current instant
///
/// Implementations:
/// - `SystemClock`: local system clock and local UTC offset
/// - `FixedClock`: always the same instant (tests, replay)
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = Local::now();
        now.with_timezone(now.offset())
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Format an instant as `[DD.MM.YYYY HH:MM:SS:mmm UTC±H]`
///
/// The offset is rendered in whole hours east of UTC, truncated toward zero,
/// with an explicit `+` only when positive (`UTC+2`, `UTC-5`, `UTC0`).
pub fn format_timestamp(instant: &DateTime<FixedOffset>) -> String {
    // Leap seconds report 1000..=1999 ms
    let millis = instant.timestamp_subsec_millis().min(999);

    format!(
        "[{:02}.{:02}.{:04} {:02}:{:02}:{:02}:{:03} UTC{}]",
        instant.day(),
        instant.month(),
        instant.year(),
        instant.hour(),
        instant.minute(),
        instant.second(),
        millis,
        format_offset_hours(instant.offset()),
    )
}

/// Read `clock` and format the result
pub fn nice_date_time(clock: &dyn Clock) -> String {
    format_timestamp(&clock.now())
}

fn format_offset_hours(offset: &FixedOffset) -> String {
    let hours = offset.local_minus_utc() / 3600;
    if hours > 0 {
        format!("+{}", hours)
    } else {
        hours.to_string()
    }
}
