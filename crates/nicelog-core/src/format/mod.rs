//! Pure formatting helpers: timestamp, prefix, colors and arguments

mod args;
mod color;
mod prefix;
mod timestamp;

pub use args::{join_args, Arg};
pub use color::{colorize, Color, RESET};
pub use prefix::{build_prefix, Level, Stream, PREFIX_WIDTH};
pub use timestamp::{format_timestamp, nice_date_time, Clock, FixedClock, SystemClock};
