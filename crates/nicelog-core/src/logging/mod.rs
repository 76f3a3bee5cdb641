//! Console sinks, the background file writer and the logger

mod traits;
mod console;
mod noop;
mod memory;
mod file_writer;
mod logger;

pub use traits::{Console, SharedConsole};
pub use console::StdConsole;
pub use noop::NoOpConsole;
pub use memory::MemoryConsole;
pub use file_writer::FileWriter;
pub use logger::Logger;
