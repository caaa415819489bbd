//! Leveled, component-tagged logging with pluggable sinks.

pub mod error;
mod log_level;
mod logger;
mod record;
mod sink;

pub use error::{LoggingError, Result};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use record::LogRecord;
pub use sink::{FileSink, LogSink, MemorySink};
