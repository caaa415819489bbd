//! Error types for logging operations.

use std::fmt;
use std::io;

/// Result type for logging operations.
pub type Result<T> = std::result::Result<T, LoggingError>;

/// Errors that can occur while setting up or writing logs.
#[derive(Debug)]
pub enum LoggingError {
    /// I/O error from the log file.
    Io(io::Error),
    /// A level name that is not one of debug/info/warn/error.
    InvalidLevel(String),
    /// The writer thread has gone away.
    SinkClosed,
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::Io(err) => write!(f, "I/O error: {}", err),
            LoggingError::InvalidLevel(level) => write!(f, "Unknown log level: '{}'", level),
            LoggingError::SinkClosed => write!(f, "Log sink is closed"),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggingError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LoggingError {
    fn from(err: io::Error) -> Self {
        LoggingError::Io(err)
    }
}
