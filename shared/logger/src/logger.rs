//! The [`Logger`] handle used throughout the workspace.

use crate::error::Result;
use crate::log_level::LogLevel;
use crate::record::LogRecord;
use crate::sink::{FileSink, LogSink, MemorySink};
use std::path::Path;
use std::sync::Arc;

/// Cloneable, level-filtered logger.
///
/// Clones and component-derived loggers all write to the same sink.
///
/// # Examples
///
/// ```
/// use logging::{LogLevel, Logger};
///
/// let (logger, sink) = Logger::in_memory(LogLevel::Info);
/// let encoder_log = logger.for_component("Encoder");
/// encoder_log.info("Encoder configured");
/// encoder_log.debug("filtered out");
///
/// assert_eq!(sink.records().len(), 1);
/// ```
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
    level: LogLevel,
    component: Option<String>,
    console_output: bool,
}

impl Logger {
    /// Creates a logger over an arbitrary sink.
    pub fn new(sink: Arc<dyn LogSink>, level: LogLevel) -> Self {
        Logger {
            sink,
            level,
            component: None,
            console_output: false,
        }
    }

    /// Creates a logger that appends to `log_path` from a writer thread.
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn to_file(log_path: &Path, level: LogLevel) -> Result<Self> {
        let sink = FileSink::open(log_path)?;
        Ok(Self::new(Arc::new(sink), level))
    }

    /// Creates a logger that records into memory and returns the sink for inspection.
    pub fn in_memory(level: LogLevel) -> (Self, MemorySink) {
        let sink = MemorySink::new();
        (Self::new(Arc::new(sink.clone()), level), sink)
    }

    /// Sets the component tag of this logger.
    pub fn with_component(mut self, component: &str) -> Self {
        self.component = Some(component.to_string());
        self
    }

    /// Also prints every accepted record to stdout.
    pub fn with_console(mut self, console_output: bool) -> Self {
        self.console_output = console_output;
        self
    }

    /// Derives a logger for another component sharing sink and level.
    pub fn for_component(&self, component: &str) -> Self {
        self.clone().with_component(component)
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn component(&self) -> Option<&str> {
        self.component.as_deref()
    }

    /// Whether a record at `level` would be written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn debug(&self, message: &str) {
        self.event(LogLevel::Debug, message, &[]);
    }

    pub fn info(&self, message: &str) {
        self.event(LogLevel::Info, message, &[]);
    }

    pub fn warn(&self, message: &str) {
        self.event(LogLevel::Warn, message, &[]);
    }

    pub fn error(&self, message: &str) {
        self.event(LogLevel::Error, message, &[]);
    }

    /// Logs a message with structured `key=value` fields.
    pub fn event(&self, level: LogLevel, message: &str, fields: &[(&str, String)]) {
        if !self.enabled(level) {
            return;
        }

        let mut record = LogRecord::new(level, self.component.clone(), message.to_string());
        for (key, value) in fields {
            record = record.with_field(key, value);
        }

        if self.console_output {
            print!("{}", record.format());
        }

        self.sink.write(&record);
    }

    /// Blocks until the sink has persisted everything logged so far.
    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use tempfile::tempdir;

    #[test]
    fn test_logger_writes_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::to_file(&log_path, LogLevel::Debug).unwrap();
        logger.info("Test message");
        logger.flush().unwrap();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("INFO: Test message"));
    }

    #[test]
    fn test_logger_respects_level() {
        let (logger, sink) = Logger::in_memory(LogLevel::Warn);
        logger.debug("Debug message");
        logger.info("Info message");
        logger.warn("Warn message");
        logger.error("Error message");

        let messages: Vec<String> = sink.records().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["Warn message", "Error message"]);
        assert!(!logger.enabled(LogLevel::Info));
    }

    #[test]
    fn test_for_component_shares_sink() {
        let (logger, sink) = Logger::in_memory(LogLevel::Info);
        let encoder_log = logger.for_component("Encoder");

        logger.info("root");
        encoder_log.info("child");

        let records = sink.records();
        assert_eq!(records[0].component, None);
        assert_eq!(records[1].component.as_deref(), Some("Encoder"));
        assert_eq!(encoder_log.component(), Some("Encoder"));
        assert_eq!(encoder_log.level(), LogLevel::Info);
    }

    #[test]
    fn test_event_carries_fields() {
        let (logger, sink) = Logger::in_memory(LogLevel::Debug);
        logger.event(
            LogLevel::Warn,
            "parameter rejected",
            &[("parameter", "bitrate".to_string()), ("code", "-1".to_string())],
        );

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].field("parameter"), Some("bitrate"));
        assert_eq!(records[0].field("code"), Some("-1"));
    }

    #[test]
    fn test_logger_clone_across_threads() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::to_file(&log_path, LogLevel::Info).unwrap();
        let logger_clone = logger.clone();

        thread::spawn(move || {
            logger_clone.info("Message from thread");
        })
        .join()
        .unwrap();

        logger.info("Message from main");
        logger.flush().unwrap();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Message from thread"));
        assert!(content.contains("Message from main"));
    }
}
