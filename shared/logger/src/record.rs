//! A single log record and its line format.

use crate::log_level::LogLevel;
use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// One log entry with optional component and structured fields.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<String>,
    pub message: String,
    /// Ordered `key=value` pairs appended after the message.
    pub fields: Vec<(String, String)>,
}

impl LogRecord {
    /// Creates a record stamped with the current local time.
    pub fn new(level: LogLevel, component: Option<String>, message: String) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            level,
            component,
            message,
            fields: Vec::new(),
        }
    }

    /// Appends a structured field.
    pub fn with_field(mut self, key: &str, value: impl ToString) -> Self {
        self.fields.push((key.to_string(), value.to_string()));
        self
    }

    /// Returns the value of the first field named `key`.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Formats the record as one line:
    /// `[timestamp] LEVEL [component: c]: message key=value ...\n`
    ///
    /// Values that are empty or contain whitespace, `=` or `"` are quoted.
    pub fn format(&self) -> String {
        let mut line = format!("[{}] {}", self.timestamp, self.level.as_str());
        if let Some(ref component) = self.component {
            line.push_str(&format!(" [component: {}]", component));
        }
        line.push_str(": ");
        line.push_str(&self.message);

        for (key, value) in &self.fields {
            if needs_quotes(value) {
                line.push_str(&format!(" {}={:?}", key, value));
            } else {
                line.push_str(&format!(" {}={}", key, value));
            }
        }

        line.push('\n');
        line
    }
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty() || value.contains(|c: char| c.is_whitespace() || c == '=' || c == '"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_component() {
        let record = LogRecord::new(LogLevel::Error, None, "Connection failed".to_string());
        let formatted = record.format();

        assert!(formatted.contains("] ERROR: Connection failed"));
        assert!(formatted.ends_with('\n'));
    }

    #[test]
    fn test_record_with_component() {
        let record = LogRecord::new(
            LogLevel::Info,
            Some("Encoder".to_string()),
            "configured".to_string(),
        );

        assert!(record.format().contains("INFO [component: Encoder]: configured"));
    }

    #[test]
    fn test_fields_are_appended_in_order() {
        let record = LogRecord::new(LogLevel::Warn, None, "rejected".to_string())
            .with_field("parameter", "bandwidth")
            .with_field("code", -1);

        assert!(record.format().contains("rejected parameter=bandwidth code=-1\n"));
        assert_eq!(record.field("code"), Some("-1"));
        assert_eq!(record.field("missing"), None);
    }

    #[test]
    fn test_field_values_with_spaces_are_quoted() {
        let record = LogRecord::new(LogLevel::Warn, None, "rejected".to_string())
            .with_field("reason", "invalid argument");

        assert!(record.format().contains("reason=\"invalid argument\""));
    }

    #[test]
    fn test_field_values_with_separators_are_quoted() {
        let record = LogRecord::new(LogLevel::Warn, None, "rejected".to_string())
            .with_field("value", "a=b")
            .with_field("reason", "say \"no\"")
            .with_field("empty", "");

        let line = record.format();
        assert!(line.contains(" value=\"a=b\""));
        assert!(line.contains(" reason=\"say \\\"no\\\"\""));
        assert!(line.contains(" empty=\"\"\n"));
    }

    #[test]
    fn test_timestamp_format() {
        let record = LogRecord::new(LogLevel::Info, None, "Test".to_string());
        let ts = &record.timestamp;

        // YYYY-MM-DD HH:MM:SS.mmm
        assert_eq!(ts.len(), 23);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[13..14], ":");
        assert_eq!(&ts[19..20], ".");
    }
}
