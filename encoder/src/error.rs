//! Error types for encoder configuration.
//!
//! Two kinds of failure exist. A [`ConfigurationError`] stops a request before
//! the engine is touched. An [`EngineError`] is what the engine answered for a
//! single control call. The configurator records it per parameter and does not
//! return it as an error.

use config_loader::ConfigError;
use std::fmt;

use crate::ctl::{self, status};

pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Error that prevents a configuration attempt from running
#[derive(Debug)]
pub enum ConfigurationError {
    /// A local precondition failed; no control call was issued
    InvalidParameter { parameter: String, reason: String },
    /// The settings file could not be located, read or decoded
    Settings(ConfigError),
    /// The engine could not be created
    Engine(EngineError),
}

impl ConfigurationError {
    pub(crate) fn invalid(parameter: &str, reason: impl Into<String>) -> Self {
        ConfigurationError::InvalidParameter {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::InvalidParameter { parameter, reason } => {
                write!(f, "Invalid parameter '{}': {}", parameter, reason)
            }
            ConfigurationError::Settings(err) => write!(f, "Settings error: {}", err),
            ConfigurationError::Engine(err) => write!(f, "Engine error: {}", err),
        }
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigurationError::Settings(err) => Some(err),
            ConfigurationError::Engine(err) => Some(err),
            ConfigurationError::InvalidParameter { .. } => None,
        }
    }
}

impl From<ConfigError> for ConfigurationError {
    fn from(err: ConfigError) -> Self {
        ConfigurationError::Settings(err)
    }
}

impl From<EngineError> for ConfigurationError {
    fn from(err: EngineError) -> Self {
        ConfigurationError::Engine(err)
    }
}

/// Classification of an engine status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorKind {
    BadArgument,
    BufferTooSmall,
    InternalError,
    InvalidPacket,
    Unimplemented,
    InvalidState,
    AllocFail,
    Unknown,
}

/// A negative status returned by the engine, with the engine's own message.
///
/// Both are kept exactly as the engine reported them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    pub code: i32,
    pub message: String,
}

impl EngineError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Builds an error whose message comes from the standard libopus table.
    pub fn from_code(code: i32) -> Self {
        Self::new(code, ctl::error_string(code))
    }

    pub fn kind(&self) -> EngineErrorKind {
        match self.code {
            status::BAD_ARG => EngineErrorKind::BadArgument,
            status::BUFFER_TOO_SMALL => EngineErrorKind::BufferTooSmall,
            status::INTERNAL_ERROR => EngineErrorKind::InternalError,
            status::INVALID_PACKET => EngineErrorKind::InvalidPacket,
            status::UNIMPLEMENTED => EngineErrorKind::Unimplemented,
            status::INVALID_STATE => EngineErrorKind::InvalidState,
            status::ALLOC_FAIL => EngineErrorKind::AllocFail,
            _ => EngineErrorKind::Unknown,
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = ConfigurationError::invalid("bitrate", "must be positive, got -1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'bitrate': must be positive, got -1"
        );
    }

    #[test]
    fn test_engine_error_display_keeps_code() {
        let err = EngineError::new(-1, "invalid argument");
        assert_eq!(err.to_string(), "invalid argument (-1)");
    }

    #[test]
    fn test_engine_error_kind() {
        assert_eq!(EngineError::from_code(-1).kind(), EngineErrorKind::BadArgument);
        assert_eq!(EngineError::from_code(-5).kind(), EngineErrorKind::Unimplemented);
        assert_eq!(EngineError::from_code(-6).kind(), EngineErrorKind::InvalidState);
        assert_eq!(EngineError::from_code(-7).kind(), EngineErrorKind::AllocFail);
        assert_eq!(EngineError::from_code(-99).kind(), EngineErrorKind::Unknown);
    }

    #[test]
    fn test_engine_error_kind_does_not_alter_message() {
        let err = EngineError::new(-1, "engine specific text");
        assert_eq!(err.kind(), EngineErrorKind::BadArgument);
        assert_eq!(err.message, "engine specific text");
    }

    #[test]
    fn test_settings_error_conversion() {
        let err: ConfigurationError = ConfigError::FileNotFound("x.json".to_string()).into();
        assert!(matches!(err, ConfigurationError::Settings(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
