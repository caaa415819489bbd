//! Writes configuration outcomes to a [`Logger`].
//!
//! The configurator itself never logs. Callers that want a log trail hand the
//! result to these functions.

use logging::{LogLevel, Logger};

use crate::error::ConfigurationError;
use crate::outcome::{ConfigurationResult, OutcomeStatus};

/// Logs one warning per rejected parameter, one debug line per skipped
/// parameter, and a summary (info on success, warning otherwise).
pub fn log_result(logger: &Logger, result: &ConfigurationResult) {
    for outcome in result.outcomes() {
        match &outcome.status {
            OutcomeStatus::Applied => {}
            OutcomeStatus::Rejected(err) => logger.event(
                LogLevel::Warn,
                "Encoder rejected parameter",
                &[
                    ("parameter", outcome.parameter.name().to_string()),
                    ("value", outcome.display.clone()),
                    ("code", err.code.to_string()),
                    ("reason", err.message.clone()),
                ],
            ),
            OutcomeStatus::Skipped { dependency } => logger.event(
                LogLevel::Debug,
                "Encoder parameter skipped",
                &[
                    ("parameter", outcome.parameter.name().to_string()),
                    ("dependency", dependency.name().to_string()),
                ],
            ),
        }
    }

    let total = result.outcomes().len();
    let applied = result.applied().count();
    if result.success() {
        logger.event(
            LogLevel::Info,
            "Encoder configured",
            &[("applied", applied.to_string()), ("total", total.to_string())],
        );
    } else {
        logger.event(
            LogLevel::Warn,
            "Encoder partially configured",
            &[
                ("applied", applied.to_string()),
                ("rejected", result.rejected().count().to_string()),
                ("skipped", result.skipped().count().to_string()),
                ("total", total.to_string()),
            ],
        );
    }
}

/// Logs a configuration attempt that was refused before reaching the engine.
pub fn log_invalid(logger: &Logger, err: &ConfigurationError) {
    match err {
        ConfigurationError::InvalidParameter { parameter, reason } => logger.event(
            LogLevel::Error,
            "Encoder configuration refused",
            &[("parameter", parameter.clone()), ("reason", reason.clone())],
        ),
        other => logger.error(&format!("Encoder configuration failed: {}", other)),
    }
}
