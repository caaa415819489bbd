use encoder_config::libopus::{self, LibopusEncoder};
use encoder_config::report;
use encoder_config::settings::{EncoderSettings, LoggingSettings};
use encoder_config::{configure, render};
use logging::{LogLevel, Logger};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let settings = load_settings();
    let logger = initialize_logger(&settings.logging);

    let version = libopus::version();
    println!("opus-configure - {}", version);
    logger.info(&format!("Using {}", version));

    let code = run(&settings, &logger);
    if let Err(e) = logger.flush() {
        eprintln!("Failed to flush log: {}", e);
    }
    code
}

/// Creates the encoder, applies the configured parameters and reports the outcome.
fn run(settings: &EncoderSettings, main_logger: &Logger) -> ExitCode {
    let logger = main_logger.for_component("Encoder");

    let params = match settings.encoder.to_parameters() {
        Ok(params) => params,
        Err(e) => {
            eprintln!("{}", e);
            report::log_invalid(&logger, &e);
            return ExitCode::FAILURE;
        }
    };

    let mut encoder = match LibopusEncoder::new(&settings.engine, params.application()) {
        Ok(encoder) => encoder,
        Err(e) => {
            eprintln!("Failed to create encoder: {}", e);
            logger.error(&format!("Failed to create encoder: {}", e));
            return ExitCode::FAILURE;
        }
    };
    logger.info(&format!(
        "Encoder created: {} Hz, {} ch",
        encoder.sample_rate(),
        encoder.channels()
    ));

    match configure(&mut encoder, &params) {
        Ok(result) => {
            print!("{}", render(&result));
            report::log_result(&logger, &result);
            if result.success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            report::log_invalid(&logger, &e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the main logger from configuration
fn initialize_logger(config: &LoggingSettings) -> Logger {
    let level = config.log_level.parse().unwrap_or_else(|e| {
        eprintln!("{}; using INFO", e);
        LogLevel::Info
    });

    let logger = match Logger::to_file(Path::new(&config.log_file_path), level) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", config.log_file_path, e);
            eprintln!("Logging to memory only.");
            Logger::in_memory(level).0
        }
    };
    logger
        .with_component("Main")
        .with_console(config.enable_console)
}

/// Loads settings, in this order:
/// 1. `CONFIG` environment variable holding a JSON document
/// 2. First command-line argument as a file path
/// 3. `encoder_config.json` located via `ENCODER_CONFIG_PATH`, `./config/` or `./`
///
/// Falls back to defaults when nothing usable is found.
fn load_settings() -> EncoderSettings {
    if let Ok(json_str) = std::env::var("CONFIG") {
        match EncoderSettings::from_json(&json_str) {
            Ok(settings) => {
                println!("Settings loaded from CONFIG env as JSON string");
                return settings;
            }
            Err(e) => eprintln!("CONFIG env is not valid: {}", e),
        }
    }

    let loaded = match std::env::args().nth(1) {
        Some(path) => EncoderSettings::load_from_file(&path).map(|s| (s, path)),
        None => EncoderSettings::locate_and_load().map(|s| (s, "search path".to_string())),
    };

    match loaded {
        Ok((settings, source)) => {
            println!("Settings loaded from: {}", source);
            settings
        }
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            eprintln!("Using default values...");
            EncoderSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_falls_back_to_memory_with_component() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a log file.
        let config = LoggingSettings {
            log_file_path: dir.path().display().to_string(),
            log_level: "debug".to_string(),
            enable_console: false,
        };

        let logger = initialize_logger(&config);

        assert_eq!(logger.component(), Some("Main"));
        assert_eq!(logger.level(), LogLevel::Debug);
    }

    #[test]
    fn test_logger_file_and_unknown_level() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingSettings {
            log_file_path: dir.path().join("run.log").display().to_string(),
            log_level: "chatty".to_string(),
            enable_console: false,
        };

        let logger = initialize_logger(&config);

        assert_eq!(logger.component(), Some("Main"));
        assert_eq!(logger.level(), LogLevel::Info);
    }
}
