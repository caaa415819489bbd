//! # Config Loader
//!
//! Locates configuration files on disk and decodes JSON content.
//!
//! ```no_run
//! use config_loader::{find_config_file, load_json};
//! use serde::de::DeserializeOwned;
//!
//! fn load<T: DeserializeOwned>() -> config_loader::Result<T> {
//!     let path = find_config_file("encoder_config.json", "ENCODER_CONFIG_PATH")?;
//!     load_json(&path)
//! }
//! ```

pub mod error;

pub use error::{ConfigError, Result};

use serde::de::DeserializeOwned;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a configuration file into a string without interpreting it.
///
/// # Errors
///
/// `FileNotFound` if `path` does not exist, `ReadError` if it cannot be read.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    fs::read_to_string(path)
        .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))
}

/// Looks for a configuration file in the usual places.
///
/// Search order:
/// 1. The path held by the environment variable `env_var` (if set and present)
/// 2. `./config/{filename}`
/// 3. `./{filename}`
pub fn find_config_file(filename: &str, env_var: &str) -> Result<PathBuf> {
    if let Ok(path) = env::var(env_var) {
        let path_buf = PathBuf::from(&path);
        if path_buf.exists() {
            return Ok(path_buf);
        }
    }

    find_in(Path::new("."), filename).ok_or_else(|| {
        ConfigError::FileNotFound(format!(
            "'{}' not found. Searched: ${}, ./config/{}, ./{}",
            filename, env_var, filename, filename
        ))
    })
}

/// Searches `base/config/{filename}` then `base/{filename}`.
fn find_in(base: &Path, filename: &str) -> Option<PathBuf> {
    [base.join("config").join(filename), base.join(filename)]
        .into_iter()
        .find(|candidate| candidate.exists())
}

/// Decodes a JSON document into `T`.
pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(ConfigError::from)
}

/// Reads and decodes a JSON configuration file.
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = load_config_file(path)?;
    parse_json(&content)
}
