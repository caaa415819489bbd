//! JSON settings for the `opus-configure` tool and other embedders.
//!
//! ```json
//! {
//!   "encoder": {
//!     "bitrate": 24000,
//!     "bandwidth": "fullband",
//!     "application": "voip",
//!     "frame_duration_ms": 60,
//!     "signal": "voice",
//!     "dtx": true
//!   },
//!   "engine": { "sample_rate": 48000, "channels": 1 },
//!   "logging": { "log_file_path": "opus-configure.log", "log_level": "info" }
//! }
//! ```
//!
//! Every section and field is optional; missing values take the defaults below.

use serde::Deserialize;
use std::path::Path;

use crate::ctl::SUPPORTED_SAMPLE_RATES;
use crate::error::{ConfigurationError, Result};
use crate::params::{
    Application, Bandwidth, EncodingParameters, ForceChannels, FrameDuration, Signal,
};

/// Default settings file name searched by [`EncoderSettings::locate_and_load`].
pub const SETTINGS_FILE: &str = "encoder_config.json";
/// Environment variable that may point at the settings file.
pub const SETTINGS_PATH_ENV: &str = "ENCODER_CONFIG_PATH";

/// Top-level settings document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderSettings {
    pub encoder: ParameterSettings,
    pub engine: EngineSettings,
    pub logging: LoggingSettings,
}

/// Encoding parameters as written in the settings file
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParameterSettings {
    pub bitrate: i64,
    pub bandwidth: String,
    pub application: String,
    pub frame_duration_ms: f32,
    pub signal: String,
    pub complexity: Option<i32>,
    pub vbr: Option<bool>,
    pub vbr_constraint: Option<bool>,
    pub lsb_depth: Option<i32>,
    pub force_channels: Option<String>,
    pub dtx: Option<bool>,
    pub packet_loss_perc: Option<i32>,
}

impl Default for ParameterSettings {
    fn default() -> Self {
        let params = EncodingParameters::default();
        ParameterSettings {
            bitrate: params.bitrate() as i64,
            bandwidth: params.bandwidth().to_string(),
            application: params.application().to_string(),
            frame_duration_ms: params.frame_duration().millis(),
            signal: params.signal().to_string(),
            complexity: None,
            vbr: None,
            vbr_constraint: None,
            lsb_depth: None,
            force_channels: None,
            dtx: None,
            packet_loss_perc: None,
        }
    }
}

/// Parameters used to create the encoder instance itself
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSettings {
    pub sample_rate: u32,
    pub channels: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            sample_rate: 48000,
            channels: 1,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    pub log_file_path: String,
    pub log_level: String,
    pub enable_console: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            log_file_path: "opus-configure.log".to_string(),
            log_level: "info".to_string(),
            enable_console: false,
        }
    }
}

impl EncoderSettings {
    /// Decodes settings from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(config_loader::parse_json(content)?)
    }

    /// Loads settings from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(config_loader::load_json(path)?)
    }

    /// Finds [`SETTINGS_FILE`] via [`SETTINGS_PATH_ENV`], `./config/` or `./`
    /// and loads it.
    pub fn locate_and_load() -> Result<Self> {
        let path = config_loader::find_config_file(SETTINGS_FILE, SETTINGS_PATH_ENV)?;
        Self::load_from_file(path)
    }
}

impl ParameterSettings {
    /// Converts names and numbers into a validated [`EncodingParameters`].
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for unknown names, out-of-range numbers, or a
    /// non-positive bitrate.
    pub fn to_parameters(&self) -> Result<EncodingParameters> {
        let bitrate = i32::try_from(self.bitrate).map_err(|_| {
            ConfigurationError::invalid("bitrate", format!("{} is out of range", self.bitrate))
        })?;

        let mut params = EncodingParameters::new(
            bitrate,
            self.bandwidth.parse::<Bandwidth>()?,
            self.application.parse::<Application>()?,
            FrameDuration::from_millis(self.frame_duration_ms)?,
            self.signal.parse::<Signal>()?,
        );

        if let Some(complexity) = self.complexity {
            params = params.with_complexity(complexity);
        }
        if let Some(vbr) = self.vbr {
            params = params.with_vbr(vbr);
        }
        if let Some(constrained) = self.vbr_constraint {
            params = params.with_vbr_constraint(constrained);
        }
        if let Some(depth) = self.lsb_depth {
            params = params.with_lsb_depth(depth);
        }
        if let Some(ref channels) = self.force_channels {
            params = params.with_force_channels(channels.parse::<ForceChannels>()?);
        }
        if let Some(dtx) = self.dtx {
            params = params.with_dtx(dtx);
        }
        if let Some(percent) = self.packet_loss_perc {
            params = params.with_packet_loss_perc(percent);
        }

        params.validate()?;
        Ok(params)
    }
}

impl EngineSettings {
    /// Checks the sample rate and channel count accepted by libopus.
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_SAMPLE_RATES.contains(&self.sample_rate) {
            return Err(ConfigurationError::invalid(
                "sample_rate",
                format!(
                    "{} Hz is not supported (expected one of {:?})",
                    self.sample_rate, SUPPORTED_SAMPLE_RATES
                ),
            ));
        }
        if !(1..=2).contains(&self.channels) {
            return Err(ConfigurationError::invalid(
                "channels",
                format!("must be 1 or 2, got {}", self.channels),
            ));
        }
        Ok(())
    }
}
