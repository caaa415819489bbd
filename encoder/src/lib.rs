//! Encoder Configuration
//!
//! Applies a set of Opus encoder settings (bitrate, bandwidth, application,
//! frame duration, signal, plus optional extended controls) through an
//! encoder's control interface and reports, per setting, whether it was
//! applied, rejected or skipped.
//!
//! ```
//! use encoder_config::{configure, render, EncoderControl, EncodingParameters, Parameter};
//!
//! struct AcceptAll;
//!
//! impl EncoderControl for AcceptAll {
//!     fn apply(&mut self, _parameter: Parameter, _value: i32) -> i32 {
//!         0
//!     }
//! }
//!
//! let result = configure(&mut AcceptAll, &EncodingParameters::default()).unwrap();
//! assert!(result.success());
//! println!("{}", render(&result));
//! ```

pub mod configurator;
pub mod control;
pub mod ctl;
pub mod error;
#[cfg(feature = "libopus")]
pub mod libopus;
pub mod outcome;
pub mod params;
pub mod render;
pub mod report;
pub mod settings;

pub use configurator::configure;
pub use control::{EncoderControl, Parameter};
pub use error::{ConfigurationError, EngineError, EngineErrorKind, Result};
pub use outcome::{ConfigurationResult, OutcomeStatus, ParameterOutcome};
pub use params::{
    Application, Bandwidth, EncodingParameters, ForceChannels, FrameDuration, Signal, Step,
};
pub use render::render;
pub use settings::EncoderSettings;
