//! Encoder parameter set.
//!
//! [`EncodingParameters`] is an immutable value. The `with_*` methods return a
//! modified copy. Validation is separate from construction. That way an
//! out-of-range request can still be built, and `configure` rejects it before
//! any control call.

mod values;

pub use values::{Application, Bandwidth, ForceChannels, FrameDuration, Signal};

use crate::control::Parameter;
use crate::error::{ConfigurationError, Result};

const COMPLEXITY_RANGE: std::ops::RangeInclusive<i32> = 0..=10;
const LSB_DEPTH_RANGE: std::ops::RangeInclusive<i32> = 8..=24;
const PACKET_LOSS_RANGE: std::ops::RangeInclusive<i32> = 0..=100;

/// Desired encoder configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingParameters {
    bitrate: i32,
    bandwidth: Bandwidth,
    application: Application,
    frame_duration: FrameDuration,
    signal: Signal,
    extended: ExtendedControls,
}

/// Optional controls; `None` means "leave the engine default alone".
#[derive(Debug, Clone, Default, PartialEq)]
struct ExtendedControls {
    complexity: Option<i32>,
    vbr: Option<bool>,
    vbr_constraint: Option<bool>,
    lsb_depth: Option<i32>,
    force_channels: Option<ForceChannels>,
    dtx: Option<bool>,
    packet_loss_perc: Option<i32>,
}

/// One control call derived from the parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub parameter: Parameter,
    /// Raw value passed to the engine.
    pub value: i32,
    /// Human-readable form of `value`.
    pub display: String,
}

impl Step {
    fn new(parameter: Parameter, value: i32, display: impl Into<String>) -> Self {
        Self {
            parameter,
            value,
            display: display.into(),
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

impl EncodingParameters {
    /// Creates a parameter set with the five core settings and no extended controls.
    ///
    /// # Arguments
    ///
    /// * `bitrate` - Target bitrate in bits per second (must be positive)
    /// * `bandwidth` - Audio bandwidth class
    /// * `application` - Optimization target
    /// * `frame_duration` - Length of one encoded frame
    /// * `signal` - Content hint
    pub fn new(
        bitrate: i32,
        bandwidth: Bandwidth,
        application: Application,
        frame_duration: FrameDuration,
        signal: Signal,
    ) -> Self {
        Self {
            bitrate,
            bandwidth,
            application,
            frame_duration,
            signal,
            extended: ExtendedControls::default(),
        }
    }

    pub fn bitrate(&self) -> i32 {
        self.bitrate
    }

    pub fn bandwidth(&self) -> Bandwidth {
        self.bandwidth
    }

    pub fn application(&self) -> Application {
        self.application
    }

    pub fn frame_duration(&self) -> FrameDuration {
        self.frame_duration
    }

    pub fn signal(&self) -> Signal {
        self.signal
    }

    pub fn complexity(&self) -> Option<i32> {
        self.extended.complexity
    }

    pub fn vbr(&self) -> Option<bool> {
        self.extended.vbr
    }

    pub fn vbr_constraint(&self) -> Option<bool> {
        self.extended.vbr_constraint
    }

    pub fn lsb_depth(&self) -> Option<i32> {
        self.extended.lsb_depth
    }

    pub fn force_channels(&self) -> Option<ForceChannels> {
        self.extended.force_channels
    }

    pub fn dtx(&self) -> Option<bool> {
        self.extended.dtx
    }

    pub fn packet_loss_perc(&self) -> Option<i32> {
        self.extended.packet_loss_perc
    }

    pub fn with_bitrate(mut self, bitrate: i32) -> Self {
        self.bitrate = bitrate;
        self
    }

    pub fn with_bandwidth(mut self, bandwidth: Bandwidth) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    pub fn with_application(mut self, application: Application) -> Self {
        self.application = application;
        self
    }

    pub fn with_frame_duration(mut self, frame_duration: FrameDuration) -> Self {
        self.frame_duration = frame_duration;
        self
    }

    pub fn with_signal(mut self, signal: Signal) -> Self {
        self.signal = signal;
        self
    }

    /// Encoder complexity, 0 (fastest) to 10 (best quality).
    pub fn with_complexity(mut self, complexity: i32) -> Self {
        self.extended.complexity = Some(complexity);
        self
    }

    pub fn with_vbr(mut self, vbr: bool) -> Self {
        self.extended.vbr = Some(vbr);
        self
    }

    /// Constrained VBR. Skipped if VBR is also set here and the engine rejects it.
    pub fn with_vbr_constraint(mut self, constrained: bool) -> Self {
        self.extended.vbr_constraint = Some(constrained);
        self
    }

    /// Input bit depth hint, 8 to 24.
    pub fn with_lsb_depth(mut self, depth: i32) -> Self {
        self.extended.lsb_depth = Some(depth);
        self
    }

    pub fn with_force_channels(mut self, channels: ForceChannels) -> Self {
        self.extended.force_channels = Some(channels);
        self
    }

    pub fn with_dtx(mut self, dtx: bool) -> Self {
        self.extended.dtx = Some(dtx);
        self
    }

    /// Expected packet loss, 0 to 100 percent.
    pub fn with_packet_loss_perc(mut self, percent: i32) -> Self {
        self.extended.packet_loss_perc = Some(percent);
        self
    }

    /// Checks every local invariant.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` naming the first offending setting.
    pub fn validate(&self) -> Result<()> {
        if self.bitrate <= 0 {
            return Err(ConfigurationError::invalid(
                Parameter::Bitrate.name(),
                format!("must be positive, got {}", self.bitrate),
            ));
        }

        let ranges = [
            (Parameter::Complexity, self.extended.complexity, COMPLEXITY_RANGE),
            (Parameter::LsbDepth, self.extended.lsb_depth, LSB_DEPTH_RANGE),
            (Parameter::PacketLossPerc, self.extended.packet_loss_perc, PACKET_LOSS_RANGE),
        ];
        for (parameter, value, range) in ranges {
            let Some(value) = value else { continue };
            if !range.contains(&value) {
                return Err(ConfigurationError::invalid(
                    parameter.name(),
                    format!(
                        "must be between {} and {}, got {}",
                        range.start(),
                        range.end(),
                        value
                    ),
                ));
            }
        }

        Ok(())
    }

    /// Control calls in application order: the five core settings, then the
    /// extended controls that are set.
    pub fn steps(&self) -> Vec<Step> {
        let mut steps = vec![
            Step::new(
                Parameter::Bitrate,
                self.bitrate,
                format!("{} bps", self.bitrate),
            ),
            Step::new(
                Parameter::Bandwidth,
                self.bandwidth.code(),
                self.bandwidth.as_str(),
            ),
            Step::new(
                Parameter::Application,
                self.application.code(),
                self.application.as_str(),
            ),
            Step::new(
                Parameter::FrameDuration,
                self.frame_duration.code(),
                self.frame_duration.as_str(),
            ),
            Step::new(Parameter::Signal, self.signal.code(), self.signal.as_str()),
        ];

        let ext = &self.extended;
        if let Some(complexity) = ext.complexity {
            steps.push(Step::new(Parameter::Complexity, complexity, complexity.to_string()));
        }
        if let Some(vbr) = ext.vbr {
            steps.push(Step::new(Parameter::Vbr, vbr as i32, on_off(vbr)));
        }
        if let Some(constrained) = ext.vbr_constraint {
            steps.push(Step::new(
                Parameter::VbrConstraint,
                constrained as i32,
                on_off(constrained),
            ));
        }
        if let Some(depth) = ext.lsb_depth {
            steps.push(Step::new(Parameter::LsbDepth, depth, format!("{} bits", depth)));
        }
        if let Some(channels) = ext.force_channels {
            steps.push(Step::new(
                Parameter::ForceChannels,
                channels.code(),
                channels.as_str(),
            ));
        }
        if let Some(dtx) = ext.dtx {
            steps.push(Step::new(Parameter::Dtx, dtx as i32, on_off(dtx)));
        }
        if let Some(percent) = ext.packet_loss_perc {
            steps.push(Step::new(
                Parameter::PacketLossPerc,
                percent,
                format!("{}%", percent),
            ));
        }

        steps
    }
}

/// Voice chat profile: 24 kbps, fullband, VoIP, 60 ms frames, voice signal.
impl Default for EncodingParameters {
    fn default() -> Self {
        Self::new(
            24000,
            Bandwidth::Fullband,
            Application::Voip,
            FrameDuration::Ms60,
            Signal::Voice,
        )
    }
}
