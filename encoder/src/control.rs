//! The control surface an encoder engine exposes to the configurator.

use std::fmt;

use crate::ctl::{self, request};

/// A configurable encoder setting, listed in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parameter {
    Bitrate,
    Bandwidth,
    Application,
    FrameDuration,
    Signal,
    Complexity,
    Vbr,
    VbrConstraint,
    LsbDepth,
    ForceChannels,
    Dtx,
    PacketLossPerc,
}

impl Parameter {
    /// The five settings every configuration applies, in order.
    pub const CORE: [Parameter; 5] = [
        Parameter::Bitrate,
        Parameter::Bandwidth,
        Parameter::Application,
        Parameter::FrameDuration,
        Parameter::Signal,
    ];

    /// Optional settings, applied after the core ones, in order.
    pub const EXTENDED: [Parameter; 7] = [
        Parameter::Complexity,
        Parameter::Vbr,
        Parameter::VbrConstraint,
        Parameter::LsbDepth,
        Parameter::ForceChannels,
        Parameter::Dtx,
        Parameter::PacketLossPerc,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Parameter::Bitrate => "bitrate",
            Parameter::Bandwidth => "bandwidth",
            Parameter::Application => "application",
            Parameter::FrameDuration => "frame_duration",
            Parameter::Signal => "signal",
            Parameter::Complexity => "complexity",
            Parameter::Vbr => "vbr",
            Parameter::VbrConstraint => "vbr_constraint",
            Parameter::LsbDepth => "lsb_depth",
            Parameter::ForceChannels => "force_channels",
            Parameter::Dtx => "dtx",
            Parameter::PacketLossPerc => "packet_loss_perc",
        }
    }

    /// libopus `OPUS_SET_*_REQUEST` identifier for this setting.
    pub fn request(self) -> i32 {
        match self {
            Parameter::Bitrate => request::SET_BITRATE,
            Parameter::Bandwidth => request::SET_BANDWIDTH,
            Parameter::Application => request::SET_APPLICATION,
            Parameter::FrameDuration => request::SET_EXPERT_FRAME_DURATION,
            Parameter::Signal => request::SET_SIGNAL,
            Parameter::Complexity => request::SET_COMPLEXITY,
            Parameter::Vbr => request::SET_VBR,
            Parameter::VbrConstraint => request::SET_VBR_CONSTRAINT,
            Parameter::LsbDepth => request::SET_LSB_DEPTH,
            Parameter::ForceChannels => request::SET_FORCE_CHANNELS,
            Parameter::Dtx => request::SET_DTX,
            Parameter::PacketLossPerc => request::SET_PACKET_LOSS_PERC,
        }
    }

    /// A setting that only makes sense once another one has been applied.
    pub fn depends_on(self) -> Option<Parameter> {
        match self {
            Parameter::VbrConstraint => Some(Parameter::Vbr),
            _ => None,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Control interface of an already constructed encoder.
///
/// Implementations are not expected to be thread-safe. The configurator takes
/// `&mut` access, so one handle cannot be configured from two places at once.
pub trait EncoderControl {
    /// Applies `value` to `parameter`.
    ///
    /// Returns the engine status: `>= 0` on success, a negative code on failure.
    fn apply(&mut self, parameter: Parameter, value: i32) -> i32;

    /// Human-readable text for a status code.
    fn describe_error(&self, code: i32) -> String {
        ctl::error_string(code).to_string()
    }
}

impl<E: EncoderControl + ?Sized> EncoderControl for &mut E {
    fn apply(&mut self, parameter: Parameter, value: i32) -> i32 {
        (**self).apply(parameter, value)
    }

    fn describe_error(&self, code: i32) -> String {
        (**self).describe_error(code)
    }
}

impl<E: EncoderControl + ?Sized> EncoderControl for Box<E> {
    fn apply(&mut self, parameter: Parameter, value: i32) -> i32 {
        (**self).apply(parameter, value)
    }

    fn describe_error(&self, code: i32) -> String {
        (**self).describe_error(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Accepting;

    impl EncoderControl for Accepting {
        fn apply(&mut self, _parameter: Parameter, _value: i32) -> i32 {
            0
        }
    }

    #[test]
    fn test_core_order() {
        let names: Vec<&str> = Parameter::CORE.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec!["bitrate", "bandwidth", "application", "frame_duration", "signal"]
        );
    }

    #[test]
    fn test_requests_match_libopus() {
        assert_eq!(Parameter::Bitrate.request(), 4002);
        assert_eq!(Parameter::Bandwidth.request(), 4008);
        assert_eq!(Parameter::Application.request(), 4000);
        assert_eq!(Parameter::FrameDuration.request(), 4040);
        assert_eq!(Parameter::Signal.request(), 4024);
    }

    #[test]
    fn test_only_vbr_constraint_has_dependency() {
        for parameter in Parameter::CORE.iter().chain(Parameter::EXTENDED.iter()) {
            let expected = (*parameter == Parameter::VbrConstraint).then_some(Parameter::Vbr);
            assert_eq!(parameter.depends_on(), expected, "{}", parameter);
        }
    }

    #[test]
    fn test_default_describe_error_uses_libopus_table() {
        assert_eq!(Accepting.describe_error(-1), "invalid argument");
        assert_eq!(Accepting.describe_error(-5), "request not implemented");
    }

    #[test]
    fn test_boxed_engine_forwards() {
        let mut engine: Box<dyn EncoderControl> = Box::new(Accepting);
        assert_eq!(engine.apply(Parameter::Bitrate, 24000), 0);
        assert_eq!(engine.describe_error(-7), "memory allocation failed");
    }
}
