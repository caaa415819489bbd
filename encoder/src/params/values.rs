//! Enumerated setting values and their libopus codes.

use std::fmt;
use std::str::FromStr;

use crate::ctl;
use crate::error::ConfigurationError;

/// Lower-cases `name` and drops whitespace, `-` and `_`.
fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Declares an enum of libopus values with its code, canonical name, accepted
/// aliases, and conversions from raw codes and from text.
macro_rules! opus_values {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $param:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $code:expr => $label:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value passed to the control call.
            pub fn code(self) -> i32 {
                match self {
                    $( $name::$variant => $code ),+
                }
            }

            /// Canonical lower-case name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = ConfigurationError;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|value| value.code() == code)
                    .ok_or_else(|| ConfigurationError::invalid($param, format!("unknown code {}", code)))
            }
        }

        impl FromStr for $name {
            type Err = ConfigurationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = normalize_name(s);
                $(
                    if [$label $(, $alias)*].iter().any(|name| normalize_name(name) == key) {
                        return Ok($name::$variant);
                    }
                )+
                Err(ConfigurationError::invalid($param, format!("unknown value '{}'", s)))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

opus_values! {
    /// Audio bandwidth class
    pub enum Bandwidth as "bandwidth" {
        /// 4 kHz passband
        Narrowband = ctl::OPUS_BANDWIDTH_NARROWBAND => "narrowband" | "nb",
        /// 6 kHz passband
        Mediumband = ctl::OPUS_BANDWIDTH_MEDIUMBAND => "mediumband" | "mb",
        /// 8 kHz passband
        Wideband = ctl::OPUS_BANDWIDTH_WIDEBAND => "wideband" | "wb",
        /// 12 kHz passband
        Superwideband = ctl::OPUS_BANDWIDTH_SUPERWIDEBAND => "superwideband" | "swb",
        /// 20 kHz passband
        Fullband = ctl::OPUS_BANDWIDTH_FULLBAND => "fullband" | "fb",
    }
}

opus_values! {
    /// What the encoder optimizes for
    pub enum Application as "application" {
        Voip = ctl::OPUS_APPLICATION_VOIP => "voip",
        Audio = ctl::OPUS_APPLICATION_AUDIO => "audio",
        RestrictedLowDelay = ctl::OPUS_APPLICATION_RESTRICTED_LOWDELAY
            => "restricted-lowdelay" | "lowdelay",
    }
}

opus_values! {
    /// Hint about the content being encoded
    pub enum Signal as "signal" {
        Auto = ctl::OPUS_AUTO => "auto",
        Voice = ctl::OPUS_SIGNAL_VOICE => "voice",
        Music = ctl::OPUS_SIGNAL_MUSIC => "music",
    }
}

opus_values! {
    /// Duration of one encoded frame
    pub enum FrameDuration as "frame_duration" {
        Ms2_5 = ctl::OPUS_FRAMESIZE_2_5_MS => "2.5ms" | "2.5",
        Ms5 = ctl::OPUS_FRAMESIZE_5_MS => "5ms" | "5",
        Ms10 = ctl::OPUS_FRAMESIZE_10_MS => "10ms" | "10",
        Ms20 = ctl::OPUS_FRAMESIZE_20_MS => "20ms" | "20",
        Ms40 = ctl::OPUS_FRAMESIZE_40_MS => "40ms" | "40",
        Ms60 = ctl::OPUS_FRAMESIZE_60_MS => "60ms" | "60",
        Ms80 = ctl::OPUS_FRAMESIZE_80_MS => "80ms" | "80",
        Ms100 = ctl::OPUS_FRAMESIZE_100_MS => "100ms" | "100",
        Ms120 = ctl::OPUS_FRAMESIZE_120_MS => "120ms" | "120",
    }
}

opus_values! {
    /// Forced channel count
    pub enum ForceChannels as "force_channels" {
        Auto = ctl::OPUS_AUTO => "auto",
        Mono = 1 => "mono" | "1",
        Stereo = 2 => "stereo" | "2",
    }
}

impl FrameDuration {
    /// Frame length in tenths of a millisecond.
    fn tenths(self) -> u32 {
        match self {
            FrameDuration::Ms2_5 => 25,
            FrameDuration::Ms5 => 50,
            FrameDuration::Ms10 => 100,
            FrameDuration::Ms20 => 200,
            FrameDuration::Ms40 => 400,
            FrameDuration::Ms60 => 600,
            FrameDuration::Ms80 => 800,
            FrameDuration::Ms100 => 1000,
            FrameDuration::Ms120 => 1200,
        }
    }

    pub fn millis(self) -> f32 {
        self.tenths() as f32 / 10.0
    }

    /// Looks up the frame duration for a length in milliseconds.
    pub fn from_millis(ms: f32) -> Result<Self, ConfigurationError> {
        let scaled = ms * 10.0;
        let exact = scaled.is_finite() && scaled > 0.0 && (scaled - scaled.round()).abs() < 1e-3;
        FrameDuration::ALL
            .iter()
            .copied()
            .find(|d| exact && d.tenths() == scaled.round() as u32)
            .ok_or_else(|| {
                ConfigurationError::invalid(
                    "frame_duration",
                    format!("{} ms is not a supported frame duration", ms),
                )
            })
    }

    /// Samples per channel in one frame at `sample_rate`.
    pub fn samples_per_channel(self, sample_rate: u32) -> usize {
        (sample_rate as u64 * self.tenths() as u64 / 10_000) as usize
    }
}
