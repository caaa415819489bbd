//! Numeric libopus control identifiers, value codes and status codes.
//!
//! These mirror `opus_defines.h` and are part of the stable libopus ABI.

/// Control request identifiers (`OPUS_SET_*_REQUEST`)
pub mod request {
    pub const SET_APPLICATION: i32 = 4000;
    pub const SET_BITRATE: i32 = 4002;
    pub const SET_VBR: i32 = 4006;
    pub const SET_BANDWIDTH: i32 = 4008;
    pub const SET_COMPLEXITY: i32 = 4010;
    pub const SET_PACKET_LOSS_PERC: i32 = 4014;
    pub const SET_DTX: i32 = 4016;
    pub const SET_VBR_CONSTRAINT: i32 = 4020;
    pub const SET_FORCE_CHANNELS: i32 = 4022;
    pub const SET_SIGNAL: i32 = 4024;
    pub const SET_LSB_DEPTH: i32 = 4036;
    pub const SET_EXPERT_FRAME_DURATION: i32 = 4040;
}

/// Value meaning "let the encoder decide".
pub const OPUS_AUTO: i32 = -1000;

pub const OPUS_APPLICATION_VOIP: i32 = 2048;
pub const OPUS_APPLICATION_AUDIO: i32 = 2049;
pub const OPUS_APPLICATION_RESTRICTED_LOWDELAY: i32 = 2051;

pub const OPUS_SIGNAL_VOICE: i32 = 3001;
pub const OPUS_SIGNAL_MUSIC: i32 = 3002;

pub const OPUS_BANDWIDTH_NARROWBAND: i32 = 1101;
pub const OPUS_BANDWIDTH_MEDIUMBAND: i32 = 1102;
pub const OPUS_BANDWIDTH_WIDEBAND: i32 = 1103;
pub const OPUS_BANDWIDTH_SUPERWIDEBAND: i32 = 1104;
pub const OPUS_BANDWIDTH_FULLBAND: i32 = 1105;

pub const OPUS_FRAMESIZE_2_5_MS: i32 = 5001;
pub const OPUS_FRAMESIZE_5_MS: i32 = 5002;
pub const OPUS_FRAMESIZE_10_MS: i32 = 5003;
pub const OPUS_FRAMESIZE_20_MS: i32 = 5004;
pub const OPUS_FRAMESIZE_40_MS: i32 = 5005;
pub const OPUS_FRAMESIZE_60_MS: i32 = 5006;
pub const OPUS_FRAMESIZE_80_MS: i32 = 5007;
pub const OPUS_FRAMESIZE_100_MS: i32 = 5008;
pub const OPUS_FRAMESIZE_120_MS: i32 = 5009;

/// Status codes returned by control calls
pub mod status {
    pub const OK: i32 = 0;
    pub const BAD_ARG: i32 = -1;
    pub const BUFFER_TOO_SMALL: i32 = -2;
    pub const INTERNAL_ERROR: i32 = -3;
    pub const INVALID_PACKET: i32 = -4;
    pub const UNIMPLEMENTED: i32 = -5;
    pub const INVALID_STATE: i32 = -6;
    pub const ALLOC_FAIL: i32 = -7;
}

/// Sample rates accepted by `opus_encoder_create`.
pub const SUPPORTED_SAMPLE_RATES: [u32; 5] = [8000, 12000, 16000, 24000, 48000];

/// Standard libopus text for a status code (same table as `opus_strerror`).
pub fn error_string(code: i32) -> &'static str {
    match code {
        status::OK => "success",
        status::BAD_ARG => "invalid argument",
        status::BUFFER_TOO_SMALL => "buffer too small",
        status::INTERNAL_ERROR => "internal error",
        status::INVALID_PACKET => "corrupted stream",
        status::UNIMPLEMENTED => "request not implemented",
        status::INVALID_STATE => "invalid state",
        status::ALLOC_FAIL => "memory allocation failed",
        _ => "unknown error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_string_known_codes() {
        assert_eq!(error_string(status::BAD_ARG), "invalid argument");
        assert_eq!(error_string(status::UNIMPLEMENTED), "request not implemented");
        assert_eq!(error_string(status::ALLOC_FAIL), "memory allocation failed");
        assert_eq!(error_string(status::INVALID_STATE), "invalid state");
    }

    #[test]
    fn test_error_string_unknown_codes() {
        assert_eq!(error_string(-42), "unknown error");
        assert_eq!(error_string(7), "unknown error");
    }
}
