//! [`EncoderControl`] over a native libopus encoder.

use std::ffi::CStr;
use std::os::raw::c_int;
use std::ptr::NonNull;

use audiopus_sys as ffi;

use crate::control::{EncoderControl, Parameter};
use crate::error::{EngineError, Result};
use crate::params::Application;
use crate::settings::EngineSettings;

/// Owned libopus encoder state.
///
/// Not `Sync`: libopus encoder state must not be touched from two threads at once.
pub struct LibopusEncoder {
    raw: NonNull<ffi::OpusEncoder>,
    sample_rate: u32,
    channels: u32,
}

// The encoder state is plain heap memory with no thread affinity.
unsafe impl Send for LibopusEncoder {}

impl LibopusEncoder {
    /// Creates an encoder with `opus_encoder_create`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for an unsupported sample rate or channel count,
    /// `Engine` if libopus fails to allocate or initialize the state.
    pub fn new(engine: &EngineSettings, application: Application) -> Result<Self> {
        engine.validate()?;

        let mut error: c_int = 0;
        // SAFETY: arguments were validated above and `error` outlives the call.
        let raw = unsafe {
            ffi::opus_encoder_create(
                engine.sample_rate as i32,
                engine.channels as c_int,
                application.code() as c_int,
                &mut error,
            )
        };

        match NonNull::new(raw) {
            Some(raw) if error >= 0 => Ok(Self {
                raw,
                sample_rate: engine.sample_rate,
                channels: engine.channels,
            }),
            Some(raw) => {
                // SAFETY: `raw` came from opus_encoder_create and is not used again.
                unsafe { ffi::opus_encoder_destroy(raw.as_ptr()) };
                Err(EngineError::new(error, strerror(error)).into())
            }
            None => Err(EngineError::new(error, strerror(error)).into()),
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u32 {
        self.channels
    }
}

impl EncoderControl for LibopusEncoder {
    fn apply(&mut self, parameter: Parameter, value: i32) -> i32 {
        // SAFETY: every request handled here is an `OPUS_SET_*` taking one
        // opus_int32 argument, and `self.raw` is a live encoder.
        unsafe {
            ffi::opus_encoder_ctl(
                self.raw.as_ptr(),
                parameter.request() as c_int,
                value,
            )
        }
    }

    fn describe_error(&self, code: i32) -> String {
        strerror(code)
    }
}

impl Drop for LibopusEncoder {
    fn drop(&mut self) {
        // SAFETY: `raw` was created by opus_encoder_create and is dropped once.
        unsafe { ffi::opus_encoder_destroy(self.raw.as_ptr()) };
    }
}

/// The linked libopus version string, e.g. `libopus 1.3.1`.
pub fn version() -> String {
    // SAFETY: libopus returns a pointer to a static NUL-terminated string.
    unsafe { CStr::from_ptr(ffi::opus_get_version_string()) }
        .to_string_lossy()
        .into_owned()
}

fn strerror(code: i32) -> String {
    // SAFETY: opus_strerror returns a static NUL-terminated string for any input.
    unsafe { CStr::from_ptr(ffi::opus_strerror(code as c_int)) }
        .to_string_lossy()
        .into_owned()
}
