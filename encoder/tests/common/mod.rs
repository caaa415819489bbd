//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use encoder_config::ctl::status;
use encoder_config::{EncoderControl, Parameter};
use std::collections::HashMap;

/// Engine that records every control call and answers from a script.
///
/// Parameters without a scripted status are accepted.
#[derive(Default)]
pub struct ScriptedEncoder {
    pub calls: Vec<(Parameter, i32)>,
    responses: HashMap<Parameter, i32>,
}

impl ScriptedEncoder {
    pub fn accepting() -> Self {
        Self::default()
    }

    /// Answers `code` whenever `parameter` is applied.
    pub fn respond(mut self, parameter: Parameter, code: i32) -> Self {
        self.responses.insert(parameter, code);
        self
    }

    pub fn rejecting(parameter: Parameter) -> Self {
        Self::default().respond(parameter, status::BAD_ARG)
    }

    pub fn called_parameters(&self) -> Vec<Parameter> {
        self.calls.iter().map(|(p, _)| *p).collect()
    }
}

impl EncoderControl for ScriptedEncoder {
    fn apply(&mut self, parameter: Parameter, value: i32) -> i32 {
        self.calls.push((parameter, value));
        self.responses.get(&parameter).copied().unwrap_or(status::OK)
    }
}

/// Engine with its own error vocabulary, to check messages pass through untouched.
pub struct VendorEncoder;

impl EncoderControl for VendorEncoder {
    fn apply(&mut self, parameter: Parameter, _value: i32) -> i32 {
        match parameter {
            Parameter::Signal => -1234,
            _ => status::OK,
        }
    }

    fn describe_error(&self, code: i32) -> String {
        format!("vendor failure #{}", -code)
    }
}
