//! Applies an [`EncodingParameters`] set to an encoder.

use crate::control::EncoderControl;
use crate::error::{EngineError, Result};
use crate::outcome::{ConfigurationResult, OutcomeStatus, ParameterOutcome};
use crate::params::{EncodingParameters, Step};

/// Applies `params` to `encoder` and reports what happened to each setting.
///
/// Settings are applied in the order given by [`EncodingParameters::steps`].
/// A rejected setting is recorded and the remaining ones are still attempted.
/// A setting whose dependency was attempted in the same call but not applied
/// is recorded as skipped and never reaches the engine.
///
/// The encoder is borrowed, never created or dropped here. No logging or other
/// I/O happens; presentation lives in the `render` and `report` modules.
///
/// # Errors
///
/// `InvalidParameter` if `params` fails validation. In that case no control
/// call has been made.
pub fn configure<E>(encoder: &mut E, params: &EncodingParameters) -> Result<ConfigurationResult>
where
    E: EncoderControl + ?Sized,
{
    params.validate()?;

    let mut result = ConfigurationResult::default();
    for step in params.steps() {
        let blocked_by = step
            .parameter
            .depends_on()
            .filter(|dep| result.outcome(*dep).is_some_and(|o| !o.is_applied()));

        let status = match blocked_by {
            Some(dependency) => OutcomeStatus::Skipped { dependency },
            None => apply_step(encoder, &step),
        };

        result.push(ParameterOutcome {
            parameter: step.parameter,
            value: step.value,
            display: step.display,
            status,
        });
    }

    Ok(result)
}

fn apply_step<E: EncoderControl + ?Sized>(encoder: &mut E, step: &Step) -> OutcomeStatus {
    let code = encoder.apply(step.parameter, step.value);
    if code < 0 {
        OutcomeStatus::Rejected(EngineError::new(code, encoder.describe_error(code)))
    } else {
        OutcomeStatus::Applied
    }
}
