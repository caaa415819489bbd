//! Per-parameter outcomes and the overall configuration result.

use crate::control::Parameter;
use crate::error::EngineError;

/// What happened to one parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// The engine accepted the value.
    Applied,
    /// The engine returned a negative status.
    Rejected(EngineError),
    /// Not attempted because `dependency` was not applied.
    Skipped { dependency: Parameter },
}

impl OutcomeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeStatus::Applied => "applied",
            OutcomeStatus::Rejected(_) => "rejected",
            OutcomeStatus::Skipped { .. } => "skipped",
        }
    }
}

/// Record of one attempted control call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterOutcome {
    pub parameter: Parameter,
    /// Raw value sent (or that would have been sent) to the engine.
    pub value: i32,
    /// Human-readable form of `value`.
    pub display: String,
    pub status: OutcomeStatus,
}

impl ParameterOutcome {
    pub fn is_applied(&self) -> bool {
        self.status == OutcomeStatus::Applied
    }

    /// The engine's error when the parameter was rejected.
    pub fn rejection(&self) -> Option<&EngineError> {
        match &self.status {
            OutcomeStatus::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

/// Outcomes of one configuration attempt, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationResult {
    outcomes: Vec<ParameterOutcome>,
}

impl ConfigurationResult {
    pub(crate) fn push(&mut self, outcome: ParameterOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[ParameterOutcome] {
        &self.outcomes
    }

    /// True iff every attempted parameter was applied.
    pub fn success(&self) -> bool {
        self.outcomes.iter().all(ParameterOutcome::is_applied)
    }

    /// Outcome for `parameter`, if it was part of this attempt.
    pub fn outcome(&self, parameter: Parameter) -> Option<&ParameterOutcome> {
        self.outcomes.iter().find(|o| o.parameter == parameter)
    }

    pub fn is_applied(&self, parameter: Parameter) -> bool {
        self.outcome(parameter).is_some_and(ParameterOutcome::is_applied)
    }

    pub fn applied(&self) -> impl Iterator<Item = &ParameterOutcome> {
        self.outcomes.iter().filter(|o| o.is_applied())
    }

    pub fn rejected(&self) -> impl Iterator<Item = &ParameterOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, OutcomeStatus::Rejected(_)))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &ParameterOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, OutcomeStatus::Skipped { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(parameter: Parameter, status: OutcomeStatus) -> ParameterOutcome {
        ParameterOutcome {
            parameter,
            value: 0,
            display: String::new(),
            status,
        }
    }

    #[test]
    fn test_success_requires_every_outcome_applied() {
        let mut result = ConfigurationResult::default();
        result.push(outcome(Parameter::Bitrate, OutcomeStatus::Applied));
        result.push(outcome(Parameter::Bandwidth, OutcomeStatus::Applied));
        assert!(result.success());

        result.push(outcome(
            Parameter::Signal,
            OutcomeStatus::Rejected(EngineError::from_code(-1)),
        ));
        assert!(!result.success());
    }

    #[test]
    fn test_skipped_counts_as_failure() {
        let mut result = ConfigurationResult::default();
        result.push(outcome(
            Parameter::VbrConstraint,
            OutcomeStatus::Skipped {
                dependency: Parameter::Vbr,
            },
        ));

        assert!(!result.success());
        assert_eq!(result.skipped().count(), 1);
        assert_eq!(result.outcomes()[0].status.label(), "skipped");
    }

    #[test]
    fn test_lookup_and_filters() {
        let mut result = ConfigurationResult::default();
        result.push(outcome(Parameter::Bitrate, OutcomeStatus::Applied));
        result.push(outcome(
            Parameter::Bandwidth,
            OutcomeStatus::Rejected(EngineError::new(-5, "request not implemented")),
        ));

        assert!(result.is_applied(Parameter::Bitrate));
        assert!(!result.is_applied(Parameter::Bandwidth));
        assert!(!result.is_applied(Parameter::Signal));
        assert_eq!(result.applied().count(), 1);

        let rejected: Vec<_> = result.rejected().collect();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].rejection().map(|e| e.code), Some(-5));
        assert!(result.outcome(Parameter::Bitrate).unwrap().rejection().is_none());
    }
}
