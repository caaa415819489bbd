//! Plain-text rendering of a [`ConfigurationResult`].

use std::fmt::Write;

use crate::outcome::{ConfigurationResult, OutcomeStatus};

/// Width of the parameter-name column.
const NAME_WIDTH: usize = 18;
/// Width of the value column.
const VALUE_WIDTH: usize = 12;

/// Renders `result` as a summary line followed by one line per parameter.
///
/// Pure: the same result always renders to the same text.
///
/// ```text
/// Encoder configuration incomplete: 4/5 applied, 1 rejected, 0 skipped
///   bitrate           24000 bps    applied
///   bandwidth         fullband     rejected: invalid argument (-1)
/// ```
pub fn render(result: &ConfigurationResult) -> String {
    let total = result.outcomes().len();
    let applied = result.applied().count();

    let mut out = if result.success() {
        format!("Encoder configuration applied: {}/{} settings\n", applied, total)
    } else {
        format!(
            "Encoder configuration incomplete: {}/{} applied, {} rejected, {} skipped\n",
            applied,
            total,
            result.rejected().count(),
            result.skipped().count()
        )
    };

    for outcome in result.outcomes() {
        let status = match &outcome.status {
            OutcomeStatus::Applied => "applied".to_string(),
            OutcomeStatus::Rejected(err) => format!("rejected: {}", err),
            OutcomeStatus::Skipped { dependency } => {
                format!("skipped: dependency '{}' not applied", dependency)
            }
        };

        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "  {:<name_w$}{:<value_w$} {}",
            outcome.parameter.name(),
            outcome.display,
            status,
            name_w = NAME_WIDTH,
            value_w = VALUE_WIDTH,
        );
    }

    out
}
