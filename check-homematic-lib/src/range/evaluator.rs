//! Scoring a measured value against warning and critical ranges

use super::RangeSpec;
use crate::status::Status;

/// Evaluate a value against optional warning and critical ranges.
///
/// # Evaluation order:
/// 1. If the critical range is present and triggers, the result is `Critical`
/// 2. Otherwise, if the warning range is present and triggers, the result is `Warning`
/// 3. Otherwise the result is `Ok`
///
/// An absent range never triggers. This function never produces `Unknown`; missing
/// or unparseable measurements have to be detected before a value reaches it.
#[must_use]
pub fn evaluate(value: f64, warn: Option<&RangeSpec>, crit: Option<&RangeSpec>) -> Status {
    if crit.is_some_and(|range| range.triggers(value)) {
        Status::Critical
    } else if warn.is_some_and(|range| range.triggers(value)) {
        Status::Warning
    } else {
        Status::Ok
    }
}
