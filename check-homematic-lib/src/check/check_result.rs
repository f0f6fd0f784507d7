use super::{MetricInput, MetricOutcome};
use crate::perfdata::{FormatError, PerformanceMetric};
use crate::range::{RangeSpec, evaluate};
use crate::status::{Contribution, Status, StatusAggregator};

const LOG_TARGET: &str = "     check";

/// Failures while assembling a check result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckError {
    #[error("check result has already been finalized")]
    Finalized,

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// The outcome of one check invocation, assembled incrementally.
///
/// A result starts out building: conditions, metrics and unknowns may be added
/// and the overall status only ever becomes more severe. [`finalize`](Self::finalize)
/// renders the output line and freezes the result; every later mutation fails
/// with [`CheckError::Finalized`].
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    aggregator: StatusAggregator,
    fragments: Vec<String>,
    metrics: Vec<PerformanceMetric>,
    rendered: Option<String>,
}

impl CheckResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a boolean condition into the result, appending `message` when the flag is set.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Finalized`] if the result was already finalized.
    pub fn add_condition(&mut self, flag: bool, on_true: Status, message: &str) -> Result<Status, CheckError> {
        self.ensure_building()?;

        let status = Status::from_condition(flag, on_true);
        let _ = self.aggregator.add(message, status);
        if flag {
            self.push_fragment(message);
        }

        Ok(status)
    }

    /// Score a measured value against its thresholds and record the fragment and performance token.
    ///
    /// A threshold that fails to parse is treated as absent; the parse errors are returned
    /// in the outcome so the caller can decide how to report them.
    ///
    /// # Errors
    ///
    /// Returns an error if the result was already finalized or the performance token
    /// cannot be built from the input.
    pub fn add_metric(&mut self, input: &MetricInput<'_>) -> Result<MetricOutcome, CheckError> {
        self.ensure_building()?;

        let mut threshold_errors = Vec::new();
        let mut parse = |raw: Option<&str>| {
            RangeSpec::parse_optional(raw).unwrap_or_else(|e| {
                log::debug!(target: LOG_TARGET, "Ignoring threshold for '{}': {e}", input.label);
                threshold_errors.push(e);
                None
            })
        };

        let warn = parse(input.warn);
        let crit = parse(input.crit);

        let metric = PerformanceMetric::new(input.label, input.value)?
            .with_unit(input.unit)?
            .with_thresholds(warn, crit)
            .with_bounds(input.min, input.max)?;

        let status = evaluate(input.value, warn.as_ref(), crit.as_ref());
        log::debug!(target: LOG_TARGET, "'{}' = {} scored {status}", input.label, input.value);

        let _ = self.aggregator.add(input.label, status);
        self.push_fragment(&input.fragment(status));
        self.metrics.push(metric);

        Ok(MetricOutcome { status, threshold_errors })
    }

    /// Record that something could not be measured or interpreted.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Finalized`] if the result was already finalized.
    pub fn add_unknown(&mut self, source: &str, message: impl Into<String>) -> Result<(), CheckError> {
        self.ensure_building()?;

        let _ = self.aggregator.add(source, Status::Unknown);
        self.push_fragment(&message.into());
        Ok(())
    }

    /// Render the output line and freeze the result.
    ///
    /// The line is the status name, then ` - ` and the message fragments when there are any,
    /// then ` | ` and the performance tokens when there are any. Calling this again returns
    /// the line rendered the first time.
    pub fn finalize(&mut self) -> &str {
        self.rendered.get_or_insert_with(|| {
            let mut line = self.aggregator.overall().to_string();

            if !self.fragments.is_empty() {
                line.push_str(" - ");
                line.push_str(&self.fragments.join(" "));
            }

            if !self.metrics.is_empty() {
                let tokens: Vec<String> = self.metrics.iter().map(ToString::to_string).collect();
                line.push_str(" | ");
                line.push_str(&tokens.join(" "));
            }

            line
        })
    }

    #[must_use]
    pub const fn is_finalized(&self) -> bool {
        self.rendered.is_some()
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.aggregator.overall()
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.status().exit_code()
    }

    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    #[must_use]
    pub fn metrics(&self) -> &[PerformanceMetric] {
        &self.metrics
    }

    #[must_use]
    pub fn contributions(&self) -> &[Contribution] {
        self.aggregator.contributions()
    }

    /// Names of the conditions and metrics that determined the overall status.
    pub fn responsible(&self) -> impl Iterator<Item = &str> {
        self.aggregator.responsible()
    }

    /// Fragments share one output line with the perfdata, so `|` and line breaks are neutralized.
    fn push_fragment(&mut self, text: &str) {
        let fragment = text
            .chars()
            .map(|c| match c {
                '|' => '/',
                c if c.is_control() => ' ',
                c => c,
            })
            .collect();
        self.fragments.push(fragment);
    }

    fn ensure_building(&self) -> Result<(), CheckError> {
        if self.rendered.is_some() { Err(CheckError::Finalized) } else { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temperature(value: f64) -> MetricInput<'static> {
        MetricInput::new("Temperature", value)
            .with_display("°C", 1)
            .with_thresholds(Some("15:25"), Some("10:30"))
    }

    #[test]
    fn test_empty_result_is_ok() {
        let mut result = CheckResult::new();
        assert_eq!(result.finalize(), "OK");
        assert_eq!(result.exit_code(), 0);
    }

    #[test]
    fn test_value_inside_thresholds_is_ok() {
        let mut result = CheckResult::new();
        let outcome = result.add_metric(&temperature(21.3)).unwrap();

        assert_eq!(outcome.status, Status::Ok);
        assert!(!outcome.has_threshold_errors());
        assert_eq!(result.fragments(), ["Temperature: 21.3°C"]);
        insta::assert_snapshot!(result.finalize(), @"OK - Temperature: 21.3°C | Temperature=21.3;15:25;10:30");
    }

    #[test]
    fn test_value_outside_warning_is_annotated() {
        let mut result = CheckResult::new();
        let outcome = result.add_metric(&temperature(27.0)).unwrap();

        assert_eq!(outcome.status, Status::Warning);
        assert_eq!(result.exit_code(), 1);
        insta::assert_snapshot!(result.finalize(), @"WARNING - Temperature: 27.0°C (WARNING) | Temperature=27;15:25;10:30");
    }

    #[test]
    fn test_unreachable_dominates_ok_metric() {
        let mut result = CheckResult::new();
        let _ = result.add_condition(true, Status::Critical, "Device unreachable").unwrap();
        let _ = result.add_metric(&temperature(21.3)).unwrap();

        assert_eq!(result.status(), Status::Critical);
        assert_eq!(result.exit_code(), 2);
        assert_eq!(result.responsible().collect::<Vec<_>>(), ["Device unreachable"]);
        insta::assert_snapshot!(result.finalize(), @"CRITICAL - Device unreachable Temperature: 21.3°C | Temperature=21.3;15:25;10:30");
    }

    #[test]
    fn test_low_battery_alone_is_warning() {
        let mut result = CheckResult::new();
        let _ = result.add_condition(false, Status::Critical, "Device unreachable").unwrap();
        let _ = result.add_condition(true, Status::Warning, "Battery low").unwrap();
        let _ = result.add_metric(&temperature(21.3)).unwrap();

        assert_eq!(result.status(), Status::Warning);
        insta::assert_snapshot!(result.finalize(), @"WARNING - Battery low Temperature: 21.3°C | Temperature=21.3;15:25;10:30");
    }

    #[test]
    fn test_false_condition_adds_no_fragment() {
        let mut result = CheckResult::new();
        let status = result.add_condition(false, Status::Critical, "Device unreachable").unwrap();

        assert_eq!(status, Status::Ok);
        assert!(result.fragments().is_empty());
        assert_eq!(result.contributions().len(), 1);
    }

    #[test]
    fn test_bad_threshold_is_reported_and_ignored() {
        let mut result = CheckResult::new();
        let input = MetricInput::new("Temperature", 50.0).with_thresholds(Some(":10"), Some("10:30"));
        let outcome = result.add_metric(&input).unwrap();

        assert_eq!(outcome.status, Status::Critical);
        assert_eq!(outcome.threshold_errors.len(), 1);
        assert_eq!(result.metrics()[0].to_string(), "Temperature=50;;10:30");
    }

    #[test]
    fn test_blank_thresholds_are_absent() {
        let mut result = CheckResult::new();
        let input = MetricInput::new("Temperature", -40.0).with_thresholds(Some(""), Some("  "));
        let outcome = result.add_metric(&input).unwrap();

        assert_eq!(outcome.status, Status::Ok);
        assert!(!outcome.has_threshold_errors());
        assert_eq!(result.metrics()[0].to_string(), "Temperature=-40");
    }

    #[test]
    fn test_unknown_outranks_warning() {
        let mut result = CheckResult::new();
        let _ = result.add_metric(&temperature(27.0)).unwrap();
        result.add_unknown("Humidity", "Humidity not available").unwrap();

        assert_eq!(result.status(), Status::Unknown);
        assert_eq!(result.exit_code(), 3);
        insta::assert_snapshot!(result.finalize(), @"UNKNOWN - Temperature: 27.0°C (WARNING) Humidity not available | Temperature=27;15:25;10:30");
    }

    #[test]
    fn test_fragments_without_metrics_have_no_perfdata() {
        let mut result = CheckResult::new();
        let _ = result.add_condition(true, Status::Critical, "Device unreachable").unwrap();
        assert_eq!(result.finalize(), "CRITICAL - Device unreachable");
    }

    #[test]
    fn test_multiple_metrics() {
        let mut result = CheckResult::new();
        let _ = result.add_metric(&temperature(21.3)).unwrap();
        let humidity = MetricInput::new("Humidity", 45.0)
            .with_unit("%")
            .with_display("%", 0)
            .with_thresholds(Some("30:70"), Some("20:80"))
            .with_bounds(Some(0.0), Some(100.0));
        let _ = result.add_metric(&humidity).unwrap();

        insta::assert_snapshot!(
            result.finalize(),
            @"OK - Temperature: 21.3°C Humidity: 45% | Temperature=21.3;15:25;10:30 Humidity=45%;30:70;20:80;0;100"
        );
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut result = CheckResult::new();
        let _ = result.add_metric(&temperature(27.0)).unwrap();

        let first = result.finalize().to_string();
        assert!(result.is_finalized());
        assert_eq!(result.finalize(), first);
    }

    #[test]
    fn test_mutation_after_finalize_fails() {
        let mut result = CheckResult::new();
        let _ = result.finalize();

        assert_eq!(
            result.add_condition(true, Status::Critical, "Device unreachable").unwrap_err(),
            CheckError::Finalized
        );
        assert_eq!(result.add_metric(&temperature(1.0)).unwrap_err(), CheckError::Finalized);
        assert_eq!(result.add_unknown("x", "x").unwrap_err(), CheckError::Finalized);
        assert_eq!(result.status(), Status::Ok);
        assert_eq!(result.finalize(), "OK");
    }

    #[test]
    fn test_invalid_label_propagates() {
        let mut result = CheckResult::new();
        let err = result.add_metric(&MetricInput::new("", 1.0)).unwrap_err();
        assert_eq!(err, CheckError::Format(FormatError::EmptyLabel));
        assert!(result.contributions().is_empty());
    }

    #[test]
    fn test_reversed_bounds_propagate() {
        let mut result = CheckResult::new();
        let input = MetricInput::new("Humidity", 45.0).with_bounds(Some(100.0), Some(0.0));
        assert!(matches!(
            result.add_metric(&input).unwrap_err(),
            CheckError::Format(FormatError::InvertedBounds { .. })
        ));
    }

    #[test]
    fn test_pipe_in_message_does_not_start_perfdata() {
        let mut result = CheckResult::new();
        result.add_unknown("Temperature", "Temperature has invalid value '1|bogus=5'").unwrap();
        let _ = result.add_metric(&temperature(21.3)).unwrap();

        let line = result.finalize();
        assert_eq!(line.matches('|').count(), 1, "{line}");
        insta::assert_snapshot!(
            line,
            @"UNKNOWN - Temperature has invalid value '1/bogus=5' Temperature: 21.3°C | Temperature=21.3;15:25;10:30"
        );
    }

    #[test]
    fn test_line_breaks_in_message_stay_on_one_line() {
        let mut result = CheckResult::new();
        let _ = result.add_condition(true, Status::Warning, "no\nWARNING - spoof").unwrap();
        result.add_unknown("Battery state", "Battery state has invalid value 'a\r\nb'").unwrap();

        let line = result.finalize();
        assert_eq!(line.lines().count(), 1, "{line}");
        assert_eq!(
            result.fragments(),
            ["no WARNING - spoof", "Battery state has invalid value 'a  b'"]
        );
    }

    #[test]
    fn test_unit_that_breaks_the_token_propagates() {
        let mut result = CheckResult::new();
        let input = MetricInput::new("t", 1.0).with_unit("a;b");
        assert!(matches!(
            result.add_metric(&input).unwrap_err(),
            CheckError::Format(FormatError::InvalidUnit { .. })
        ));
        assert!(result.metrics().is_empty());
    }
}
