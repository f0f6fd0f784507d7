use crate::range::RangeParseError;
use crate::status::Status;

/// Everything needed to score and report one measured value.
///
/// Thresholds are carried as raw range text; [`CheckResult::add_metric`](super::CheckResult::add_metric)
/// parses them so that a malformed threshold can be reported instead of aborting the check.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricInput<'a> {
    pub(super) label: &'a str,
    pub(super) value: f64,
    pub(super) unit: &'a str,
    pub(super) display_unit: &'a str,
    pub(super) precision: Option<usize>,
    pub(super) warn: Option<&'a str>,
    pub(super) crit: Option<&'a str>,
    pub(super) min: Option<f64>,
    pub(super) max: Option<f64>,
}

impl<'a> MetricInput<'a> {
    #[must_use]
    pub const fn new(label: &'a str, value: f64) -> Self {
        Self {
            label,
            value,
            unit: "",
            display_unit: "",
            precision: None,
            warn: None,
            crit: None,
            min: None,
            max: None,
        }
    }

    /// Unit written into the performance-data token.
    #[must_use]
    pub const fn with_unit(mut self, unit: &'a str) -> Self {
        self.unit = unit;
        self
    }

    /// Unit and number of decimals used in the human-readable message fragment.
    #[must_use]
    pub const fn with_display(mut self, display_unit: &'a str, precision: usize) -> Self {
        self.display_unit = display_unit;
        self.precision = Some(precision);
        self
    }

    #[must_use]
    pub const fn with_thresholds(mut self, warn: Option<&'a str>, crit: Option<&'a str>) -> Self {
        self.warn = warn;
        self.crit = crit;
        self
    }

    #[must_use]
    pub const fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub const fn label(&self) -> &'a str {
        self.label
    }

    pub(super) fn fragment(&self, status: Status) -> String {
        let fragment = match self.precision {
            Some(precision) => format!("{}: {:.precision$}{}", self.label, self.value, self.display_unit),
            None => format!("{}: {}{}", self.label, self.value, self.display_unit),
        };

        if status.is_ok() { fragment } else { format!("{fragment} ({status})") }
    }
}

/// What happened when a metric was added to a check.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricOutcome {
    /// The status the metric's value scored against its thresholds.
    pub status: Status,

    /// Thresholds that failed to parse and were treated as absent.
    pub threshold_errors: Vec<RangeParseError>,
}

impl MetricOutcome {
    #[must_use]
    pub const fn has_threshold_errors(&self) -> bool {
        !self.threshold_errors.is_empty()
    }
}
