use crate::range::RangeSpec;
use core::fmt::{Display, Formatter, Result as FmtResult, Write};

/// Reasons a performance metric cannot be constructed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("performance metric label must not be empty")]
    EmptyLabel,

    #[error("performance metric label '{0}' contains '=' or a control character")]
    InvalidLabel(String),

    #[error("performance metric '{label}' has unit '{unit}', which may not contain digits, whitespace or any of ;'=")]
    InvalidUnit { label: String, unit: String },

    #[error("performance metric '{label}' has min {min} greater than max {max}")]
    InvertedBounds { label: String, min: f64, max: f64 },

    #[error("performance metric '{label}' has a non-finite {field}")]
    NonFinite { label: String, field: &'static str },
}

/// One measured quantity, rendered as `'label'=value[unit];warn;crit;min;max`.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMetric {
    label: String,
    value: f64,
    unit: String,
    warn: Option<RangeSpec>,
    crit: Option<RangeSpec>,
    min: Option<f64>,
    max: Option<f64>,
}

impl PerformanceMetric {
    /// Create a metric with just a label and a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is empty, contains `=` or a control character,
    /// or the value is not finite.
    pub fn new(label: impl Into<String>, value: f64) -> Result<Self, FormatError> {
        let label = label.into();

        if label.is_empty() {
            return Err(FormatError::EmptyLabel);
        }

        if label.chars().any(|c| c == '=' || c.is_control()) {
            return Err(FormatError::InvalidLabel(label));
        }

        if !value.is_finite() {
            return Err(FormatError::NonFinite { label, field: "value" });
        }

        Ok(Self {
            label,
            value,
            unit: String::new(),
            warn: None,
            crit: None,
            min: None,
            max: None,
        })
    }

    /// Attach the unit of measurement.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit contains a digit, whitespace, a control character,
    /// or one of `;`, `'` and `=`.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Result<Self, FormatError> {
        let unit = unit.into();

        if unit
            .chars()
            .any(|c| c.is_ascii_digit() || c.is_whitespace() || c.is_control() || matches!(c, ';' | '\'' | '='))
        {
            return Err(FormatError::InvalidUnit { label: self.label, unit });
        }

        self.unit = unit;
        Ok(self)
    }

    #[must_use]
    pub const fn with_thresholds(mut self, warn: Option<RangeSpec>, crit: Option<RangeSpec>) -> Self {
        self.warn = warn;
        self.crit = crit;
        self
    }

    /// Attach the minimum and maximum possible values.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is not finite or `min` is greater than `max`.
    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Result<Self, FormatError> {
        for (field, bound) in [("min", min), ("max", max)] {
            if bound.is_some_and(|b| !b.is_finite()) {
                return Err(FormatError::NonFinite { label: self.label, field });
            }
        }

        if let (Some(min), Some(max)) = (min, max)
            && min > max
        {
            return Err(FormatError::InvertedBounds { label: self.label, min, max });
        }

        self.min = min;
        self.max = max;
        Ok(self)
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    #[must_use]
    pub const fn warn(&self) -> Option<&RangeSpec> {
        self.warn.as_ref()
    }

    #[must_use]
    pub const fn crit(&self) -> Option<&RangeSpec> {
        self.crit.as_ref()
    }

    fn write_label(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.label.chars().any(|c| c.is_whitespace() || c == '\'') {
            f.write_char('\'')?;
            f.write_str(&self.label.replace('\'', "''"))?;
            f.write_char('\'')
        } else {
            f.write_str(&self.label)
        }
    }
}

impl Display for PerformanceMetric {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.write_label(f)?;
        write!(f, "={}{}", self.value, self.unit)?;

        let fields = [
            self.warn.map(|r| r.to_string()),
            self.crit.map(|r| r.to_string()),
            self.min.map(|v| v.to_string()),
            self.max.map(|v| v.to_string()),
        ];

        // trailing empty fields are dropped, inner ones stay as bare separators
        let used = fields.iter().rposition(Option::is_some).map_or(0, |last| last + 1);
        for field in fields.iter().take(used) {
            f.write_char(';')?;
            if let Some(text) = field {
                f.write_str(text)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(raw: &str) -> Option<RangeSpec> {
        Some(RangeSpec::parse(raw).unwrap())
    }

    #[test]
    fn test_value_only() {
        let metric = PerformanceMetric::new("Temperature", 21.3).unwrap();
        assert_eq!(metric.to_string(), "Temperature=21.3");
    }

    #[test]
    fn test_unit() {
        let metric = PerformanceMetric::new("Humidity", 45.0).unwrap().with_unit("%").unwrap();
        assert_eq!(metric.to_string(), "Humidity=45%");
    }

    #[test]
    fn test_all_fields() {
        let metric = PerformanceMetric::new("Humidity", 45.0)
            .unwrap()
            .with_unit("%")
            .unwrap()
            .with_thresholds(range("30:70"), range("20:80"))
            .with_bounds(Some(0.0), Some(100.0))
            .unwrap();
        assert_eq!(metric.to_string(), "Humidity=45%;30:70;20:80;0;100");
    }

    #[test]
    fn test_inner_empty_fields_are_kept() {
        let metric = PerformanceMetric::new("load", 1.5)
            .unwrap()
            .with_thresholds(None, range("~:4"))
            .with_bounds(None, Some(8.0))
            .unwrap();
        assert_eq!(metric.to_string(), "load=1.5;;~:4;;8");
    }

    #[test]
    fn test_trailing_empty_fields_are_dropped() {
        let metric = PerformanceMetric::new("Temperature", 27.0)
            .unwrap()
            .with_thresholds(range("15:25"), None);
        assert_eq!(metric.to_string(), "Temperature=27;15:25");
    }

    #[test]
    fn test_inverted_threshold_is_echoed() {
        let metric = PerformanceMetric::new("x", 1.0).unwrap().with_thresholds(range("@10:20"), range("10"));
        assert_eq!(metric.to_string(), "x=1;@10:20;10");
    }

    #[test]
    fn test_label_with_space_is_quoted() {
        let metric = PerformanceMetric::new("Bad Klima", 1.0).unwrap();
        assert_eq!(metric.to_string(), "'Bad Klima'=1");
    }

    #[test]
    fn test_label_quotes_are_doubled() {
        let metric = PerformanceMetric::new("Bob's room", 1.0).unwrap();
        assert_eq!(metric.to_string(), "'Bob''s room'=1");
    }

    #[test]
    fn test_negative_value() {
        let metric = PerformanceMetric::new("Temperature", -4.5).unwrap();
        assert_eq!(metric.to_string(), "Temperature=-4.5");
    }

    #[test]
    fn test_empty_label_is_rejected() {
        assert_eq!(PerformanceMetric::new("", 1.0).unwrap_err(), FormatError::EmptyLabel);
    }

    #[test]
    fn test_label_with_equals_is_rejected() {
        assert!(matches!(
            PerformanceMetric::new("a=b", 1.0).unwrap_err(),
            FormatError::InvalidLabel(_)
        ));
        assert!(matches!(
            PerformanceMetric::new("line\nbreak", 1.0).unwrap_err(),
            FormatError::InvalidLabel(_)
        ));
    }

    #[test]
    fn test_unit_that_breaks_the_token_is_rejected() {
        for unit in ["a;b", "'", "k=v", "per sec", "m3", "\t"] {
            let err = PerformanceMetric::new("t", 1.0).unwrap().with_unit(unit).unwrap_err();
            assert_eq!(
                err,
                FormatError::InvalidUnit {
                    label: "t".to_string(),
                    unit: unit.to_string()
                },
                "{unit:?}"
            );
        }
    }

    #[test]
    fn test_common_units_are_accepted() {
        for unit in ["%", "s", "ms", "B", "KB", "c", "°C"] {
            let metric = PerformanceMetric::new("t", 1.0).unwrap().with_unit(unit).unwrap();
            assert_eq!(metric.to_string(), format!("t=1{unit}"));
        }
    }

    #[test]
    fn test_min_greater_than_max_is_rejected() {
        let err = PerformanceMetric::new("x", 1.0)
            .unwrap()
            .with_bounds(Some(10.0), Some(0.0))
            .unwrap_err();
        assert!(matches!(err, FormatError::InvertedBounds { .. }));
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let _ = PerformanceMetric::new("x", f64::NAN).unwrap_err();
        let err = PerformanceMetric::new("x", 1.0)
            .unwrap()
            .with_bounds(Some(f64::NEG_INFINITY), None)
            .unwrap_err();
        assert_eq!(err, FormatError::NonFinite { label: "x".to_string(), field: "min" });
    }

    #[test]
    fn test_accessors() {
        let metric = PerformanceMetric::new("Humidity", 45.0)
            .unwrap()
            .with_unit("%")
            .unwrap()
            .with_thresholds(range("30:70"), None);
        assert_eq!(metric.label(), "Humidity");
        assert_eq!(metric.value(), 45.0);
        assert_eq!(metric.unit(), "%");
        assert_eq!(metric.warn().map(ToString::to_string).as_deref(), Some("30:70"));
        assert!(metric.crit().is_none());
    }
}
