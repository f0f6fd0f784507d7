use crate::range::{RangeParseError, RangeSpec};
use serde::{Deserialize, Serialize};

/// Raw warning and critical range text for one measured quantity.
///
/// The text is kept as written so that a malformed range can be reported against
/// the check instead of preventing it from running.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Thresholds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<String>,
}

impl Thresholds {
    #[must_use]
    pub fn new(warning: Option<&str>, critical: Option<&str>) -> Self {
        Self {
            warning: warning.map(ToString::to_string),
            critical: critical.map(ToString::to_string),
        }
    }

    /// Replace each threshold for which an override is given.
    #[must_use]
    pub fn overridden_by(self, warning: Option<String>, critical: Option<String>) -> Self {
        Self {
            warning: warning.or(self.warning),
            critical: critical.or(self.critical),
        }
    }

    /// Check that both ranges parse.
    ///
    /// # Errors
    ///
    /// Returns the first range that fails to parse.
    pub fn validate(&self) -> Result<(), RangeParseError> {
        let _ = RangeSpec::parse_optional(self.warning.as_deref())?;
        let _ = RangeSpec::parse_optional(self.critical.as_deref())?;
        Ok(())
    }
}

/// Thresholds for every quantity a climate sensor reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClimateThresholds {
    #[serde(default)]
    pub temperature: Thresholds,

    #[serde(default)]
    pub humidity: Thresholds,
}
