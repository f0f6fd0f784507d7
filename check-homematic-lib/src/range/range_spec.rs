use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;

/// Reasons a threshold-range string can be rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RangeParseError {
    #[error("empty threshold range")]
    Empty,

    #[error("threshold range '{raw}' has no lower bound before ':' (use '~:' for an open lower bound)")]
    MissingLowerBound { raw: String },

    #[error("threshold range '{raw}' contains '{token}', which is not a number")]
    InvalidNumber { raw: String, token: String },

    #[error("threshold range '{raw}' has a lower bound greater than its upper bound")]
    InvertedBounds { raw: String },
}

/// An inclusive numeric interval with optional open ends and an inversion flag.
///
/// A non-inverted range alerts when a value falls outside `[lower, upper]`;
/// an inverted range (written with a leading `@`) alerts when the value falls inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpec {
    lower: f64,
    upper: f64,
    inverted: bool,
}

impl RangeSpec {
    /// Parse a Nagios-style threshold range such as `10`, `10:`, `~:10`, `10:20` or `@10:20`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not follow the range grammar or its bounds are reversed.
    pub fn parse(raw: &str) -> Result<Self, RangeParseError> {
        let trimmed = raw.trim();
        let (inverted, body) = trimmed.strip_prefix('@').map_or((false, trimmed), |rest| (true, rest));

        if body.is_empty() {
            return Err(RangeParseError::Empty);
        }

        let (lower, upper) = match body.split_once(':') {
            None => (0.0, parse_bound(raw, body)?),
            Some(("", _)) => {
                return Err(RangeParseError::MissingLowerBound { raw: raw.to_string() });
            }
            Some((lower, upper)) => {
                let lower = if lower == "~" { f64::NEG_INFINITY } else { parse_bound(raw, lower)? };
                let upper = if upper.is_empty() { f64::INFINITY } else { parse_bound(raw, upper)? };
                (lower, upper)
            }
        };

        if lower > upper {
            return Err(RangeParseError::InvertedBounds { raw: raw.to_string() });
        }

        Ok(Self { lower, upper, inverted })
    }

    /// Parse an optional threshold, treating an absent or blank string as "no threshold".
    ///
    /// # Errors
    ///
    /// Returns an error if a non-blank string fails to parse.
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, RangeParseError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => Self::parse(text).map(Some),
        }
    }

    #[must_use]
    pub const fn lower(&self) -> f64 {
        self.lower
    }

    #[must_use]
    pub const fn upper(&self) -> f64 {
        self.upper
    }

    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Whether `value` lies within `[lower, upper]`, inclusive on both ends.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Whether `value` should raise an alert under this range.
    #[must_use]
    pub fn triggers(&self, value: f64) -> bool {
        if self.inverted { self.contains(value) } else { !self.contains(value) }
    }
}

fn parse_bound(raw: &str, token: &str) -> Result<f64, RangeParseError> {
    // f64::from_str also accepts spellings such as "inf" and "NaN"; only finite literals are bounds
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RangeParseError::InvalidNumber {
            raw: raw.to_string(),
            token: token.to_string(),
        })
}

impl Display for RangeSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.inverted {
            write!(f, "@")?;
        }

        let lower_open = self.lower == f64::NEG_INFINITY;
        let upper_open = self.upper == f64::INFINITY;

        match (lower_open, upper_open) {
            (true, true) => write!(f, "~:"),
            (true, false) => write!(f, "~:{}", self.upper),
            (false, true) => write!(f, "{}:", self.lower),
            (false, false) if self.lower == 0.0 => write!(f, "{}", self.upper),
            (false, false) => write!(f, "{}:{}", self.lower, self.upper),
        }
    }
}

impl FromStr for RangeSpec {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
