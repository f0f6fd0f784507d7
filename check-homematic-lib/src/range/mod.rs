//! Threshold ranges and their evaluation
//!
//! Operators express warning and critical thresholds in the compact range
//! language used by Nagios-compatible monitoring plugins:
//!
//! | Text     | Alerts when the value is |
//! |----------|--------------------------|
//! | `10`     | outside `0..=10`         |
//! | `10:`    | below 10                 |
//! | `~:10`   | above 10                 |
//! | `10:20`  | outside `10..=20`        |
//! | `@10:20` | inside `10..=20`         |
//!
//! [`RangeSpec::parse`] turns such a string into bounds plus an inversion flag,
//! and [`evaluate`] scores a value against an optional warning and an optional
//! critical range. A missing threshold is modeled as `None` and never triggers.
//!
//! The `Display` form of a [`RangeSpec`] is its canonical text, which is echoed
//! into performance data and parses back to the same bounds.

mod evaluator;
mod range_spec;

pub use evaluator::evaluate;
pub use range_spec::{RangeParseError, RangeSpec};
