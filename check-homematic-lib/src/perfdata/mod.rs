//! Performance data for graphing systems
//!
//! Every measured quantity of a check is reported as one performance-data token
//! following the monitoring plugin convention:
//!
//! ```text
//! 'label'=value[unit];[warn];[crit];[min];[max]
//! ```
//!
//! Thresholds are echoed in the range language understood by
//! [`RangeSpec`](crate::range::RangeSpec). Empty fields are omitted from the right;
//! an empty field followed by a non-empty one stays as a bare `;`.
//!
//! A [`PerformanceMetric`] validates its label and bounds when it is built, so
//! a token that would break the grammar can never be rendered.

mod performance_metric;

pub use performance_metric::{FormatError, PerformanceMetric};
