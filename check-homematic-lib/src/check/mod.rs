//! Assembling the result of a single check invocation
//!
//! A [`CheckResult`] collects everything one check finds out about a device:
//!
//! - boolean conditions such as "device unreachable", each mapped to a status when set
//! - measured values described by a [`MetricInput`], scored against their warning and
//!   critical thresholds and reported both as a message fragment and a performance token
//! - measurements that could not be obtained, which count as `UNKNOWN`
//!
//! The overall status is the worst status contributed so far. Once the result is
//! finalized it renders a single line of the form:
//!
//! ```text
//! WARNING - Temperature: 27.0°C (WARNING) | Temperature=27;15:25;10:30
//! ```

mod check_result;
mod metric_input;

pub use check_result::{CheckError, CheckResult};
pub use metric_input::{MetricInput, MetricOutcome};
