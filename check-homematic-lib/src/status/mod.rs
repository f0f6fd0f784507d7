//! Check verdicts and their aggregation
//!
//! A [`Status`] is the verdict of one condition, such as a threshold evaluation
//! or a connectivity flag. Statuses are combined with
//! [`Status::merge`], where the most severe verdict wins using the precedence
//! `CRITICAL > UNKNOWN > WARNING > OK`.
//!
//! The numeric exit code of a status is a separate, fixed mapping and is
//! never used for ordering.
//!
//! [`StatusAggregator`] folds a sequence of statuses into one overall verdict
//! while remembering each contribution and its source, so the final message
//! can point at whatever caused the verdict.

mod aggregator;
mod check_status;

pub use aggregator::{Contribution, StatusAggregator};
pub use check_status::Status;
