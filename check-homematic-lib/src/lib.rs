#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for check-homematic
//!
//! This library holds everything behind the `check-homematic` monitoring plugin:
//! the threshold-range language, status aggregation, performance data rendering,
//! and the device checks built on top of them.
//!
//! # Module Organization
//!
//! - [`range`]: Threshold-range parsing and evaluation
//! - [`status`]: Check verdicts and worst-status-wins aggregation
//! - [`perfdata`]: Performance-data tokens for graphing systems
//! - [`check`]: The per-invocation check result and its rendered line
//! - [`device`]: Device state documents and typed datapoint access
//! - [`checks`]: Checks for specific device kinds
//! - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod check;
pub mod checks;
pub mod device;
pub mod perfdata;
pub mod range;
pub mod status;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

pub use crate::commands::{Host, run};
