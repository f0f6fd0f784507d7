//! Checks for specific HomeMatic device kinds
//!
//! Each supported device kind knows which datapoints it reports and how to turn them
//! into a [`CheckResult`]. The kind is chosen on the command line and compared against
//! the device type the CCU reports for the device.

pub mod climate_sensor;
mod thresholds;

pub use thresholds::{ClimateThresholds, Thresholds};

use crate::check::{CheckError, CheckResult};
use crate::device::DeviceState;
use clap::ValueEnum;
use strum::{Display, EnumIter};

/// Device kinds that can be checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Display, EnumIter)]
pub enum DeviceKind {
    /// HM-WDS40-TH-I indoor temperature and humidity sensor
    #[default]
    #[value(name = "hm-wds40-th-i")]
    #[strum(serialize = "hm-wds40-th-i")]
    HmWds40ThI,
}

impl DeviceKind {
    /// The device type string the CCU reports for this kind.
    #[must_use]
    pub const fn device_type(self) -> &'static str {
        match self {
            Self::HmWds40ThI => "HM-WDS40-TH-I",
        }
    }

    /// Flag a device whose reported type is not the one this kind expects.
    ///
    /// Devices that do not report a type at all are accepted.
    fn add_type_mismatch(self, result: &mut CheckResult, device: &DeviceState) -> Result<(), CheckError> {
        let expected = self.device_type();
        if device.device_type.is_empty() || device.device_type == expected {
            return Ok(());
        }

        result.add_unknown(
            "Device type",
            format!("Unexpected device type {} (expected {expected})", device.device_type),
        )
    }

    /// Run the check for this kind against a device.
    ///
    /// # Errors
    ///
    /// Returns an error if the check cannot assemble its result.
    pub fn check(self, device: &DeviceState, thresholds: &ClimateThresholds) -> Result<CheckResult, CheckError> {
        match self {
            Self::HmWds40ThI => climate_sensor::check(device, thresholds),
        }
    }
}
