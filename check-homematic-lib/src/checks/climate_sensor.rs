//! Check for the HM-WDS40-TH-I indoor temperature and humidity sensor

use super::{ClimateThresholds, DeviceKind};
use crate::check::{CheckError, CheckResult, MetricInput};
use crate::device::{DeviceState, Measurement};
use crate::status::Status;

const LOG_TARGET: &str = "    checks";

const LOWBAT: &str = "LOWBAT";
const TEMPERATURE: &str = "TEMPERATURE";
const HUMIDITY: &str = "HUMIDITY";

/// Check a climate sensor's reachability, battery, temperature and humidity.
///
/// The returned result is still building, so callers may add further findings before
/// finalizing it. Datapoints that are missing or unreadable contribute `UNKNOWN`,
/// as do thresholds that fail to parse.
///
/// # Errors
///
/// Returns an error if a performance metric cannot be built, which only happens for
/// inconsistent metric definitions.
pub fn check(device: &DeviceState, thresholds: &ClimateThresholds) -> Result<CheckResult, CheckError> {
    log::debug!(target: LOG_TARGET, "Checking climate sensor '{}' ({})", device.name, device.ise_id);

    let mut result = CheckResult::new();

    DeviceKind::HmWds40ThI.add_type_mismatch(&mut result, device)?;

    add_flag(&mut result, "Reachability", device.unreachable(), Status::Critical, "Device unreachable")?;
    add_flag(&mut result, "Battery state", device.flag(LOWBAT), Status::Warning, "Battery low")?;

    let temperature = &thresholds.temperature;
    add_measurement(&mut result, "Temperature", device.number(TEMPERATURE), |input| {
        input
            .with_display("°C", 1)
            .with_thresholds(temperature.warning.as_deref(), temperature.critical.as_deref())
    })?;

    let humidity = &thresholds.humidity;
    add_measurement(&mut result, "Humidity", device.number(HUMIDITY), |input| {
        input
            .with_unit("%")
            .with_display("%", 0)
            .with_thresholds(humidity.warning.as_deref(), humidity.critical.as_deref())
            .with_bounds(Some(0.0), Some(100.0))
    })?;

    Ok(result)
}

fn add_flag(
    result: &mut CheckResult,
    name: &str,
    measurement: Measurement<bool>,
    on_true: Status,
    message: &str,
) -> Result<(), CheckError> {
    match measurement {
        Measurement::Found(flag) => {
            let _ = result.add_condition(flag, on_true, message)?;
        }
        Measurement::Missing => result.add_unknown(name, format!("{name} not available"))?,
        Measurement::Invalid(raw) => result.add_unknown(name, format!("{name} has invalid value '{raw}'"))?,
    }

    Ok(())
}

fn add_measurement<'a>(
    result: &mut CheckResult,
    label: &'a str,
    measurement: Measurement<f64>,
    describe: impl FnOnce(MetricInput<'a>) -> MetricInput<'a>,
) -> Result<(), CheckError> {
    match measurement {
        Measurement::Found(value) => {
            let outcome = result.add_metric(&describe(MetricInput::new(label, value)))?;
            for e in outcome.threshold_errors {
                result.add_unknown(label, format!("{label} threshold invalid: {e}"))?;
            }
        }
        Measurement::Missing => result.add_unknown(label, format!("{label} not available"))?,
        Measurement::Invalid(raw) => result.add_unknown(label, format!("{label} has invalid value '{raw}'"))?,
    }

    Ok(())
}
