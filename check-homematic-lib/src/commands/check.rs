use super::Host;
use super::common::{CommonArgs, init_logging};
use super::config::Config;
use crate::Result;
use crate::check::CheckResult;
use crate::checks::{ClimateThresholds, DeviceKind};
use crate::device::{DeviceState, StateDocument};
use crate::status::Status;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::{IntoAppError, app_err};
use std::io::Write;

const LOG_TARGET: &str = "   command";

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Device state document to read, or `-` for stdin
    #[arg(long, short = 's', value_name = "PATH")]
    pub state: Utf8PathBuf,

    /// Name of the device to check
    #[arg(long, short = 'n', value_name = "NAME")]
    pub name: String,

    /// Kind of device to check
    #[arg(long, short = 'k', value_name = "KIND", default_value_t = DeviceKind::HmWds40ThI)]
    pub kind: DeviceKind,

    /// Warning range for the temperature
    #[arg(long, value_name = "RANGE", allow_hyphen_values = true, help_heading = "Thresholds")]
    pub warning_temperature: Option<String>,

    /// Critical range for the temperature
    #[arg(long, value_name = "RANGE", allow_hyphen_values = true, help_heading = "Thresholds")]
    pub critical_temperature: Option<String>,

    /// Warning range for the humidity
    #[arg(long, value_name = "RANGE", allow_hyphen_values = true, help_heading = "Thresholds")]
    pub warning_humidity: Option<String>,

    /// Critical range for the humidity
    #[arg(long, value_name = "RANGE", allow_hyphen_values = true, help_heading = "Thresholds")]
    pub critical_humidity: Option<String>,

    /// Path to configuration file (default is `check-homematic.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CheckArgs {
    /// Configured thresholds with any command-line ranges applied on top.
    fn thresholds(&self, config: &Config) -> ClimateThresholds {
        let configured = config.climate_thresholds();

        ClimateThresholds {
            temperature: configured
                .temperature
                .overridden_by(self.warning_temperature.clone(), self.critical_temperature.clone()),
            humidity: configured
                .humidity
                .overridden_by(self.warning_humidity.clone(), self.critical_humidity.clone()),
        }
    }
}

/// Check a device and report the result the way a monitoring plugin does.
///
/// The rendered line goes to the host output and the host exits with the status code.
/// Problems with the device state are part of the result rather than an error: an
/// unreadable state document or an unknown device is `CRITICAL`, a broken configuration
/// is `UNKNOWN`.
///
/// # Errors
///
/// Returns an error only if the check result cannot be assembled.
pub fn check_device<H: Host>(host: &mut H, args: &CheckArgs) -> Result<()> {
    init_logging(args.common.log_level);

    let mut result = match Config::load(Utf8Path::new("."), args.config.as_ref()) {
        Err(e) => {
            log::warn!(target: LOG_TARGET, "Unable to load configuration: {e:#}");
            let mut result = CheckResult::new();
            result
                .add_unknown("Configuration", one_line(&e))
                .into_app_err("assembling check result")?;
            result
        }
        Ok(config) => {
            let thresholds = args.thresholds(&config);
            match find_device(&args.state, &args.name) {
                Ok(device) => {
                    log::info!(target: LOG_TARGET, "Checking '{}' as {}", device.name, args.kind);
                    args.kind
                        .check(&device, &thresholds)
                        .into_app_err_with(|| format!("checking device '{}'", args.name))?
                }
                Err(e) => {
                    log::warn!(target: LOG_TARGET, "Unable to read device '{}': {e:#}", args.name);
                    let mut result = CheckResult::new();
                    let _ = result
                        .add_condition(true, Status::Critical, &one_line(&e))
                        .into_app_err("assembling check result")?;
                    result
                }
            }
        }
    };

    log::debug!(target: LOG_TARGET, "Overall status {}", result.status());
    let line = result.finalize();

    let _ = writeln!(host.output(), "{line}");
    host.exit(result.exit_code());
    Ok(())
}

fn find_device(state: &Utf8Path, name: &str) -> Result<DeviceState> {
    let document = StateDocument::load(state)?;

    document
        .find_device(name)
        .cloned()
        .ok_or_else(|| app_err!("device '{name}' not found in '{state}'"))
}

/// Collapse an error and its context into a single line, since the check output is line based.
fn one_line(error: &ohno::AppError) -> String {
    let text = error.to_string();
    let text = text.split("\nBacktrace:").next().unwrap_or(&text);

    text.lines()
        .map(|line| line.trim_start_matches('>').trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(": ")
}
