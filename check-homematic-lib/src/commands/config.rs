use crate::Result;
use crate::checks::{ClimateThresholds, Thresholds};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// The file looked up in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "check-homematic.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Warning and critical ranges for the temperature in °C
    #[serde(default)]
    pub temperature: Thresholds,

    /// Warning and critical ranges for the relative humidity in %
    #[serde(default)]
    pub humidity: Thresholds,
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a threshold is malformed
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    // No config file found, use defaults
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Check that every configured threshold parses
    ///
    /// # Errors
    ///
    /// Returns an error naming the first malformed threshold
    pub fn validate(&self) -> Result<()> {
        self.temperature.validate().into_app_err("invalid temperature threshold")?;
        self.humidity.validate().into_app_err("invalid humidity threshold")?;
        Ok(())
    }

    /// The thresholds to check a climate sensor with
    #[must_use]
    pub fn climate_thresholds(&self) -> ClimateThresholds {
        ClimateThresholds {
            temperature: self.temperature.clone(),
            humidity: self.humidity.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            temperature: Thresholds::new(Some("15:25"), Some("10:30")),
            humidity: Thresholds::default(),
        }
    }
}
