use super::Measurement;
use super::measurement::{parse_flag, parse_number};
use crate::Result;
use camino::Utf8Path;
use ohno::IntoAppError;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::{self, BufReader, Read};

const LOG_TARGET: &str = "    device";

/// A snapshot of the devices known to a HomeMatic CCU and their current datapoint values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StateDocument {
    #[serde(default)]
    pub devices: Vec<DeviceState>,
}

/// One device with its reachability and the datapoints of all its channels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeviceState {
    pub name: String,

    #[serde(default)]
    pub ise_id: String,

    #[serde(default)]
    pub device_type: String,

    #[serde(default, deserialize_with = "scalar_text")]
    pub unreach: Option<String>,

    #[serde(default)]
    pub channels: Vec<Channel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub datapoints: Vec<Datapoint>,
}

/// A single typed value reported by a channel, such as `TEMPERATURE` or `LOWBAT`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Datapoint {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, deserialize_with = "scalar_text")]
    pub value: Option<String>,
}

impl StateDocument {
    /// Read a state document from a file, or from stdin when the path is `-`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or does not contain a valid state document.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        if path.as_str() == "-" {
            log::debug!(target: LOG_TARGET, "Reading device state from stdin");
            return Self::from_reader(io::stdin().lock()).into_app_err("reading device state from stdin");
        }

        log::debug!(target: LOG_TARGET, "Reading device state from '{path}'");
        let file = File::open(path).into_app_err_with(|| format!("opening device state file '{path}'"))?;
        Self::from_reader(BufReader::new(file)).into_app_err_with(|| format!("parsing device state file '{path}'"))
    }

    /// Parse a state document from any reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid JSON state document.
    pub fn from_reader(reader: impl Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// The first device whose name matches exactly.
    #[must_use]
    pub fn find_device(&self, name: &str) -> Option<&DeviceState> {
        self.devices.iter().find(|d| d.name == name)
    }
}

impl DeviceState {
    /// The first datapoint of the given type, scanning channels in order.
    #[must_use]
    pub fn datapoint(&self, kind: &str) -> Option<&Datapoint> {
        self.channels
            .iter()
            .flat_map(|channel| channel.datapoints.iter())
            .find(|dp| dp.kind == kind)
    }

    /// The raw text of the first datapoint of the given type.
    #[must_use]
    pub fn raw_value(&self, kind: &str) -> Option<&str> {
        self.datapoint(kind).and_then(|dp| dp.value.as_deref())
    }

    /// Read a datapoint as a boolean flag.
    #[must_use]
    pub fn flag(&self, kind: &str) -> Measurement<bool> {
        Measurement::from_raw(self.raw_value(kind), parse_flag)
    }

    /// Read a datapoint as a finite number.
    #[must_use]
    pub fn number(&self, kind: &str) -> Measurement<f64> {
        Measurement::from_raw(self.raw_value(kind), parse_number)
    }

    /// Whether the CCU reports the device as unreachable.
    #[must_use]
    pub fn unreachable(&self) -> Measurement<bool> {
        Measurement::from_raw(self.unreach.as_deref(), parse_flag)
    }
}

/// The CCU reports every value as text; JSON numbers and booleans are accepted as well.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(D::Error::custom(format!("expected a scalar value, found {other}"))),
    }
}
