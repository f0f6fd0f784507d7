//! Device state as reported by a HomeMatic CCU
//!
//! A [`StateDocument`] is a JSON snapshot listing devices, each with a reachability
//! flag and a set of channels carrying typed datapoints:
//!
//! ```json
//! { "devices": [ { "name": "Bad Klima", "ise_id": "1234", "device_type": "HM-WDS40-TH-I",
//!     "unreach": "false", "channels": [ { "name": "Bad Klima:1", "datapoints": [
//!         { "type": "TEMPERATURE", "value": "21.3" } ] } ] } ] }
//! ```
//!
//! Values are read through typed accessors that return a [`Measurement`], keeping
//! a missing datapoint distinct from one whose text cannot be interpreted.

mod measurement;
mod state;

pub use measurement::Measurement;
pub use state::{Channel, Datapoint, DeviceState, StateDocument};
