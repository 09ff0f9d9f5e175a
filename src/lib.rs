// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `radiotherm_lib` - A Rust library to control WiFi thermostats.
//!
//! The thermostat exposes a small, fixed REST/JSON API on the local network.
//! This crate maps each capability to one request and decodes the answer into
//! typed structures.
//!
//! # Supported Features
//!
//! - **Operating state**: full status, operating mode, fan mode, hold
//! - **Set points**: read both set points, temporary heat/cool overrides
//! - **Active target**: the set point(s) in effect for the current mode
//! - **Remote sensor**: supply an external temperature reading
//! - **Keypad lock**: read and change the lock level
//! - **Messages**: user and price message areas
//! - **Device information**: model, firmware, name
//!
//! # Outcomes
//!
//! Reads return `Ok(value)` or an [`Error`]. Writes return
//! `Ok(`[`Acknowledgement`]`)` when the appliance answered, which tells whether
//! it accepted the change, or an [`Error`] when no answer was obtained.
//! Transport and HTTP failures are logged with `tracing` at `warn` level.
//!
//! # Quick Start
//!
//! ```no_run
//! use radiotherm_lib::{Thermostat, ThermostatMode};
//!
//! #[tokio::main]
//! async fn main() -> radiotherm_lib::Result<()> {
//!     let thermostat = Thermostat::new("http://192.168.1.60")?;
//!
//!     let state = thermostat.status().await?;
//!     println!("temperature: {:?}", state.temp);
//!
//!     if thermostat.set_temporary_heat(68.0).await?.is_acknowledged() {
//!         println!("now heating to 68");
//!     }
//!
//!     thermostat.set_mode(ThermostatMode::Auto).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod protocol;
pub mod response;
mod thermostat;
pub mod types;

pub use error::{ConfigError, DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{Acknowledgement, HttpClient, Protocol, ThermostatConfig};
pub use response::{
    DeviceName, DeviceTime, LockResponse, ModelInfo, RemoteTemperature, SystemInfo,
    TargetTemperatures, ThermostatState,
};
pub use thermostat::Thermostat;
pub use types::{
    FanMode, LockMode, PriceMessageLine, TargetTemperature, ThermostatMode, UserMessageLine,
};
