// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for thermostat JSON documents.
//!
//! Each structure corresponds to one `GET` endpoint. Fields the appliance
//! always reports are required; decoding a document without them fails with
//! [`ParseError::Malformed`](crate::ParseError::Malformed).

mod status;
mod system;
mod temperature;

pub use status::{DeviceTime, ThermostatState};
pub use system::{DeviceName, LockResponse, ModelInfo, SystemInfo};
pub use temperature::{RemoteTemperature, TargetTemperatures};
