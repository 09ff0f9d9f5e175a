// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for thermostat control.
//!
//! # Types
//!
//! - [`ThermostatMode`] - Off/Heat/Cool/Auto operating mode
//! - [`FanMode`] - Auto/Circulate/On fan mode
//! - [`LockMode`] - Keypad lock level (0-3)
//! - [`UserMessageLine`] - User message line (0-1)
//! - [`PriceMessageLine`] - Price message line (0-3)
//! - [`TargetTemperature`] - Active set point(s) for the current mode

mod lock;
mod message;
mod mode;
mod target;

pub use lock::LockMode;
pub use message::{PriceMessageLine, UserMessageLine};
pub use mode::{FanMode, ThermostatMode};
pub use target::TargetTemperature;
