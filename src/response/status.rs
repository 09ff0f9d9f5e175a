// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status response parsing.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::types::{FanMode, ThermostatMode};

/// Full thermostat state from `GET /tstat`.
///
/// Only `tmode` is required. Fields the appliance reports that are not
/// modelled here are kept in [`extra`](Self::extra) untouched.
///
/// # Examples
///
/// ```
/// use radiotherm_lib::response::ThermostatState;
///
/// let json = r#"{
///     "temp": 72.5, "tmode": 1, "fmode": 0, "override": 0, "hold": 0,
///     "t_heat": 68.0, "tstate": 1, "fstate": 0,
///     "time": {"day": 3, "hour": 14, "minute": 7},
///     "t_type_post": 0
/// }"#;
/// let state: ThermostatState = serde_json::from_str(json).unwrap();
/// assert_eq!(state.tmode, 1);
/// assert_eq!(state.t_heat, Some(68.0));
/// assert!(state.extra.contains_key("t_type_post"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThermostatState {
    /// Operating mode code (0 off, 1 heat, 2 cool, 3 auto).
    pub tmode: u8,

    /// Current temperature reading.
    #[serde(default)]
    pub temp: Option<f64>,

    /// Fan mode code.
    #[serde(default)]
    pub fmode: Option<u8>,

    /// Target temperature temporarily overridden (1) or not (0).
    #[serde(rename = "override", default)]
    pub override_active: Option<u8>,

    /// Hold enabled (1) or disabled (0).
    #[serde(default)]
    pub hold: Option<u8>,

    /// Heating set point; only reported while heating.
    #[serde(default)]
    pub t_heat: Option<f64>,

    /// Cooling set point; only reported while cooling.
    #[serde(default)]
    pub t_cool: Option<f64>,

    /// HVAC state (0 idle, 1 heating, 2 cooling).
    #[serde(default)]
    pub tstate: Option<u8>,

    /// Fan running (1) or stopped (0).
    #[serde(default)]
    pub fstate: Option<u8>,

    /// Appliance clock.
    #[serde(default)]
    pub time: Option<DeviceTime>,

    /// Remaining fields, passed through as reported.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ThermostatState {
    /// Returns the operating mode, if the code is a known one.
    #[must_use]
    pub fn mode(&self) -> Option<ThermostatMode> {
        ThermostatMode::try_from(self.tmode).ok()
    }

    /// Returns the fan mode, if reported and known.
    #[must_use]
    pub fn fan_mode(&self) -> Option<FanMode> {
        self.fmode.and_then(|code| FanMode::try_from(code).ok())
    }

    /// Returns `true` if hold is enabled.
    #[must_use]
    pub fn is_hold(&self) -> bool {
        self.hold == Some(1)
    }

    /// Returns `true` if a temporary set point override is active.
    #[must_use]
    pub fn is_override(&self) -> bool {
        self.override_active == Some(1)
    }
}

/// Clock of the appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DeviceTime {
    /// Day of week, 0 for Monday.
    pub day: u8,
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cooling_state() {
        let json = r#"{"temp": 76.0, "tmode": 2, "fmode": 2, "override": 1, "hold": 1,
                       "t_cool": 75.0, "tstate": 2}"#;
        let state: ThermostatState = serde_json::from_str(json).unwrap();

        assert_eq!(state.mode(), Some(ThermostatMode::Cool));
        assert_eq!(state.fan_mode(), Some(FanMode::On));
        assert_eq!(state.t_cool, Some(75.0));
        assert_eq!(state.t_heat, None);
        assert!(state.is_hold());
        assert!(state.is_override());
        assert!(state.extra.is_empty());
    }

    #[test]
    fn missing_tmode_is_rejected() {
        let result: Result<ThermostatState, _> = serde_json::from_str(r#"{"temp": 70.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_mode_code_still_parses() {
        let state: ThermostatState = serde_json::from_str(r#"{"tmode": 5}"#).unwrap();
        assert_eq!(state.tmode, 5);
        assert_eq!(state.mode(), None);
        assert!(!state.is_hold());
    }

    #[test]
    fn parse_time() {
        let state: ThermostatState =
            serde_json::from_str(r#"{"tmode": 0, "time": {"day": 6, "hour": 23, "minute": 59}}"#)
                .unwrap();
        assert_eq!(
            state.time,
            Some(DeviceTime {
                day: 6,
                hour: 23,
                minute: 59
            })
        );
    }
}
