// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating and fan mode codes.

use std::fmt;

use crate::error::ValueError;

/// Operating mode of the thermostat (`tmode`).
///
/// # Examples
///
/// ```
/// use radiotherm_lib::types::ThermostatMode;
///
/// assert_eq!(ThermostatMode::Cool.code(), 2);
/// assert_eq!(ThermostatMode::try_from(3).unwrap(), ThermostatMode::Auto);
/// assert!(ThermostatMode::try_from(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThermostatMode {
    /// Heating and cooling disabled.
    Off,
    /// Heat to the heating set point.
    Heat,
    /// Cool to the cooling set point.
    Cool,
    /// Keep the temperature between both set points.
    Auto,
}

impl ThermostatMode {
    /// Returns the numeric code used on the wire.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Heat => 1,
            Self::Cool => 2,
            Self::Auto => 3,
        }
    }

    /// Returns the mode name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Heat => "Heat",
            Self::Cool => "Cool",
            Self::Auto => "Auto",
        }
    }
}

impl fmt::Display for ThermostatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for ThermostatMode {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::Heat),
            2 => Ok(Self::Cool),
            3 => Ok(Self::Auto),
            other => Err(ValueError::InvalidThermostatMode(other)),
        }
    }
}

/// Fan mode of the thermostat (`fmode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FanMode {
    /// Fan runs only while heating or cooling.
    #[default]
    Auto,
    /// Fan runs periodically to circulate air.
    Circulate,
    /// Fan runs continuously.
    On,
}

impl FanMode {
    /// Returns the numeric code used on the wire.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Auto => 0,
            Self::Circulate => 1,
            Self::On => 2,
        }
    }
}

impl TryFrom<u8> for FanMode {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Auto),
            1 => Ok(Self::Circulate),
            2 => Ok(Self::On),
            other => Err(ValueError::InvalidFanMode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thermostat_mode_round_trips_codes() {
        for code in 0..=3 {
            let mode = ThermostatMode::try_from(code).unwrap();
            assert_eq!(mode.code(), code);
        }
    }

    #[test]
    fn thermostat_mode_invalid_code() {
        assert_eq!(
            ThermostatMode::try_from(9),
            Err(ValueError::InvalidThermostatMode(9))
        );
    }

    #[test]
    fn thermostat_mode_display() {
        assert_eq!(ThermostatMode::Heat.to_string(), "Heat");
        assert_eq!(ThermostatMode::Off.to_string(), "Off");
    }

    #[test]
    fn fan_mode_codes() {
        assert_eq!(FanMode::default(), FanMode::Auto);
        assert_eq!(FanMode::On.code(), 2);
        assert_eq!(FanMode::try_from(1).unwrap(), FanMode::Circulate);
        assert!(FanMode::try_from(3).is_err());
    }
}
