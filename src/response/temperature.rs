// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Set point and remote sensor responses.

use serde::Deserialize;

/// Both set points from `GET /tstat/ttemp`.
///
/// # Examples
///
/// ```
/// use radiotherm_lib::response::TargetTemperatures;
///
/// let json = r#"{"t_cool": 78.0, "t_heat": 68.0}"#;
/// let set_points: TargetTemperatures = serde_json::from_str(json).unwrap();
/// assert_eq!(set_points.t_cool, 78.0);
/// assert_eq!(set_points.t_heat, 68.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TargetTemperatures {
    /// Cooling set point.
    pub t_cool: f64,
    /// Heating set point.
    pub t_heat: f64,
}

/// Remote sensor override state from `GET /tstat/remote_temp`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RemoteTemperature {
    /// Override enabled (1) or disabled (0).
    pub remote_mode: u8,

    /// Externally supplied temperature, present while the override is on.
    #[serde(default)]
    pub remote_temp: Option<f64>,
}

impl RemoteTemperature {
    /// Returns `true` if the remote reading replaces the built-in sensor.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.remote_mode != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_set_points_parse_as_float() {
        let set_points: TargetTemperatures =
            serde_json::from_str(r#"{"t_cool": 78, "t_heat": 68}"#).unwrap();
        assert_eq!(
            set_points,
            TargetTemperatures {
                t_cool: 78.0,
                t_heat: 68.0
            }
        );
    }

    #[test]
    fn missing_set_point_is_rejected() {
        let result: Result<TargetTemperatures, _> = serde_json::from_str(r#"{"t_heat": 68}"#);
        assert!(result.is_err());
    }

    #[test]
    fn remote_disabled() {
        let remote: RemoteTemperature = serde_json::from_str(r#"{"remote_mode": 0}"#).unwrap();
        assert!(!remote.is_enabled());
        assert_eq!(remote.remote_temp, None);
    }

    #[test]
    fn remote_enabled() {
        let remote: RemoteTemperature =
            serde_json::from_str(r#"{"remote_mode": 1, "remote_temp": 71.5}"#).unwrap();
        assert!(remote.is_enabled());
        assert_eq!(remote.remote_temp, Some(71.5));
    }
}
