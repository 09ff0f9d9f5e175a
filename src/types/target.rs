// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The set point(s) the thermostat is currently working towards.

use crate::response::TargetTemperatures;

/// Active target temperature, derived from the operating mode.
///
/// Produced by [`Thermostat::active_target`](crate::Thermostat::active_target).
/// An appliance in off mode has no target at all, which is represented by
/// `None` rather than by a variant of this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetTemperature {
    /// Heating towards this set point.
    Heat(f64),
    /// Cooling towards this set point.
    Cool(f64),
    /// Holding between both set points.
    Range {
        /// Cooling set point.
        cool: f64,
        /// Heating set point.
        heat: f64,
    },
}

impl TargetTemperature {
    /// Picks the active set point for a non-off `tmode`.
    ///
    /// Heat (1) and cool (2) select a single set point. Every other code,
    /// including auto (3), selects both.
    #[must_use]
    pub fn select(tmode: u8, set_points: &TargetTemperatures) -> Self {
        match tmode {
            1 => Self::Heat(set_points.t_heat),
            2 => Self::Cool(set_points.t_cool),
            _ => Self::Range {
                cool: set_points.t_cool,
                heat: set_points.t_heat,
            },
        }
    }

    /// Returns the single set point, if only one is active.
    #[must_use]
    pub fn single(self) -> Option<f64> {
        match self {
            Self::Heat(t) | Self::Cool(t) => Some(t),
            Self::Range { .. } => None,
        }
    }

    /// Returns `(cool, heat)` when both set points are active.
    #[must_use]
    pub fn as_pair(self) -> Option<(f64, f64)> {
        match self {
            Self::Range { cool, heat } => Some((cool, heat)),
            Self::Heat(_) | Self::Cool(_) => None,
        }
    }
}
