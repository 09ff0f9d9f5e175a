// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lock, model and system responses.

use serde::Deserialize;

use crate::error::ValueError;
use crate::types::LockMode;

/// Keypad lock state from `GET /tstat/lock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LockResponse {
    /// Lock level code.
    pub lock_mode: u8,
}

impl LockResponse {
    /// Returns the lock level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidLockMode` for an unknown code.
    pub fn mode(&self) -> Result<LockMode, ValueError> {
        LockMode::try_from(self.lock_mode)
    }
}

/// Hardware model from `GET /tstat/model`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelInfo {
    /// Model and firmware string, e.g. `CT50 V1.94`.
    pub model: String,
}

/// Network module information from `GET /sys`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SystemInfo {
    /// Unique identifier (MAC-derived).
    pub uuid: String,

    /// API version implemented by the firmware.
    #[serde(default)]
    pub api_version: Option<u32>,

    /// Firmware version.
    #[serde(default)]
    pub fw_version: Option<String>,

    /// WLAN module firmware version.
    #[serde(default)]
    pub wlan_fw_version: Option<String>,
}

/// Friendly name from `GET /sys/name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceName {
    /// The name shown by the appliance.
    pub name: String,
}
