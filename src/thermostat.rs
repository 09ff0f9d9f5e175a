// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level thermostat abstraction.
//!
//! [`Thermostat`] maps each appliance capability to one request against a
//! fixed endpoint. Two operations compose several requests:
//! [`lock`](Thermostat::lock) and [`active_target`](Thermostat::active_target).

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::error::{DeviceError, Error};
use crate::protocol::{Acknowledgement, HttpClient, Protocol, ThermostatConfig, decode};
use crate::response::{
    DeviceName, LockResponse, ModelInfo, RemoteTemperature, SystemInfo, TargetTemperatures,
    ThermostatState,
};
use crate::types::{
    FanMode, LockMode, PriceMessageLine, TargetTemperature, ThermostatMode, UserMessageLine,
};

const TSTAT: &str = "/tstat";
const TTEMP: &str = "/tstat/ttemp";
const REMOTE_TEMP: &str = "/tstat/remote_temp";
const LOCK: &str = "/tstat/lock";
const USER_MESSAGE: &str = "/tstat/uma";
const PRICE_MESSAGE: &str = "/tstat/pma";
const MODEL: &str = "/tstat/model";
const SYS: &str = "/sys";
const SYS_NAME: &str = "/sys/name";

/// A WiFi thermostat reachable over its local REST API.
///
/// The client owns one transport and no other state. Calls are independent:
/// nothing is cached, retried or batched, and the appliance is free to change
/// between two calls.
///
/// # Examples
///
/// ```no_run
/// use radiotherm_lib::{Thermostat, TargetTemperature, ThermostatMode};
///
/// # async fn example() -> radiotherm_lib::Result<()> {
/// let thermostat = Thermostat::new("http://192.168.1.60")?;
///
/// thermostat.set_mode(ThermostatMode::Heat).await?;
///
/// match thermostat.active_target().await? {
///     None => println!("off"),
///     Some(TargetTemperature::Heat(t)) => println!("heating to {t}"),
///     Some(TargetTemperature::Cool(t)) => println!("cooling to {t}"),
///     Some(TargetTemperature::Range { cool, heat }) => println!("{heat}..{cool}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Thermostat<P: Protocol = HttpClient> {
    protocol: P,
}

impl Thermostat<HttpClient> {
    /// Creates a client for the appliance at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`](crate::ConfigError::MissingBaseUrl)
    /// if `base_url` is empty.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        Self::from_config(ThermostatConfig::new(base_url))
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn from_config(config: ThermostatConfig) -> Result<Self, Error> {
        Ok(Self::with_protocol(config.into_client()?))
    }
}

impl<P: Protocol> Thermostat<P> {
    /// Wraps an existing transport.
    pub fn with_protocol(protocol: P) -> Self {
        Self { protocol }
    }

    /// Returns the underlying transport.
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let document = self.protocol.get(path).await?;
        Ok(decode(path, document)?)
    }

    async fn send(&self, path: &str, payload: Value) -> Result<Acknowledgement, Error> {
        self.protocol.post(path, &payload).await
    }

    // ========================================================================
    // Operating state
    // ========================================================================

    /// Returns the full thermostat state.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the document lacks `tmode`.
    pub async fn status(&self) -> Result<ThermostatState, Error> {
        self.fetch(TSTAT).await
    }

    /// Sets the operating mode.
    ///
    /// # Errors
    ///
    /// Returns error if the request could not be completed.
    pub async fn set_mode(&self, mode: ThermostatMode) -> Result<Acknowledgement, Error> {
        self.send(TSTAT, json!({ "tmode": mode.code() })).await
    }

    /// Sets the fan mode.
    ///
    /// # Errors
    ///
    /// Returns error if the request could not be completed.
    pub async fn set_fan_mode(&self, mode: FanMode) -> Result<Acknowledgement, Error> {
        self.send(TSTAT, json!({ "fmode": mode.code() })).await
    }

    /// Enables or disables hold, which keeps the current set points until
    /// released instead of following the schedule.
    ///
    /// # Errors
    ///
    /// Returns error if the request could not be completed.
    pub async fn set_hold(&self, enabled: bool) -> Result<Acknowledgement, Error> {
        self.send(TSTAT, json!({ "hold": u8::from(enabled) })).await
    }

    // ========================================================================
    // Set points
    // ========================================================================

    /// Returns both set points.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or either set point is missing.
    pub async fn target_temperatures(&self) -> Result<TargetTemperatures, Error> {
        self.fetch(TTEMP).await
    }

    /// Sets a temporary heating set point.
    ///
    /// The appliance switches to heat mode as a side effect.
    ///
    /// # Errors
    ///
    /// Returns error if the request could not be completed.
    pub async fn set_temporary_heat(&self, temperature: f64) -> Result<Acknowledgement, Error> {
        self.send(TSTAT, json!({ "t_heat": temperature })).await
    }

    /// Sets a temporary cooling set point.
    ///
    /// The appliance switches to cool mode as a side effect.
    ///
    /// # Errors
    ///
    /// Returns error if the request could not be completed.
    pub async fn set_temporary_cool(&self, temperature: f64) -> Result<Acknowledgement, Error> {
        self.send(TSTAT, json!({ "t_cool": temperature })).await
    }

    /// Returns the set point(s) the appliance is currently working towards.
    ///
    /// Reads the operating mode first. In off mode the result is `None` and
    /// the set points are not requested. Otherwise the set points are fetched
    /// in a second round trip; the two reads are not atomic.
    ///
    /// # Errors
    ///
    /// Returns error if either request fails. No target is derived from a
    /// partial result.
    pub async fn active_target(&self) -> Result<Option<TargetTemperature>, Error> {
        let state = self.status().await?;
        if state.tmode == ThermostatMode::Off.code() {
            return Ok(None);
        }

        let set_points = self.target_temperatures().await?;
        Ok(Some(TargetTemperature::select(state.tmode, &set_points)))
    }

    // ========================================================================
    // Remote sensor
    // ========================================================================

    /// Returns the remote sensor override state.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or `remote_mode` is missing.
    pub async fn remote_temperature(&self) -> Result<RemoteTemperature, Error> {
        self.fetch(REMOTE_TEMP).await
    }

    /// Returns to the built-in sensor.
    ///
    /// # Errors
    ///
    /// Returns error if the request could not be completed.
    pub async fn disable_remote_temperature(&self) -> Result<Acknowledgement, Error> {
        self.send(REMOTE_TEMP, json!({ "remote_mode": 0 })).await
    }

    /// Supplies an external temperature reading, enabling the override.
    ///
    /// # Errors
    ///
    /// Returns error if the request could not be completed.
    pub async fn set_remote_temperature(
        &self,
        temperature: f64,
    ) -> Result<Acknowledgement, Error> {
        self.send(REMOTE_TEMP, json!({ "remote_temp": temperature }))
            .await
    }

    // ========================================================================
    // Keypad lock
    // ========================================================================

    /// Reads the keypad lock, optionally changing it first.
    ///
    /// With `Some(mode)` the transition is requested before reading. If the
    /// appliance does not acknowledge it, the read is skipped and
    /// [`DeviceError::NotAcknowledged`] is returned.
    ///
    /// # Errors
    ///
    /// Returns error if a request fails, the transition is not acknowledged,
    /// or the reported level is unknown.
    pub async fn lock(&self, mode: Option<LockMode>) -> Result<LockMode, Error> {
        if let Some(mode) = mode {
            let ack = self.send(LOCK, json!({ "lock_mode": mode.code() })).await?;
            if !ack.is_acknowledged() {
                return Err(DeviceError::NotAcknowledged {
                    path: LOCK.to_string(),
                }
                .into());
            }
        }

        let response: LockResponse = self.fetch(LOCK).await?;
        Ok(response.mode()?)
    }

    // ========================================================================
    // Messages
    // ========================================================================

    /// Shows a line in the user message area.
    ///
    /// # Errors
    ///
    /// Returns error if the request could not be completed.
    pub async fn show_user_message(
        &self,
        line: UserMessageLine,
        message: &str,
    ) -> Result<Acknowledgement, Error> {
        self.send(
            USER_MESSAGE,
            json!({ "line": line.value(), "message": message }),
        )
        .await
    }

    /// Shows a line in the price message area.
    ///
    /// # Errors
    ///
    /// Returns error if the request could not be completed.
    pub async fn show_price_message(
        &self,
        line: PriceMessageLine,
        message: &str,
    ) -> Result<Acknowledgement, Error> {
        self.send(
            PRICE_MESSAGE,
            json!({ "line": line.value(), "message": message }),
        )
        .await
    }

    // ========================================================================
    // Device information
    // ========================================================================

    /// Returns the hardware model string.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or `model` is missing.
    pub async fn model(&self) -> Result<String, Error> {
        let info: ModelInfo = self.fetch(MODEL).await?;
        Ok(info.model)
    }

    /// Returns network module information.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or `uuid` is missing.
    pub async fn system_info(&self) -> Result<SystemInfo, Error> {
        self.fetch(SYS).await
    }

    /// Returns the friendly name.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or `name` is missing.
    pub async fn name(&self) -> Result<String, Error> {
        let name: DeviceName = self.fetch(SYS_NAME).await?;
        Ok(name.name)
    }

    /// Renames the appliance.
    ///
    /// # Errors
    ///
    /// Returns error if the request could not be completed.
    pub async fn set_name(&self, name: &str) -> Result<Acknowledgement, Error> {
        self.send(SYS_NAME, json!({ "name": name })).await
    }
}
