// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the thermostat API.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::{Map, Value};

use crate::error::{ConfigError, Error, ProtocolError};
use crate::protocol::{Acknowledgement, Protocol, parse_body};

// ============================================================================
// ThermostatConfig - Connection parameters
// ============================================================================

/// Configuration for a thermostat client.
///
/// The base address is used verbatim: request paths such as `/tstat` are
/// appended to it by plain concatenation, so it should carry a scheme and no
/// trailing slash.
///
/// # Examples
///
/// ```
/// use radiotherm_lib::protocol::ThermostatConfig;
/// use std::time::Duration;
///
/// let config = ThermostatConfig::new("http://192.168.1.60")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url(), "http://192.168.1.60");
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct ThermostatConfig {
    base_url: String,
    timeout: Duration,
}

impl ThermostatConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the appliance at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base address.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] if the base address is empty,
    /// or [`ConfigError::ClientBuild`] if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ConfigError::ClientBuild(e.to_string()))?;

        Ok(HttpClient {
            base_url: self.base_url,
            client,
        })
    }
}

// ============================================================================
// HttpClient - reqwest-backed transport
// ============================================================================

/// HTTP client bound to one thermostat.
///
/// Owns a single reqwest [`Client`], so connections may be reused between
/// calls. Nothing else is shared or cached.
///
/// # Examples
///
/// ```no_run
/// use radiotherm_lib::protocol::{HttpClient, Protocol};
///
/// # async fn example() -> radiotherm_lib::Result<()> {
/// let client = HttpClient::new("http://192.168.1.60")?;
/// let state = client.get("/tstat").await?;
/// println!("{state}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a client with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] if `base_url` is empty.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        ThermostatConfig::new(base_url).into_client()
    }

    /// Returns the base address of the appliance.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends one request and returns the body of a 2xx response.
    ///
    /// Every failure is logged at `warn` before being returned.
    async fn exchange(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> Result<String, ProtocolError> {
        tracing::debug!(method, url = %url, "Sending HTTP request");

        let response = request.send().await.inspect_err(|e| {
            tracing::warn!(method, url = %url, error = %e, "HTTP request failed");
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                method,
                url = %url,
                status = status.as_u16(),
                "Thermostat returned an error status"
            );
            return Err(ProtocolError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await.inspect_err(|e| {
            tracing::warn!(method, url = %url, error = %e, "Failed to read response body");
        })?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(body)
    }
}

impl Protocol for HttpClient {
    async fn get(&self, path: &str) -> Result<Value, Error> {
        let url = self.build_url(path);
        let body = self.exchange("GET", &url, self.client.get(&url)).await?;

        parse_body(path, &body)
            .inspect_err(|e| tracing::warn!(url = %url, error = %e, "Malformed response"))
            .map_err(Error::from)
    }

    async fn post(&self, path: &str, payload: &Value) -> Result<Acknowledgement, Error> {
        let url = self.build_url(path);
        let request = self.client.post(&url).json(payload);
        let body = self.exchange("POST", &url, request).await?;

        let document: Map<String, Value> = parse_body(path, &body)
            .inspect_err(|e| tracing::warn!(url = %url, error = %e, "Malformed response"))?;

        Ok(Acknowledgement::from_document(&document))
    }
}
