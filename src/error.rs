// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `radiotherm_lib` library.
//!
//! Only [`ConfigError`] is raised at construction time. Every other variant is
//! the "no result" side of a request: the exchange did not complete, the
//! appliance answered with a failure status, or the body could not be decoded.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The client could not be configured.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A request argument is outside the range the appliance accepts.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The HTTP exchange could not be completed.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The appliance refused an operation.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors raised while building a client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No base address was supplied.
    #[error("base address is required")]
    MissingBaseUrl,

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The actual value that was provided.
        actual: u8,
    },

    /// An integer does not name a known thermostat mode.
    #[error("invalid thermostat mode: {0}")]
    InvalidThermostatMode(u8),

    /// An integer does not name a known fan mode.
    #[error("invalid fan mode: {0}")]
    InvalidFanMode(u8),

    /// An integer does not name a known keypad lock mode.
    #[error("invalid lock mode: {0}")]
    InvalidLockMode(u8),
}

/// Errors raised when the HTTP exchange fails.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The appliance answered with a non-success HTTP status.
    #[error("HTTP {code} - {reason}")]
    Status {
        /// Numeric HTTP status code.
        code: u16,
        /// Canonical reason phrase, or `Unknown`.
        reason: String,
    },
}

impl ProtocolError {
    /// Returns the HTTP status code, if the appliance sent one.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Status { code, .. } => Some(*code),
        }
    }
}

/// Errors related to decoding appliance responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body is not JSON, or lacks a field its endpoint always reports.
    #[error("malformed response from {path}: {source}")]
    Malformed {
        /// Request path the body was received from.
        path: String,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors reported by the appliance itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// A state change was not acknowledged with a `success` marker.
    #[error("appliance did not acknowledge request to {path}")]
    NotAcknowledged {
        /// Request path of the rejected POST.
        path: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
