// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport helpers for the thermostat's REST/JSON API.
//!
//! The appliance exposes a fixed set of endpoints below its base address.
//! Reads are plain `GET`s returning a JSON document; writes are `POST`s with a
//! JSON object body, answered with a document that carries a `success` field
//! when the change was accepted.
//!
//! Every helper reduces the exchange to one of three observable outcomes:
//!
//! | Outcome | `GET` | `POST` |
//! |---------|-------|--------|
//! | Completed | `Ok(document)` | `Ok(Acknowledgement::Acknowledged)` |
//! | Appliance declined | n/a | `Ok(Acknowledgement::NotAcknowledged)` |
//! | No result | `Err(_)` | `Err(_)` |

mod http;

pub use http::{HttpClient, ThermostatConfig};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Error, ParseError};

/// The appliance's answer to a state-changing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Acknowledgement {
    /// The response carried a `success` field.
    Acknowledged,
    /// The response was well-formed but carried no `success` field.
    NotAcknowledged,
}

impl Acknowledgement {
    /// Reduces a `POST` response document to an acknowledgement.
    ///
    /// Only the presence of `success` matters; its value is not inspected.
    #[must_use]
    pub fn from_document(document: &Map<String, Value>) -> Self {
        Self::from(document.contains_key("success"))
    }

    /// Returns `true` if the appliance acknowledged the request.
    #[must_use]
    pub const fn is_acknowledged(self) -> bool {
        matches!(self, Self::Acknowledged)
    }
}

impl From<bool> for Acknowledgement {
    fn from(value: bool) -> Self {
        if value {
            Self::Acknowledged
        } else {
            Self::NotAcknowledged
        }
    }
}

impl From<Acknowledgement> for bool {
    fn from(value: Acknowledgement) -> Self {
        value.is_acknowledged()
    }
}

/// Trait for transports that can reach the thermostat's API.
///
/// Implementations resolve `path` against their own base address and must
/// not retry, cache or reorder requests.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Issues a `GET` and returns the decoded JSON document unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`] if the exchange fails or the status is not
    /// 2xx, and [`Error::Parse`] if the body is not JSON.
    async fn get(&self, path: &str) -> Result<Value, Error>;

    /// Issues a `POST` with `payload` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`] if the exchange fails or the status is not
    /// 2xx, and [`Error::Parse`] if the body is not a JSON object.
    async fn post(&self, path: &str, payload: &Value) -> Result<Acknowledgement, Error>;
}

/// Parses a raw response body received from `path`.
///
/// # Errors
///
/// Returns [`ParseError::Malformed`] if the body does not decode as `T`.
pub fn parse_body<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, ParseError> {
    serde_json::from_str(body).map_err(|source| ParseError::Malformed {
        path: path.to_string(),
        source,
    })
}

/// Decodes an already-parsed document from `path` into a typed response.
///
/// # Errors
///
/// Returns [`ParseError::Malformed`] if a required field is missing or has
/// the wrong type.
pub fn decode<T: DeserializeOwned>(path: &str, document: Value) -> Result<T, ParseError> {
    serde_json::from_value(document).map_err(|source| ParseError::Malformed {
        path: path.to_string(),
        source,
    })
}
