//! Generic request/response envelope for the device's JSON control protocol
//!
//! Every method call shares the same wire shape: `{method, id, params,
//! version}` out, `{result?, error?, id}` back. The payload inside `result`
//! varies per method (empty array, singleton array, or bare object) and is a
//! contract supplied by the caller through the type parameter.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::RpcError;

/// Fixed call identifier used for every request
///
/// Calls are synchronous and never pipelined, so reusing the same id across
/// calls is safe. The device must echo it unchanged.
pub const CALL_ID: u32 = 1;

/// Params or payload shape for methods that carry no data (`[]` on the wire)
pub type Empty = [(); 0];

/// A method call in the device's request shape
#[derive(Debug, Clone, Serialize)]
pub struct MethodCall<P> {
    pub method: String,
    pub id: u32,
    pub params: P,
    pub version: String,
}

impl<P: Serialize> MethodCall<P> {
    pub fn new(method: &str, params: P, version: &str) -> Self {
        Self {
            method: method.to_string(),
            id: CALL_ID,
            params,
            version: version.to_string(),
        }
    }
}

/// Error tuple returned by the device: `[code, message]`
///
/// The code is usually an integer but is treated as opaque.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope(pub serde_json::Value, pub String);

/// A method response in the device's response shape
///
/// Exactly one of `result` or `error` must be present; anything else is a
/// protocol violation reported as [`RpcError::Envelope`].
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct MethodResult<T> {
    pub id: u32,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<ErrorEnvelope>,
}

impl<T> MethodResult<T> {
    /// Extract the typed payload, enforcing the envelope invariants
    ///
    /// Checks that the device echoed the expected call id and that the
    /// response carries exactly one of payload or error. A device-reported
    /// error surfaces as [`RpcError::Device`], never as a zero value.
    pub fn into_payload(self, expected_id: u32) -> Result<T, RpcError> {
        if self.id != expected_id {
            return Err(RpcError::Envelope(format!(
                "call id mismatch: sent {expected_id}, device echoed {}",
                self.id
            )));
        }
        match (self.result, self.error) {
            (Some(_), Some(_)) => Err(RpcError::Envelope(
                "response carries both result and error".to_string(),
            )),
            (None, None) => Err(RpcError::Envelope(
                "response carries neither result nor error".to_string(),
            )),
            (None, Some(ErrorEnvelope(code, message))) => Err(RpcError::Device {
                code: code.to_string(),
                message,
            }),
            (Some(payload), None) => Ok(payload),
        }
    }
}

/// Encode a method call into its JSON request body
pub fn encode<P: Serialize>(call: &MethodCall<P>) -> Result<Vec<u8>, RpcError> {
    serde_json::to_vec(call).map_err(|e| RpcError::Envelope(e.to_string()))
}

/// Decode a JSON response body and extract the typed payload
pub fn decode<T: DeserializeOwned>(body: &[u8], expected_id: u32) -> Result<T, RpcError> {
    let result: MethodResult<T> =
        serde_json::from_slice(body).map_err(|e| RpcError::Envelope(e.to_string()))?;
    result.into_payload(expected_id)
}
