//! Private JSON-RPC client for device communication
//!
//! This crate provides the wire-level building blocks used by `bravia-api`:
//! the generic request/response envelope, a blocking HTTP transport, and
//! composable request decorators (pre-shared key header injection). It also
//! delivers raw SOAP posts for the one legacy channel that bypasses the JSON
//! envelope.

mod envelope;
mod error;
mod transport;

pub use envelope::{decode, encode, Empty, ErrorEnvelope, MethodCall, MethodResult, CALL_ID};
pub use error::RpcError;
pub use transport::{
    AuthPsk, HttpTransport, Transport, WireRequest, WireResponse, HEADER_AUTH_PSK,
};

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A client executing envelope-encoded method calls over a transport chain
///
/// The transport chain is immutable; [`RpcClient::decorated`] produces a new
/// client with one more decorator while leaving the original untouched.
#[derive(Clone)]
pub struct RpcClient {
    transport: Arc<dyn Transport>,
}

impl RpcClient {
    /// Create a client over the default HTTP transport
    pub fn new() -> Self {
        Self {
            transport: Arc::new(HttpTransport::new()),
        }
    }

    /// Create a client over a caller-supplied transport chain
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// The transport chain this client delivers through
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    /// Produce a new client whose chain is extended by one decorator
    pub fn decorated(&self, wrap: impl FnOnce(Arc<dyn Transport>) -> Arc<dyn Transport>) -> Self {
        Self {
            transport: wrap(self.transport()),
        }
    }

    /// Execute one envelope-encoded method call and decode its payload
    ///
    /// Blocks until the HTTP round trip completes or fails. The payload shape
    /// `T` is the per-method contract supplied by the caller.
    pub fn call<P, T>(
        &self,
        url: &str,
        method: &str,
        version: &str,
        params: P,
    ) -> Result<T, RpcError>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let body = encode(&MethodCall::new(method, params, version))?;
        let response = self.transport.execute(WireRequest::json(url, body))?;
        decode(&response.body, CALL_ID)
    }

    /// Deliver a raw SOAP post, returning the undecoded response
    ///
    /// Used by the legacy infrared-command channel, which has no JSON
    /// envelope and signals failure only through the HTTP status code.
    pub fn post_soap(
        &self,
        url: &str,
        soap_action: &str,
        body: Vec<u8>,
    ) -> Result<WireResponse, RpcError> {
        self.transport.execute(WireRequest::soap(url, soap_action, body))
    }
}

impl Default for RpcClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct StaticTransport {
        seen: Mutex<Vec<WireRequest>>,
        body: &'static [u8],
    }

    impl StaticTransport {
        fn new(body: &'static [u8]) -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
                body,
            })
        }
    }

    impl Transport for StaticTransport {
        fn execute(&self, request: WireRequest) -> Result<WireResponse, RpcError> {
            self.seen.lock().unwrap().push(request);
            Ok(WireResponse {
                status: 200,
                body: self.body.to_vec(),
            })
        }
    }

    #[test]
    fn test_call_round_trip() {
        let transport = StaticTransport::new(br#"{"result":[{"status":"standby"}],"id":1}"#);
        let client = RpcClient::with_transport(transport.clone());

        #[derive(serde::Deserialize)]
        struct Status {
            status: String,
        }

        let (status,): (Status,) = client
            .call(
                "http://device/sony/system",
                "getPowerStatus",
                "1.0",
                Empty::default(),
            )
            .unwrap();
        assert_eq!(status.status, "standby");

        let request = transport.seen.lock().unwrap().pop().unwrap();
        assert_eq!(request.url, "http://device/sony/system");
        assert_eq!(request.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_decorated_does_not_affect_original() {
        let transport = StaticTransport::new(br#"{"result":[],"id":1}"#);
        let client = RpcClient::with_transport(transport.clone());
        let _authed = client.decorated(|inner| AuthPsk::wrap(inner, "sosecret"));

        let _: Empty = client
            .call("http://device/sony/system", "setPowerStatus", "1.0", Empty::default())
            .unwrap();

        let request = transport.seen.lock().unwrap().pop().unwrap();
        assert_eq!(request.header(HEADER_AUTH_PSK), None);
    }

    #[test]
    fn test_post_soap_keeps_status() {
        let transport = StaticTransport::new(b"");
        let client = RpcClient::with_transport(transport.clone());

        let response = client
            .post_soap("http://device/sony/ircc", "\"urn:x#Y\"", b"<xml/>".to_vec())
            .unwrap();
        assert!(response.is_success());

        let request = transport.seen.lock().unwrap().pop().unwrap();
        assert_eq!(request.header("SOAPACTION"), Some("\"urn:x#Y\""));
    }
}
