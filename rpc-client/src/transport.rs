//! HTTP delivery and composable request decorators
//!
//! The base [`HttpTransport`] performs raw delivery over `ureq`. Cross-cutting
//! behavior is layered on top as decorators that wrap an `Arc<dyn Transport>`
//! and transform the outgoing request before handing it to the inner layer.
//! Decorators never retry and never swallow delivery errors.

use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use crate::error::RpcError;

/// Header used for pre-shared key authentication
pub const HEADER_AUTH_PSK: &str = "X-Auth-PSK";

/// An outgoing HTTP POST request, before delivery
#[derive(Debug, Clone)]
pub struct WireRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl WireRequest {
    /// Build a JSON request for the given URL
    pub fn json(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            url: url.into(),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
            body,
        }
    }

    /// Build a SOAP request carrying the given SOAPACTION header
    pub fn soap(url: impl Into<String>, soap_action: &str, body: Vec<u8>) -> Self {
        Self {
            url: url.into(),
            headers: vec![
                (
                    "Content-Type".to_string(),
                    "text/xml; charset=UTF-8".to_string(),
                ),
                ("SOAPACTION".to_string(), soap_action.to_string()),
            ],
            body,
        }
    }

    /// Set a header, replacing any existing value for the same name
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
    }

    /// Look up a header value by name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// The raw result of a delivered request
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl WireResponse {
    /// Whether the HTTP status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A delivery mechanism for outgoing requests
///
/// Implemented by the base HTTP transport and by every decorator. A decorator
/// applies its transformation and delegates to the layer it wraps, so an
/// ordered decorator chain composes into a single `Transport` value.
pub trait Transport: Send + Sync {
    fn execute(&self, request: WireRequest) -> Result<WireResponse, RpcError>;
}

/// Base transport delivering requests over a blocking `ureq` agent
#[derive(Debug, Clone)]
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    /// Create a transport with default connect/read timeouts
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(5))
                .timeout_read(Duration::from_secs(10))
                .build(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: WireRequest) -> Result<WireResponse, RpcError> {
        let mut req = self.agent.post(&request.url);
        for (name, value) in &request.headers {
            req = req.set(name, value);
        }

        // Non-2xx responses are not delivery failures at this layer; the
        // caller decides what a status code means for its protocol.
        let response = match req.send_bytes(&request.body) {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(err)) => return Err(RpcError::Network(err.to_string())),
        };

        let status = response.status();
        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| RpcError::Network(e.to_string()))?;

        Ok(WireResponse { status, body })
    }
}

/// Decorator that sets the pre-shared key header on every outgoing request
pub struct AuthPsk {
    inner: Arc<dyn Transport>,
    psk: String,
}

impl AuthPsk {
    /// Wrap an existing transport, adding PSK header injection
    ///
    /// The wrapped transport is shared, not mutated; callers holding the
    /// original value observe no change in its behavior.
    pub fn wrap(inner: Arc<dyn Transport>, psk: impl Into<String>) -> Arc<dyn Transport> {
        Arc::new(Self {
            inner,
            psk: psk.into(),
        })
    }
}

impl Transport for AuthPsk {
    fn execute(&self, mut request: WireRequest) -> Result<WireResponse, RpcError> {
        request.set_header(HEADER_AUTH_PSK, &self.psk);
        self.inner.execute(request)
    }
}
