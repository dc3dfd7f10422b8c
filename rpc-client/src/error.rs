//! Error types for the RPC client

use thiserror::Error;

/// Errors that can occur during device communication
#[derive(Debug, Error)]
pub enum RpcError {
    /// Network or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The response did not conform to the expected envelope shape
    #[error("Envelope error: {0}")]
    Envelope(String),

    /// Structured application error returned by the device
    #[error("Device error: {message} (code {code})")]
    Device { code: String, message: String },
}
