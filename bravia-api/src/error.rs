use rpc_client::RpcError;
use thiserror::Error;

/// High-level API errors for Bravia operations
///
/// This enum provides domain-specific error types that abstract away the
/// underlying transport details. The core never recovers from these locally;
/// every error is returned to the caller to decide retry/abort policy.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// Raised when the TV is unreachable, the connection times out, or the
    /// HTTP round trip fails below the protocol layer. Never retried here.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response did not conform to the expected envelope shape
    ///
    /// Covers malformed JSON, an envelope carrying both or neither of
    /// result/error, and a call id echoed incorrectly.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Structured application error reported by the TV
    #[error("Device error: {message} (code {code})")]
    Device { code: String, message: String },

    /// Non-2xx HTTP status on the legacy IRCC channel
    ///
    /// The IRCC channel has no JSON error envelope, so the status code is
    /// the only failure signal it offers.
    #[error("Device returned HTTP status {0}")]
    Status(u16),

    /// Invalid parameter value supplied by the caller
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The base address could not be combined with a service path
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<RpcError> for ApiError {
    fn from(error: RpcError) -> Self {
        match error {
            RpcError::Network(msg) => ApiError::Transport(msg),
            RpcError::Envelope(msg) => ApiError::Protocol(msg),
            RpcError::Device { code, message } => ApiError::Device { code, message },
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(error: url::ParseError) -> Self {
        ApiError::InvalidUrl(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_error_conversion() {
        let api_error: ApiError = RpcError::Network("connection refused".to_string()).into();
        assert!(matches!(api_error, ApiError::Transport(_)));

        let api_error: ApiError = RpcError::Envelope("both result and error".to_string()).into();
        assert!(matches!(api_error, ApiError::Protocol(_)));

        let api_error: ApiError = RpcError::Device {
            code: "7".to_string(),
            message: "Illegal State".to_string(),
        }
        .into();
        assert!(matches!(api_error, ApiError::Device { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Device {
            code: "7".to_string(),
            message: "Illegal State".to_string(),
        };
        assert_eq!(format!("{err}"), "Device error: Illegal State (code 7)");

        let err = ApiError::Status(503);
        assert_eq!(format!("{err}"), "Device returned HTTP status 503");
    }
}
