use bravia_api::ApiError;
use thiserror::Error;

use crate::resolve::ResolveError;

/// Errors surfaced by the SDK facade
#[derive(Debug, Error)]
pub enum SdkError {
    /// A device API call failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A name could not be resolved to a device resource
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Type alias for results that can return an SdkError
pub type Result<T> = std::result::Result<T, SdkError>;
