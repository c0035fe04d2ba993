use hegel_api::ApiError;
use thiserror::Error;

/// Errors surfaced at the SDK boundary
///
/// Protocol and transport failures pass through unchanged from the API
/// layer; the SDK only adds the conditions it owns (missing host,
/// settings persistence).
#[derive(Debug, Error)]
pub enum SdkError {
    /// No device host is configured yet; set or adopt one first
    #[error("no device host configured")]
    NoHost,

    /// An operation against the device failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Persisting a setting failed
    #[error("settings error: {0}")]
    Settings(#[from] std::io::Error),
}

/// Type alias for results that can return an SdkError
pub type Result<T> = std::result::Result<T, SdkError>;
