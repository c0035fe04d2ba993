use tcp_client::TransportError;
use thiserror::Error;

/// High-level API errors for Hegel amplifier operations
///
/// Mirrors the transport taxonomy (connection vs. timeout) and adds the
/// protocol and validation failures that only exist above the socket.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Socket-level failure: resolution, refused/reset connection,
    /// premature close
    #[error("Connection error: {0}")]
    Connection(String),

    /// No complete reply arrived within the configured window
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The reply did not match the expected command or format
    ///
    /// Indicates a firmware or protocol mismatch; never retried here.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// An operation parameter was rejected before any network I/O
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Transport failures map onto the matching API variants unchanged.
impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Connection(msg) => ApiError::Connection(msg),
            TransportError::Timeout(msg) => ApiError::Timeout(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_conversion() {
        let transport = TransportError::Connection("refused".to_string());
        let api: ApiError = transport.into();
        assert!(matches!(api, ApiError::Connection(_)));

        let transport = TransportError::Timeout("no reply".to_string());
        let api: ApiError = transport.into();
        assert!(matches!(api, ApiError::Timeout(_)));
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Protocol("unexpected reply".to_string());
        assert_eq!(format!("{}", err), "Protocol error: unexpected reply");

        let err = ApiError::InvalidParameter("volume 120 out of range".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid parameter: volume 120 out of range"
        );
    }
}
