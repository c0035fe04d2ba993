//! Error types for the TCP line client

use thiserror::Error;

/// Errors that can occur during a request/reply exchange
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection-level failure: resolution, refusal, reset, or a
    /// read/write error other than a timeout
    #[error("Connection error: {0}")]
    Connection(String),

    /// No complete reply line arrived within the configured window
    #[error("Timed out waiting for reply: {0}")]
    Timeout(String),
}
