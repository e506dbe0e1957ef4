//! Ride backend error types

use thiserror::Error;

/// Errors that can occur when talking to the ride backend
#[derive(Debug, Error)]
pub enum RideServiceError {
    /// Connection to the backend failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Backend answered with an unexpected status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the backend response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Backend reports that the ride does not exist
    #[error("Ride not found: {0}")]
    RideNotFound(String),

    /// Backend explicitly rejected the request (`success: false`)
    #[error("{0}")]
    Rejected(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl RideServiceError {
    /// Returns true if this error is retryable
    ///
    /// No retries happen inside this crate; callers decide.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout { .. }
        )
    }
}
