//! Application-level errors

use domain::DomainError;
use thiserror::Error;

use crate::ports::{DetailError, SearchError};

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Ride detail lookup failed
    #[error(transparent)]
    Detail(#[from] DetailError),

    /// Ride search failed
    #[error(transparent)]
    Search(#[from] SearchError),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Check if the failure was a transport problem a caller might retry
    ///
    /// Nothing in this crate retries; the flag only informs caller policy.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ExternalService(_)
                | Self::Detail(DetailError::Transport(_))
                | Self::Search(SearchError::Transport(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_are_retryable() {
        assert!(ApplicationError::ExternalService("down".into()).is_retryable());
        assert!(ApplicationError::from(DetailError::Transport("t".into())).is_retryable());
        assert!(ApplicationError::from(SearchError::Transport("t".into())).is_retryable());
    }

    #[test]
    fn semantic_errors_are_not_retryable() {
        assert!(!ApplicationError::from(DetailError::NotFound("42".into())).is_retryable());
        assert!(
            !ApplicationError::from(SearchError::BackendRejected("nope".into())).is_retryable()
        );
        assert!(
            !ApplicationError::from(DomainError::ValidationError("blank".into())).is_retryable()
        );
    }

    #[test]
    fn backend_rejection_passes_through_display() {
        let err = ApplicationError::from(SearchError::BackendRejected(
            "no drivers available".into(),
        ));
        assert_eq!(err.to_string(), "no drivers available");
    }
}
