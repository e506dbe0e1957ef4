//! Geocoding port
//!
//! Resolves a free-text address into a coordinate pair. Implementations take
//! the first (highest-confidence) candidate only and never retry.

use async_trait::async_trait;
use domain::value_objects::Coordinate;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Geocoding failures, both recoverable by the caller
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum GeocodeError {
    /// The service answered but had no candidate for the address
    #[error("Address not found: {0}")]
    NotFound(String),

    /// Network failure, timeout, non-2xx status, or malformed response
    #[error("Geocoding transport error: {0}")]
    Transport(String),
}

/// Port for address-to-coordinate resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve an address to a coordinate
    ///
    /// An empty or blank address resolves to `GeocodeError::NotFound`.
    async fn resolve(&self, address: &str) -> Result<Coordinate, GeocodeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeocodeError::NotFound("Airport".to_string());
        assert_eq!(err.to_string(), "Address not found: Airport");
    }

    #[test]
    fn error_serializes_tagged() {
        let json = serde_json::to_value(GeocodeError::Transport("HTTP 503".into())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "transport", "detail": "HTTP 503" })
        );
    }

    #[tokio::test]
    async fn mock_geocoding_port() {
        let mut mock = MockGeocodingPort::new();
        mock.expect_resolve()
            .returning(|_| Ok(Coordinate::new(40.0, -75.0).unwrap()));

        let coord = mock.resolve("Central Station").await.unwrap();
        assert!((coord.latitude() - 40.0).abs() < f64::EPSILON);
    }
}
