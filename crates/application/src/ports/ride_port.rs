//! Ride backend ports
//!
//! Request/response contracts of the ride backend: detail lookup by
//! identifier, search by pickup/dropoff, and ride creation.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;
use domain::{NewRide, RideDetail, RideQuery, RideSummary};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ApplicationError;

/// Ride detail lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum DetailError {
    /// Backend reports no such ride
    #[error("Ride not found: {0}")]
    NotFound(String),

    /// Network failure, timeout, or unexpected status
    #[error("Failed to fetch ride: {0}")]
    Transport(String),
}

/// Ride search errors
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SearchError {
    /// Network failure, timeout, or unexpected status
    #[error("Search failed: {0}")]
    Transport(String),

    /// Backend answered `success: false`; the message is kept verbatim
    #[error("{0}")]
    BackendRejected(String),
}

/// Port for fetching the metadata of one ride
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RideDetailPort: Send + Sync {
    /// Fetch ride metadata for an opaque, backend-issued identifier
    async fn fetch(&self, ride_id: &str) -> Result<RideDetail, DetailError>;
}

/// Port for searching rides between two locations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RideSearchPort: Send + Sync {
    /// Search for rides; an empty list is a valid outcome, not an error
    ///
    /// Results keep the backend's order.
    async fn search(&self, query: &RideQuery) -> Result<Vec<RideSummary>, SearchError>;
}

/// Port for publishing a new ride
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RideCreationPort: Send + Sync {
    /// Submit a ride to the backend
    async fn create(&self, ride: &NewRide) -> Result<(), ApplicationError>;
}
