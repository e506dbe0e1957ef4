//! Ride backend wire schemas
//!
//! Request bodies are public so callers and tests can inspect what goes on
//! the wire. Response schemas stay private to the crate; they are validated
//! once in the client and converted to domain types.

use domain::{RideDetail, RideSummary};
use serde::{Deserialize, Serialize};

/// Body of `POST /info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideInfoRequest {
    /// Opaque ride identifier
    pub id: String,
}

/// Body of `POST /search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Pickup location
    pub source: String,
    /// Dropoff location
    pub destination: String,
}

/// Body of `POST /create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRideRequest {
    /// Driver name
    pub name: String,
    /// Pickup location
    pub source: String,
    /// Dropoff location
    pub destination: String,
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
pub(crate) struct RawRideInfoResponse {
    pub data: Option<RawRideInfo>,
}

// Absent and null fields both read as empty
#[derive(Debug, Deserialize)]
pub(crate) struct RawRideInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<RawRideInfo> for RideDetail {
    fn from(raw: RawRideInfo) -> Self {
        Self::new(
            raw.name.unwrap_or_default(),
            raw.source.unwrap_or_default(),
            raw.destination.unwrap_or_default(),
            raw.phone.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSearchResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Option<Vec<RawRide>>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRide {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
}

impl From<RawRide> for RideSummary {
    fn from(raw: RawRide) -> Self {
        Self::new(
            raw.id,
            raw.name.unwrap_or_default(),
            raw.source.unwrap_or_default(),
            raw.destination.unwrap_or_default(),
        )
    }
}
