//! Ride entities
//!
//! A [`RideSummary`] is one candidate returned by a search, a [`RideDetail`]
//! is the full record for a single ride identifier, and a [`NewRide`] is the
//! payload offered when a driver publishes a ride.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// One candidate ride returned by a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideSummary {
    /// Backend-issued opaque identifier
    pub id: String,
    /// Name of the driver offering the ride
    pub driver_name: String,
    /// Pickup address as entered by the driver
    pub source: String,
    /// Dropoff address as entered by the driver
    pub destination: String,
}

impl RideSummary {
    /// Create a new ride summary
    pub fn new(
        id: impl Into<String>,
        driver_name: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            driver_name: driver_name.into(),
            source: source.into(),
            destination: destination.into(),
        }
    }
}

impl fmt::Display for RideSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Driver: {} | From: {} | To: {}",
            self.driver_name, self.source, self.destination
        )
    }
}

/// Full metadata for one ride identifier
///
/// Fields are taken as the backend reports them. A missing phone number is
/// an empty string, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideDetail {
    /// Rider/driver name
    pub name: String,
    /// Free-text pickup address
    pub source: String,
    /// Free-text dropoff address
    pub destination: String,
    /// Contact phone number (may be empty)
    pub phone: String,
}

impl RideDetail {
    /// Create a new ride detail record
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            destination: destination.into(),
            phone: phone.into(),
        }
    }

    /// Whether a contact number is available
    #[must_use]
    pub fn has_phone(&self) -> bool {
        !self.phone.trim().is_empty()
    }
}

/// A ride to be published to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewRide {
    #[validate(length(min = 1, message = "Please enter your name"))]
    name: String,
    #[validate(length(min = 1, message = "Please enter the pickup location"))]
    source: String,
    #[validate(length(min = 1, message = "Please enter the dropoff location"))]
    destination: String,
}

impl NewRide {
    /// Create a new ride, trimming and validating every field
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if any field is blank.
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let candidate = Self {
            name: name.into().trim().to_string(),
            source: source.into().trim().to_string(),
            destination: destination.into().trim().to_string(),
        };
        candidate
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        Ok(candidate)
    }

    /// Driver name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pickup address
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Dropoff address
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_display() {
        let ride = RideSummary::new("abc", "Alex", "Central Station", "Airport");
        assert_eq!(
            ride.to_string(),
            "Driver: Alex | From: Central Station | To: Airport"
        );
    }

    #[test]
    fn detail_without_phone() {
        let detail = RideDetail::new("Alex", "Central Station", "Airport", "");
        assert!(!detail.has_phone());

        let detail = RideDetail::new("Alex", "Central Station", "Airport", "555-0100");
        assert!(detail.has_phone());
    }

    #[test]
    fn new_ride_trims_fields() {
        let ride = NewRide::new(" Alex ", "Central Station ", " Airport").unwrap();
        assert_eq!(ride.name(), "Alex");
        assert_eq!(ride.source(), "Central Station");
        assert_eq!(ride.destination(), "Airport");
    }

    #[test]
    fn new_ride_rejects_blank_fields() {
        let err = NewRide::new("Alex", "   ", "Airport").unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
        assert!(err.to_string().contains("pickup"));

        assert!(NewRide::new("", "A", "B").is_err());
        assert!(NewRide::new("Alex", "A", "").is_err());
    }

    #[test]
    fn new_ride_serializes_backend_shape() {
        let ride = NewRide::new("Alex", "A", "B").unwrap();
        let json = serde_json::to_value(&ride).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Alex", "source": "A", "destination": "B" })
        );
    }
}
