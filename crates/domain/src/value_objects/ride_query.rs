//! Ride search query value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A pickup/dropoff pair submitted to the ride search
///
/// Both locations are free text; they are only checked for being non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideQuery {
    pickup: String,
    dropoff: String,
}

impl RideQuery {
    /// Create a search query
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if either location is blank.
    pub fn new(pickup: impl Into<String>, dropoff: impl Into<String>) -> Result<Self, DomainError> {
        let pickup = pickup.into().trim().to_string();
        let dropoff = dropoff.into().trim().to_string();

        if pickup.is_empty() || dropoff.is_empty() {
            return Err(DomainError::ValidationError(
                "Please enter both pickup and dropoff locations".to_string(),
            ));
        }

        Ok(Self { pickup, dropoff })
    }

    /// Pickup location
    pub fn pickup(&self) -> &str {
        &self.pickup
    }

    /// Dropoff location
    pub fn dropoff(&self) -> &str {
        &self.dropoff
    }
}

impl fmt::Display for RideQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.pickup, self.dropoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_query_is_trimmed() {
        let query = RideQuery::new("  Central Station ", "Airport").unwrap();
        assert_eq!(query.pickup(), "Central Station");
        assert_eq!(query.dropoff(), "Airport");
    }

    #[test]
    fn empty_pickup_rejected() {
        assert!(matches!(
            RideQuery::new("", "Airport"),
            Err(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn blank_dropoff_rejected() {
        assert!(RideQuery::new("X", "   ").is_err());
    }

    #[test]
    fn display_shows_both_ends() {
        let query = RideQuery::new("X", "Y").unwrap();
        assert_eq!(query.to_string(), "X → Y");
    }
}
