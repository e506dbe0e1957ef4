//! Ride search and creation service
//!
//! Validates caller input before any network call and forwards to the ride
//! backend ports. Backend rejection messages reach the caller unchanged.

use std::{fmt, sync::Arc};

use domain::{NewRide, RideQuery, RideSummary};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{RideCreationPort, RideSearchPort},
};

/// Service for finding and publishing rides
pub struct RideService {
    search_port: Arc<dyn RideSearchPort>,
    creation_port: Arc<dyn RideCreationPort>,
}

impl fmt::Debug for RideService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RideService").finish_non_exhaustive()
    }
}

impl RideService {
    /// Create a new ride service
    pub fn new(
        search_port: Arc<dyn RideSearchPort>,
        creation_port: Arc<dyn RideCreationPort>,
    ) -> Self {
        Self {
            search_port,
            creation_port,
        }
    }

    /// Search rides between a pickup and a dropoff location
    ///
    /// An empty result is returned as `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank input, or the search failure
    /// (transport or backend rejection) otherwise.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        pickup: &str,
        dropoff: &str,
    ) -> Result<Vec<RideSummary>, ApplicationError> {
        let query = RideQuery::new(pickup, dropoff)?;
        info!(%query, "Searching rides");

        let rides = self.search_port.search(&query).await?;
        debug!(count = rides.len(), "Rides found");
        Ok(rides)
    }

    /// Publish a new ride
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank fields, or the backend failure.
    #[instrument(skip(self))]
    pub async fn create(
        &self,
        name: &str,
        source: &str,
        destination: &str,
    ) -> Result<NewRide, ApplicationError> {
        let ride = NewRide::new(name, source, destination)?;
        self.creation_port.create(&ride).await?;
        info!(source = ride.source(), destination = ride.destination(), "Ride created");
        Ok(ride)
    }
}

#[cfg(test)]
mod tests {
    use domain::DomainError;

    use super::*;
    use crate::ports::{MockRideCreationPort, MockRideSearchPort, SearchError};

    fn service(search: MockRideSearchPort, creation: MockRideCreationPort) -> RideService {
        RideService::new(Arc::new(search), Arc::new(creation))
    }

    #[tokio::test]
    async fn search_returns_backend_order() {
        let mut search = MockRideSearchPort::new();
        search
            .expect_search()
            .withf(|query: &RideQuery| query.pickup() == "X" && query.dropoff() == "Y")
            .returning(|_| {
                Ok(vec![
                    RideSummary::new("2", "Bea", "X", "Y"),
                    RideSummary::new("1", "Alex", "X", "Y"),
                ])
            });

        let rides = service(search, MockRideCreationPort::new())
            .search("X", "Y")
            .await
            .unwrap();

        let ids: Vec<&str> = rides.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[tokio::test]
    async fn empty_result_is_not_an_error() {
        let mut search = MockRideSearchPort::new();
        search.expect_search().returning(|_| Ok(Vec::new()));

        let rides = service(search, MockRideCreationPort::new())
            .search("X", "Y")
            .await
            .unwrap();
        assert!(rides.is_empty());
    }

    #[tokio::test]
    async fn backend_rejection_message_is_verbatim() {
        let mut search = MockRideSearchPort::new();
        search
            .expect_search()
            .returning(|_| Err(SearchError::BackendRejected("no drivers available".into())));

        let err = service(search, MockRideCreationPort::new())
            .search("X", "Y")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Search(SearchError::BackendRejected(ref msg)) if msg == "no drivers available"
        ));
        assert_eq!(err.to_string(), "no drivers available");
    }

    #[tokio::test]
    async fn blank_input_never_reaches_backend() {
        let mut search = MockRideSearchPort::new();
        search.expect_search().times(0);

        let err = service(search, MockRideCreationPort::new())
            .search("", "Y")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn create_submits_trimmed_ride() {
        let mut creation = MockRideCreationPort::new();
        creation
            .expect_create()
            .withf(|ride: &NewRide| ride.name() == "Alex" && ride.source() == "Central Station")
            .times(1)
            .returning(|_| Ok(()));

        let ride = service(MockRideSearchPort::new(), creation)
            .create(" Alex", "Central Station ", "Airport")
            .await
            .unwrap();
        assert_eq!(ride.destination(), "Airport");
    }

    #[tokio::test]
    async fn create_propagates_backend_failure() {
        let mut creation = MockRideCreationPort::new();
        creation
            .expect_create()
            .returning(|_| Err(ApplicationError::ExternalService("HTTP 500".into())));

        let err = service(MockRideSearchPort::new(), creation)
            .create("Alex", "A", "B")
            .await
            .unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn create_rejects_blank_fields() {
        let mut creation = MockRideCreationPort::new();
        creation.expect_create().times(0);

        let result = service(MockRideSearchPort::new(), creation)
            .create("Alex", "", "B")
            .await;
        assert!(result.is_err());
    }
}
