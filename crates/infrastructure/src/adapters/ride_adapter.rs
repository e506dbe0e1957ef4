//! Ride adapter - Implements the ride ports using integration_rides

use application::error::ApplicationError;
use application::ports::{
    DetailError, RideCreationPort, RideDetailPort, RideSearchPort, SearchError,
};
use async_trait::async_trait;
use domain::{NewRide, RideDetail, RideQuery, RideSummary};
use integration_rides::{
    RideServiceClient, RideServiceConfig, RideServiceError, RiderServerClient,
};
use tracing::{debug, instrument};

/// Adapter for the rider backend
pub struct RideServiceAdapter {
    client: RiderServerClient,
}

impl std::fmt::Debug for RideServiceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RideServiceAdapter")
            .field("client", &"RiderServerClient")
            .finish()
    }
}

impl RideServiceAdapter {
    /// Wrap an existing client
    pub const fn new(client: RiderServerClient) -> Self {
        Self { client }
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: &RideServiceConfig) -> Result<Self, ApplicationError> {
        let client = RiderServerClient::new(config).map_err(|e| match e {
            RideServiceError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ExternalService(other.to_string()),
        })?;
        Ok(Self::new(client))
    }

    fn map_detail_error(ride_id: &str, err: RideServiceError) -> DetailError {
        match err {
            RideServiceError::RideNotFound(_) => DetailError::NotFound(ride_id.to_string()),
            other => DetailError::Transport(other.to_string()),
        }
    }

    fn map_search_error(err: RideServiceError) -> SearchError {
        match err {
            RideServiceError::Rejected(message) => SearchError::BackendRejected(message),
            other => SearchError::Transport(other.to_string()),
        }
    }

    fn map_create_error(err: RideServiceError) -> ApplicationError {
        match err {
            RideServiceError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ExternalService(format!("Ride creation failed: {other}")),
        }
    }
}

#[async_trait]
impl RideDetailPort for RideServiceAdapter {
    #[instrument(skip(self))]
    async fn fetch(&self, ride_id: &str) -> Result<RideDetail, DetailError> {
        self.client
            .ride_info(ride_id)
            .await
            .map_err(|e| Self::map_detail_error(ride_id, e))
    }
}

#[async_trait]
impl RideSearchPort for RideServiceAdapter {
    #[instrument(skip(self), fields(pickup = query.pickup(), dropoff = query.dropoff()))]
    async fn search(&self, query: &RideQuery) -> Result<Vec<RideSummary>, SearchError> {
        let rides = self
            .client
            .search_rides(query.pickup(), query.dropoff())
            .await
            .map_err(Self::map_search_error)?;

        debug!(count = rides.len(), "Search complete");
        Ok(rides)
    }
}

#[async_trait]
impl RideCreationPort for RideServiceAdapter {
    #[instrument(skip(self, ride))]
    async fn create(&self, ride: &NewRide) -> Result<(), ApplicationError> {
        self.client
            .create_ride(ride)
            .await
            .map_err(Self::map_create_error)
    }
}
