//! Geocoding adapter - Implements GeocodingPort using integration_rides

use application::ports::{GeocodeError, GeocodingPort};
use async_trait::async_trait;
use domain::value_objects::Coordinate;
use integration_rides::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient,
};
use tracing::{debug, instrument};

/// Adapter for address geocoding using Nominatim
pub struct GeocodingAdapter {
    client: NominatimGeocodingClient,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"NominatimGeocodingClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Wrap an existing client
    pub const fn new(client: NominatimGeocodingClient) -> Self {
        Self { client }
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: &NominatimConfig) -> Result<Self, GeocodeError> {
        let client = NominatimGeocodingClient::new(config)
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;
        Ok(Self::new(client))
    }

    /// Map integration geocoding error to the port taxonomy
    ///
    /// Only an answered lookup with no candidate is `NotFound`; everything
    /// else (timeouts, HTTP failures, malformed or out-of-range payloads) is
    /// a transport problem.
    fn map_error(address: &str, err: GeocodingError) -> GeocodeError {
        if err.is_not_found() {
            GeocodeError::NotFound(address.to_string())
        } else {
            GeocodeError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn resolve(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        let result = self
            .client
            .geocode(address)
            .await
            .map_err(|e| Self::map_error(address, e));

        if let Err(ref e) = result {
            debug!(%address, error = %e, "Geocoding failed");
        }

        result
    }
}
