//! Ride backend and geocoding integration
//!
//! Provides the HTTP clients the rider app talks to: the ride backend
//! (ride detail, search, creation) and address geocoding via
//! [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org).
//!
//! # Architecture
//!
//! Each service sits behind a client trait. [`RideServiceClient`] defines the
//! backend interface, implemented by [`RiderServerClient`]. [`GeocodingClient`]
//! handles address-to-coordinate conversion via [`NominatimGeocodingClient`]. Responses are parsed into
//! explicit wire schemas once and handed out as domain types.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_rides::{RideServiceClient, RideServiceConfig, RiderServerClient};
//!
//! let client = RiderServerClient::new(&RideServiceConfig::default())?;
//! let rides = client.search_rides("Central Station", "Airport").await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;

pub use client::{RideServiceClient, RiderServerClient};
pub use config::RideServiceConfig;
pub use error::RideServiceError;
pub use geocoding::{GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient};
pub use models::{CreateRideRequest, RideInfoRequest, SearchRequest};
