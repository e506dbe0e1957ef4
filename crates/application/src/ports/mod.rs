//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod ride_port;

pub use geocoding_port::{GeocodeError, GeocodingPort};
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use ride_port::{DetailError, RideCreationPort, RideDetailPort, RideSearchPort, SearchError};
#[cfg(test)]
pub use ride_port::{MockRideCreationPort, MockRideDetailPort, MockRideSearchPort};
