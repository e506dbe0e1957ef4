//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod geocoding_adapter;
mod ride_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use ride_adapter::RideServiceAdapter;
