//! Application services - Use case implementations

mod ride_detail_resolver;
mod ride_service;

pub use ride_detail_resolver::{
    CoordWarning, Endpoint, MapMarker, MapOverlay, ResolutionSnapshot, ResolutionState,
    ResolvedRide, RideDetailResolver, ViewportConfig,
};
pub use ride_service::RideService;
