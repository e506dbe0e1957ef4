//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod ride_query;
mod viewport;

pub use coordinate::{Coordinate, InvalidCoordinates};
pub use ride_query::RideQuery;
pub use viewport::{DEFAULT_MIN_SPAN_DEGREES, Viewport};
