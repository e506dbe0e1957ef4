//! Domain entities - Objects with identity and lifecycle

mod ride;

pub use ride::{NewRide, RideDetail, RideSummary};
