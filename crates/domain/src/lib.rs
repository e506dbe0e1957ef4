//! Domain layer for the ride-matching client
//!
//! Contains entities, value objects, and domain errors.
//! This layer performs no I/O and defines the ubiquitous language:
//! rides, coordinates, and the viewport framing a ride on a map.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
