//! Core data models for place resolution.

pub mod batch;
pub mod place;

pub use batch::{BatchGeocodeResult, Stats};
pub use place::{Candidate, Confidence, GeoPoint, GeocodeResult, PlaceQuery};
