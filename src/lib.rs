//! Wayfinder - place resolution for AI-generated travel itineraries
//!
//! Turns free-text point-of-interest references into coordinates with a
//! confidence tier, and ordered points into a route distance.

pub mod api;
pub mod cities;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod resolver;
pub mod route;

pub use error::{ProviderError, ResolveError};
pub use models::{BatchGeocodeResult, Confidence, GeocodeResult, PlaceQuery, Stats};
pub use resolver::Resolver;
