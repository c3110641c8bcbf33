//! Destination city table and name normalization.

mod data;
mod normalizer;
mod table;

pub use normalizer::CityNormalizer;
pub use table::{CityRecord, CityTable};
