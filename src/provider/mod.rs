//! Place-search providers.
//!
//! The resolver only sees [`PlaceSearch`]: search by free text, optionally
//! biased toward a point, and get back ranked candidates. Remote search, the static
//! centroid table, and test doubles all plug in behind it.

mod centroid;
mod chain;
mod nominatim;
#[cfg(test)]
pub(crate) mod stub;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::models::{Candidate, GeoPoint};

pub use centroid::StaticCentroids;
pub use chain::ProviderChain;
pub use nominatim::NominatimSearch;

/// A single search request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Free text, already scoped with the canonical city (`"title, city"`)
    pub text: String,
    /// Bias results toward this point
    pub near: Option<GeoPoint>,
    pub limit: usize,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            near: None,
            limit: 5,
        }
    }
}

/// Search by text, returning candidates ranked best first.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    /// Short provider name for logs and health output.
    fn name(&self) -> &str;

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>, ProviderError>;
}

const _: () = {
    fn _assert_object_safe(_: &dyn PlaceSearch) {}
};
