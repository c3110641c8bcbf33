//! Destination centroids served from the city table.

use std::sync::Arc;

use async_trait::async_trait;

use super::{PlaceSearch, SearchQuery};
use crate::cities::CityTable;
use crate::error::ProviderError;
use crate::models::Candidate;

/// Looks up a canonical city name in the shared [`CityTable`].
pub struct StaticCentroids {
    table: Arc<CityTable>,
}

impl StaticCentroids {
    pub fn new(table: Arc<CityTable>) -> Self {
        Self { table }
    }
}

#[async_trait]
impl PlaceSearch for StaticCentroids {
    fn name(&self) -> &str {
        "city-table"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>, ProviderError> {
        Ok(self
            .table
            .centroid(&query.text)
            .map(|(name, point)| vec![Candidate::new(name, point, 1.0)])
            .unwrap_or_default())
    }
}
