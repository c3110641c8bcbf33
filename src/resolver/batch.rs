//! Batch resolution with bounded concurrency and a wall-clock budget.

use futures::stream::{self, StreamExt};
use tokio::time::{timeout_at, Instant};
use tracing::{debug, info, warn};

use super::Resolver;
use crate::error::ResolveError;
use crate::models::{BatchGeocodeResult, Candidate, GeocodeResult, PlaceQuery};

impl Resolver {
    /// Resolve every place in itinerary order.
    ///
    /// Up to `batch.concurrency` places are resolved at once. Once the budget
    /// runs out, places still in flight or not yet started get the centroid
    /// of their own destination, or the batch destination's when theirs is
    /// unknown. Individual failures never fail the batch.
    pub async fn resolve_batch(
        &self,
        queries: &[PlaceQuery],
        destination: &str,
    ) -> Result<BatchGeocodeResult, ResolveError> {
        if destination.trim().is_empty() {
            return Err(ResolveError::Validation(
                "destination is required".to_string(),
            ));
        }
        if queries.is_empty() {
            return Err(ResolveError::Validation(
                "places must be a non-empty list".to_string(),
            ));
        }

        let deadline = Instant::now() + self.batch.budget();
        let city = self.normalizer.normalize(destination);
        let centroid = self
            .centroid_by(&city, deadline)
            .await
            .ok_or_else(|| ResolveError::UnknownDestination(destination.to_string()))?;

        let concurrency = self.batch.concurrency.max(1);

        info!(
            "Resolving {} places in {} (concurrency {})",
            queries.len(),
            city,
            concurrency
        );

        // `buffered` yields in input order regardless of completion order
        let results: Vec<GeocodeResult> = stream::iter(0..queries.len())
            .map(|index| {
                self.resolve_entry(index, &queries[index], destination, &city, &centroid, deadline)
            })
            .buffered(concurrency)
            .collect()
            .await;

        let batch = BatchGeocodeResult::new(results);
        info!(
            total = batch.stats.total,
            high = batch.stats.high,
            medium = batch.stats.medium,
            low = batch.stats.low,
            "batch resolved"
        );
        Ok(batch)
    }

    async fn resolve_entry(
        &self,
        index: usize,
        query: &PlaceQuery,
        destination: &str,
        batch_city: &str,
        batch_centroid: &Candidate,
        deadline: Instant,
    ) -> GeocodeResult {
        let mut query = query.clone();
        if query.destination.trim().is_empty() {
            query.destination = destination.to_string();
        }

        // Every fallback below lands on this place's own city
        let city = self.normalizer.normalize(&query.destination);
        let centroid = if city == batch_city {
            batch_centroid.clone()
        } else {
            self.centroid_by(&city, deadline)
                .await
                .unwrap_or_else(|| batch_centroid.clone())
        };

        if Instant::now() >= deadline {
            debug!(index, "budget exhausted before start");
            return GeocodeResult::centroid(&centroid);
        }
        if query.title.trim().is_empty() {
            warn!(index, "place has no title");
            return GeocodeResult::centroid(&centroid);
        }

        match timeout_at(deadline, self.match_place(&query, &city, Some(&centroid))).await {
            Ok(Some(result)) => result,
            Ok(None) => GeocodeResult::centroid(&centroid),
            Err(_) => {
                warn!(index, title = %query.title, "budget exhausted mid-resolution");
                GeocodeResult::centroid(&centroid)
            }
        }
    }
}
