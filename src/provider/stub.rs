//! In-memory provider for tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::{PlaceSearch, ProviderChain, SearchQuery, StaticCentroids};
use crate::cities::CityTable;
use crate::error::ProviderError;
use crate::models::{Candidate, GeoPoint};

/// Answers by exact query text; unknown text returns no candidates.
#[derive(Default)]
pub(crate) struct StubSearch {
    answers: HashMap<String, Vec<Candidate>>,
    failures: HashSet<String>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl StubSearch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, text: &str, candidates: Vec<Candidate>) -> Self {
        self.answers.insert(text.to_string(), candidates);
        self
    }

    pub(crate) fn fail_on(mut self, text: &str) -> Self {
        self.failures.insert(text.to_string());
        self
    }

    pub(crate) fn delay_on(mut self, text: &str, delay: Duration) -> Self {
        self.delays.insert(text.to_string(), delay);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of searches observed running at once.
    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlaceSearch for StubSearch {
    fn name(&self) -> &str {
        "stub"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(&query.text) {
            tokio::time::sleep(*delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failures.contains(&query.text) {
            return Err(ProviderError::Status(503));
        }
        Ok(self.answers.get(&query.text).cloned().unwrap_or_default())
    }
}

/// Server-shaped centroid chain: the built-in table first, then a remote
/// that only knows `city` and takes `delay` to answer.
pub(crate) fn slow_centroids(
    city: &str,
    point: GeoPoint,
    delay: Duration,
) -> Arc<dyn PlaceSearch> {
    let table = Arc::new(CityTable::builtin());
    let table: Arc<dyn PlaceSearch> = Arc::new(StaticCentroids::new(table));
    let remote: Arc<dyn PlaceSearch> = Arc::new(
        StubSearch::new()
            .with(city, vec![Candidate::new(city, point, 1.0)])
            .delay_on(city, delay),
    );
    Arc::new(ProviderChain::new(vec![table, remote]))
}
