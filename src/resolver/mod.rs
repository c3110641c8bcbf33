//! Place resolution: free-text itinerary references to graded coordinates.
//!
//! Each query walks a fallback chain and stops at the first accepted tier:
//!
//! 1. `title, city` search. Accepted as [`Confidence::High`] when exactly one
//!    candidate's name equals a title variant, or when the top candidate is
//!    above `strong_relevance` and leads the runner-up by `ambiguity_margin`.
//! 2. `subtitle, city` search (or the parenthesised local name when there is
//!    no subtitle). A unique best candidate is accepted as
//!    [`Confidence::Medium`]. If that yields nothing, an ambiguous tier-1
//!    set is disambiguated the same way, provided the winner overlaps the
//!    title by at least `min_overlap`.
//! 3. The destination centroid as [`Confidence::Low`].
//!
//! Provider errors only fail the tier they occurred in.

mod batch;
mod text;

use std::sync::Arc;

use tokio::time::{timeout_at, Instant};
use tracing::{debug, warn};

use crate::cities::CityNormalizer;
use crate::config::{BatchConfig, ResolverConfig};
use crate::error::ResolveError;
use crate::models::{Candidate, Confidence, GeoPoint, GeocodeResult, PlaceQuery};
use crate::provider::{PlaceSearch, SearchQuery};
use crate::route::haversine_km;

pub use text::TitleVariants;

/// Candidates closer than this to each other count as the same distance
const TIE_EPSILON_KM: f64 = 0.001;

/// Geocoding resolver over injected search and centroid providers.
pub struct Resolver {
    places: Arc<dyn PlaceSearch>,
    centroids: Arc<dyn PlaceSearch>,
    normalizer: CityNormalizer,
    config: ResolverConfig,
    batch: BatchConfig,
}

impl Resolver {
    pub fn new(
        places: Arc<dyn PlaceSearch>,
        centroids: Arc<dyn PlaceSearch>,
        normalizer: CityNormalizer,
        config: ResolverConfig,
    ) -> Self {
        Self {
            places,
            centroids,
            normalizer,
            config,
            batch: BatchConfig::default(),
        }
    }

    pub fn with_batch_config(mut self, batch: BatchConfig) -> Self {
        self.batch = batch;
        self
    }

    pub fn normalizer(&self) -> &CityNormalizer {
        &self.normalizer
    }

    pub fn provider_name(&self) -> &str {
        self.places.name()
    }

    /// Resolve one place. Only fails on invalid input or an unknown destination.
    pub async fn resolve(&self, query: &PlaceQuery) -> Result<GeocodeResult, ResolveError> {
        query.validate()?;

        // The budget covers the centroid lookup too
        let deadline = Instant::now() + self.batch.budget();
        let city = self.normalizer.normalize(&query.destination);
        let centroid = self
            .centroid_by(&city, deadline)
            .await
            .ok_or_else(|| ResolveError::UnknownDestination(query.destination.clone()))?;

        match timeout_at(deadline, self.match_place(query, &city, Some(&centroid))).await {
            Ok(Some(result)) => return Ok(result),
            Ok(None) => {}
            Err(_) => warn!(title = %query.title, "resolution budget exhausted"),
        }

        debug!(title = %query.title, city = %city, tier = 3, "falling back to centroid");
        Ok(GeocodeResult::centroid(&centroid))
    }

    /// Centroid lookup bounded by `deadline`. A lookup still pending at the
    /// deadline counts as unknown.
    async fn centroid_by(&self, city: &str, deadline: Instant) -> Option<Candidate> {
        match timeout_at(deadline, self.centroid(city)).await {
            Ok(centroid) => centroid,
            Err(_) => {
                warn!(city = %city, "centroid lookup exceeded the budget");
                None
            }
        }
    }

    /// Representative point for a canonical city name.
    async fn centroid(&self, city: &str) -> Option<Candidate> {
        let query = SearchQuery {
            text: city.to_string(),
            near: None,
            limit: 1,
        };
        match self.centroids.search(&query).await {
            Ok(candidates) => candidates.into_iter().next(),
            Err(e) => {
                warn!(city = %city, "centroid lookup failed: {}", e);
                None
            }
        }
    }

    /// Tiers 1 and 2. `None` means the caller should fall back to the centroid.
    async fn match_place(
        &self,
        query: &PlaceQuery,
        city: &str,
        centroid: Option<&Candidate>,
    ) -> Option<GeocodeResult> {
        let variants = TitleVariants::parse(&query.title);
        let near = centroid.map(|c| c.point);

        let primary = self.search(format!("{}, {}", variants.full, city), near).await;
        if let Some(best) = self.strong_match(&primary, &variants) {
            debug!(title = %query.title, matched = %best.name, tier = 1, "accepted");
            return Some(GeocodeResult::from_candidate(best, Confidence::High));
        }

        if let Some(hint) = query.subtitle_hint().or(variants.local.as_deref()) {
            let assisted = self.search(format!("{}, {}", hint, city), near).await;
            if let Some(best) = pick_best(&assisted, &variants, near) {
                debug!(title = %query.title, matched = %best.name, tier = 2, "accepted");
                return Some(GeocodeResult::from_candidate(best, Confidence::Medium));
            }
        }

        let best = pick_best(&primary, &variants, near)
            .filter(|c| variants.overlap(&c.name) >= self.config.min_overlap)?;
        debug!(title = %query.title, matched = %best.name, tier = 2, "disambiguated");
        Some(GeocodeResult::from_candidate(best, Confidence::Medium))
    }

    /// Run one provider search; errors and far-away candidates are dropped.
    async fn search(&self, text: String, near: Option<GeoPoint>) -> Vec<Candidate> {
        let query = SearchQuery {
            text,
            near,
            limit: self.config.result_limit,
        };

        let candidates = match self.places.search(&query).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(
                    provider = self.places.name(),
                    query = %query.text,
                    "search failed: {}", e
                );
                return Vec::new();
            }
        };

        match near {
            Some(origin) => candidates
                .into_iter()
                .filter(|c| haversine_km(origin, c.point) <= self.config.max_distance_km)
                .collect(),
            None => candidates,
        }
    }

    /// A single unambiguous tier-1 match, if any.
    fn strong_match<'a>(
        &self,
        candidates: &'a [Candidate],
        variants: &TitleVariants,
    ) -> Option<&'a Candidate> {
        let exact: Vec<&Candidate> = candidates
            .iter()
            .filter(|c| variants.matches_exactly(&c.name))
            .collect();
        match exact.len() {
            0 => {}
            1 => return Some(exact[0]),
            _ => return None,
        }

        let mut ranked: Vec<&Candidate> = candidates.iter().collect();
        ranked.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
        let top = *ranked.first()?;
        if top.relevance < self.config.strong_relevance {
            return None;
        }
        match ranked.get(1) {
            Some(second) if top.relevance - second.relevance < self.config.ambiguity_margin => None,
            _ => Some(top),
        }
    }
}

/// Best candidate by title overlap, then distance to `near`, then relevance.
/// `None` when empty or when the top two are indistinguishable.
fn pick_best<'a>(
    candidates: &'a [Candidate],
    variants: &TitleVariants,
    near: Option<GeoPoint>,
) -> Option<&'a Candidate> {
    let mut scored: Vec<(f64, f64, &Candidate)> = candidates
        .iter()
        .map(|c| {
            let distance = near.map(|p| haversine_km(p, c.point)).unwrap_or(0.0);
            (variants.overlap(&c.name), distance, c)
        })
        .collect();

    scored.sort_by(|a, b| {
        b.0.total_cmp(&a.0)
            .then_with(|| a.1.total_cmp(&b.1))
            .then_with(|| b.2.relevance.total_cmp(&a.2.relevance))
    });

    let (best_overlap, distance, best) = *scored.first()?;
    if let Some(&(next_overlap, next_distance, next)) = scored.get(1) {
        if next_overlap == best_overlap
            && (next_distance - distance).abs() < TIE_EPSILON_KM
            && next.relevance == best.relevance
        {
            return None;
        }
    }
    Some(best)
}
