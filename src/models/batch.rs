//! Batch resolution output.

use serde::{Deserialize, Serialize};

use super::{Confidence, GeocodeResult};

/// Per-tier counts over a batch. `high + medium + low == total` always.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl Stats {
    pub fn from_results(results: &[GeocodeResult]) -> Self {
        let mut stats = Stats {
            total: results.len(),
            ..Default::default()
        };
        for result in results {
            match result.confidence {
                Confidence::High => stats.high += 1,
                Confidence::Medium => stats.medium += 1,
                Confidence::Low => stats.low += 1,
            }
        }
        stats
    }

    pub fn summary(&self) -> String {
        format!(
            "{} places resolved: {} exact, {} nearby, {} approximate",
            self.total, self.high, self.medium, self.low
        )
    }
}

/// Results index-aligned with the input places (itinerary order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchGeocodeResult {
    pub results: Vec<GeocodeResult>,
    pub stats: Stats,
}

impl BatchGeocodeResult {
    pub fn new(results: Vec<GeocodeResult>) -> Self {
        let stats = Stats::from_results(&results);
        Self { results, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(confidence: Confidence) -> GeocodeResult {
        GeocodeResult {
            lat: 0.0,
            lng: 0.0,
            confidence,
            matched_name: String::new(),
            address: None,
        }
    }

    #[test]
    fn test_stats_count_tiers() {
        let batch = BatchGeocodeResult::new(vec![
            result(Confidence::High),
            result(Confidence::Low),
            result(Confidence::High),
            result(Confidence::Medium),
        ]);
        assert_eq!(
            batch.stats,
            Stats {
                total: 4,
                high: 2,
                medium: 1,
                low: 1
            }
        );
        assert_eq!(
            batch.stats.summary(),
            "4 places resolved: 2 exact, 1 nearby, 1 approximate"
        );
    }
}
