use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub resolver: ResolverConfig,
    pub batch: BatchConfig,
    pub cities: CitiesConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Remote place-search provider (Nominatim-compatible).
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_ms: u64,
    /// Preferred result language (`accept-language`)
    pub language: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "Wayfinder/0.1 (itinerary place resolver)".to_string(),
            timeout_ms: 8_000,
            language: "en".to_string(),
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Tier acceptance thresholds.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ResolverConfig {
    /// Minimum relevance for a tier-1 match to count as strong
    pub strong_relevance: f64,
    /// Required relevance lead of the top candidate over the runner-up
    pub ambiguity_margin: f64,
    /// Minimum title overlap for accepting a disambiguated tier-1 candidate
    pub min_overlap: f64,
    /// Candidates farther than this from the destination centroid are dropped
    pub max_distance_km: f64,
    /// Candidates requested per search
    pub result_limit: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            strong_relevance: 0.5,
            ambiguity_margin: 0.1,
            min_overlap: 0.5,
            max_distance_km: 50.0,
            result_limit: 5,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BatchConfig {
    /// Parallel resolutions per batch
    pub concurrency: usize,
    /// Wall-clock budget for one request
    pub budget_ms: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            concurrency: 4,
            budget_ms: 25_000,
        }
    }
}

impl BatchConfig {
    pub fn budget(&self) -> Duration {
        Duration::from_millis(self.budget_ms)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CitiesConfig {
    /// Extra `[[city]]` table merged over the built-in one
    pub path: Option<PathBuf>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}
