//! Localized city name table.
//!
//! Built once during startup from the built-in dataset plus optional TOML
//! overrides, then shared read-only behind an `Arc`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

use super::data::BUILTIN_CITIES;
use crate::models::GeoPoint;

/// One row of a city table file.
#[derive(Debug, Clone, Deserialize)]
pub struct CityRecord {
    pub canonical: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CityFile {
    #[serde(default)]
    city: Vec<CityRecord>,
}

/// Localized name -> canonical name mapping, with optional centroids.
#[derive(Debug, Clone, Default)]
pub struct CityTable {
    /// Lowercased alias -> canonical name
    aliases: HashMap<String, String>,
    /// Lowercased canonical name -> (canonical name, centroid)
    centroids: HashMap<String, (String, GeoPoint)>,
}

impl CityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table populated from the built-in dataset.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for city in BUILTIN_CITIES {
            table.insert(CityRecord {
                canonical: city.canonical.to_string(),
                aliases: city.aliases.iter().map(|a| a.to_string()).collect(),
                lat: Some(city.lat),
                lon: Some(city.lon),
            });
        }
        table
    }

    /// Add or replace a city. Later records win on alias collisions.
    pub fn insert(&mut self, record: CityRecord) {
        let canonical = record.canonical.trim().to_string();
        if canonical.is_empty() {
            return;
        }
        for alias in &record.aliases {
            let key = alias.trim().to_lowercase();
            if !key.is_empty() {
                self.aliases.insert(key, canonical.clone());
            }
        }
        if let (Some(lat), Some(lon)) = (record.lat, record.lon) {
            let point = GeoPoint::new(lat, lon);
            if point.is_valid() {
                self.centroids
                    .insert(canonical.to_lowercase(), (canonical, point));
            }
        }
    }

    /// Merge `[[city]]` records from a TOML file.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read city table: {}", path.display()))?;
        let file: CityFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse city table: {}", path.display()))?;

        let count = file.city.len();
        for record in file.city {
            self.insert(record);
        }
        info!("Loaded {} cities from {}", count, path.display());
        Ok(())
    }

    /// Canonical name for an exact (case-insensitive) alias.
    pub fn canonical(&self, alias: &str) -> Option<&str> {
        self.aliases
            .get(&alias.trim().to_lowercase())
            .map(String::as_str)
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Centroid for a canonical city name (case-insensitive).
    pub fn centroid(&self, canonical: &str) -> Option<(&str, GeoPoint)> {
        self.centroids
            .get(&canonical.trim().to_lowercase())
            .map(|(name, point)| (name.as_str(), *point))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_has_bangkok() {
        let table = CityTable::builtin();
        assert_eq!(table.canonical("방콕"), Some("Bangkok"));
        let (name, point) = table.centroid("bangkok").unwrap();
        assert_eq!(name, "Bangkok");
        assert_eq!(point, GeoPoint::new(13.7563, 100.5018));
    }

    #[test]
    fn test_load_file_overrides_and_adds() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[city]]
canonical = "Chiang Mai"
aliases = ["치앙마이"]
lat = 18.7883
lon = 98.9853

[[city]]
canonical = "Tokyo Metropolis"
aliases = ["도쿄"]
"#
        )
        .unwrap();

        let mut table = CityTable::builtin();
        table.load_file(file.path()).unwrap();

        assert_eq!(table.canonical("치앙마이"), Some("Chiang Mai"));
        assert_eq!(table.canonical("도쿄"), Some("Tokyo Metropolis"));
        assert!(table.centroid("Chiang Mai").is_some());
        assert!(table.centroid("Tokyo Metropolis").is_none());
    }

    #[test]
    fn test_load_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[city]]\ncanonical = ").unwrap();
        assert!(CityTable::new().load_file(file.path()).is_err());
    }

    #[test]
    fn test_invalid_centroid_is_skipped() {
        let mut table = CityTable::new();
        table.insert(CityRecord {
            canonical: "Nowhere".to_string(),
            aliases: vec!["없는곳".to_string()],
            lat: Some(120.0),
            lon: Some(0.0),
        });
        assert_eq!(table.canonical("없는곳"), Some("Nowhere"));
        assert!(table.centroid("Nowhere").is_none());
    }
}
