//! Nominatim-compatible free-text place search.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{PlaceSearch, SearchQuery};
use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::models::{Candidate, GeoPoint};

/// Half-width in degrees of the viewbox used to bias results toward a point
const VIEWBOX_HALF_DEG: f64 = 0.3;

/// Search client for the Nominatim `/search` endpoint
pub struct NominatimSearch {
    client: Client,
    endpoint: Url,
    language: String,
}

/// One entry of a `format=jsonv2` search response
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    name: Option<String>,
    display_name: String,
    #[serde(default)]
    importance: Option<f64>,
}

impl NominatimSearch {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let mut base = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid provider URL: {}", config.base_url))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join("search").context("Failed to build search URL")?;

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            language: config.language.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn params(&self, query: &SearchQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", query.text.clone()),
            ("format", "jsonv2".to_string()),
            ("limit", query.limit.max(1).to_string()),
            ("accept-language", self.language.clone()),
        ];
        if let Some(near) = query.near {
            params.push((
                "viewbox",
                format!(
                    "{},{},{},{}",
                    near.lon - VIEWBOX_HALF_DEG,
                    near.lat + VIEWBOX_HALF_DEG,
                    near.lon + VIEWBOX_HALF_DEG,
                    near.lat - VIEWBOX_HALF_DEG
                ),
            ));
        }
        params
    }
}

#[async_trait]
impl PlaceSearch for NominatimSearch {
    fn name(&self) -> &str {
        "nominatim"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>, ProviderError> {
        debug!(limit = query.limit, "Nominatim search: {:?}", query.text);

        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(self.params(query));

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        parse_places(&body)
    }
}

/// Parse a search response body into candidates, keeping provider rank order.
fn parse_places(body: &[u8]) -> Result<Vec<Candidate>, ProviderError> {
    let places: Vec<NominatimPlace> =
        serde_json::from_slice(body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    Ok(places.into_iter().filter_map(into_candidate).collect())
}

fn into_candidate(place: NominatimPlace) -> Option<Candidate> {
    let lat = place.lat.trim().parse::<f64>().ok()?;
    let lon = place.lon.trim().parse::<f64>().ok()?;
    let point = GeoPoint::new(lat, lon);
    if !point.is_valid() {
        return None;
    }

    // Unnamed features (addresses, streets) fall back to the leading display_name segment
    let name = place
        .name
        .filter(|n| !n.trim().is_empty())
        .or_else(|| {
            place
                .display_name
                .split(',')
                .next()
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_default();

    Some(Candidate {
        name,
        point,
        relevance: place.importance.unwrap_or(0.0).clamp(0.0, 1.0),
        address: Some(place.display_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_places() {
        let body = br#"[
            {"place_id": 1, "lat": "35.6585805", "lon": "139.7454329",
             "name": "Tokyo Tower", "display_name": "Tokyo Tower, 4-2-8, Shibakoen, Minato, Tokyo, Japan",
             "importance": 0.62},
            {"place_id": 2, "lat": "not-a-number", "lon": "139.0",
             "name": "Broken", "display_name": "Broken"},
            {"place_id": 3, "lat": "35.65", "lon": "139.74",
             "name": "", "display_name": "Shibakoen 4-chome, Minato, Tokyo, Japan"}
        ]"#;

        let candidates = parse_places(body).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "Tokyo Tower");
        assert_eq!(candidates[0].point, GeoPoint::new(35.6585805, 139.7454329));
        assert_eq!(candidates[0].relevance, 0.62);
        assert_eq!(candidates[1].name, "Shibakoen 4-chome");
        assert_eq!(candidates[1].relevance, 0.0);
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_places(br#"{"error": "rate limited"}"#),
            Err(ProviderError::Malformed(_))
        ));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let config = ProviderConfig {
            base_url: "http://localhost:8080/nominatim".to_string(),
            ..Default::default()
        };
        let search = NominatimSearch::new(&config).unwrap();
        assert_eq!(
            search.endpoint().as_str(),
            "http://localhost:8080/nominatim/search"
        );
    }

    #[test]
    fn test_viewbox_param() {
        let search = NominatimSearch::new(&ProviderConfig::default()).unwrap();
        let mut query = SearchQuery::new("Tokyo Tower, Tokyo");
        query.near = Some(GeoPoint::new(35.0, 139.0));
        let params = search.params(&query);
        let viewbox: Vec<f64> = params
            .iter()
            .find(|(k, _)| *k == "viewbox")
            .unwrap()
            .1
            .split(',')
            .map(|v| v.parse().unwrap())
            .collect();
        let expected = [138.7, 35.3, 139.3, 34.7];
        for (got, want) in viewbox.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9);
        }
        assert_eq!(viewbox.len(), 4);
    }
}
