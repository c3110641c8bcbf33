//! Place query and geocode result types.

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// Graded trust level attached to a resolved place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Accepted from the structured title search
    High,
    /// Accepted from the subtitle search or a disambiguated title search
    Medium,
    /// Destination centroid
    Low,
}

impl Confidence {
    /// Human-readable message shown next to a resolved place.
    pub fn message(&self) -> &'static str {
        match self {
            Confidence::High => "exact location found",
            Confidence::Medium => "nearby location",
            Confidence::Low => "approximate location, manual adjustment recommended",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// Geographic point (lat/lon in degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Finite and inside the valid latitude/longitude ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// A free-text reference to a point of interest produced by the itinerary generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceQuery {
    /// Display name, possibly bilingual: "Korean (Local)"
    pub title: String,
    /// Local-language name or address hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// City-level scope for the search
    pub destination: String,
}

impl PlaceQuery {
    pub fn new(title: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            destination: destination.into(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Reject queries missing a title or destination before any provider call.
    pub fn validate(&self) -> Result<(), ResolveError> {
        if self.title.trim().is_empty() {
            return Err(ResolveError::Validation("title is required".to_string()));
        }
        if self.destination.trim().is_empty() {
            return Err(ResolveError::Validation(
                "destination is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Subtitle trimmed, if it carries any text.
    pub fn subtitle_hint(&self) -> Option<&str> {
        self.subtitle
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// One ranked answer from a place-search provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub point: GeoPoint,
    /// Provider relevance normalized to 0.0..=1.0
    pub relevance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Candidate {
    pub fn new(name: impl Into<String>, point: GeoPoint, relevance: f64) -> Self {
        Self {
            name: name.into(),
            point,
            relevance,
            address: None,
        }
    }
}

/// A resolved place. Always carries coordinates and a tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResult {
    pub lat: f64,
    pub lng: f64,
    pub confidence: Confidence,
    pub matched_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl GeocodeResult {
    pub fn from_candidate(candidate: &Candidate, confidence: Confidence) -> Self {
        Self {
            lat: candidate.point.lat,
            lng: candidate.point.lon,
            confidence,
            matched_name: candidate.name.clone(),
            address: candidate.address.clone(),
        }
    }

    /// Low-confidence fallback at the destination's centroid.
    pub fn centroid(centroid: &Candidate) -> Self {
        Self {
            lat: centroid.point.lat,
            lng: centroid.point.lon,
            confidence: Confidence::Low,
            matched_name: centroid.name.clone(),
            address: None,
        }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_title_and_destination() {
        assert!(PlaceQuery::new("Tokyo Tower", "도쿄").validate().is_ok());
        assert!(matches!(
            PlaceQuery::new("  ", "도쿄").validate(),
            Err(ResolveError::Validation(_))
        ));
        assert!(matches!(
            PlaceQuery::new("Tokyo Tower", "").validate(),
            Err(ResolveError::Validation(_))
        ));
    }

    #[test]
    fn test_blank_subtitle_is_no_hint() {
        let query = PlaceQuery::new("Tokyo Tower", "도쿄").with_subtitle("  ");
        assert_eq!(query.subtitle_hint(), None);
        let query = PlaceQuery::new("Tokyo Tower", "도쿄").with_subtitle(" 東京タワー ");
        assert_eq!(query.subtitle_hint(), Some("東京タワー"));
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let candidate = Candidate::new("Tokyo Tower", GeoPoint::new(35.6586, 139.7454), 0.8);
        let result = GeocodeResult::from_candidate(&candidate, Confidence::High);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["confidence"], "high");
        assert_eq!(json["matchedName"], "Tokyo Tower");
        assert_eq!(json["lng"], 139.7454);
        assert!(json.get("address").is_none());
    }

    #[test]
    fn test_point_validity() {
        assert!(GeoPoint::new(35.0, 139.0).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }
}
