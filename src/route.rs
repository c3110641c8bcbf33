//! Great-circle route distance over an itinerary's resolved points.

use serde::{Deserialize, Serialize};

use crate::models::GeoPoint;

/// Mean Earth radius used for all distance math.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on a day's route. Points without usable coordinates are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Time slot or activity the point belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl RoutePoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
            label: None,
        }
    }

    pub fn point(&self) -> Option<GeoPoint> {
        let point = GeoPoint::new(self.lat?, self.lng?);
        point.is_valid().then_some(point)
    }
}

impl From<GeoPoint> for RoutePoint {
    fn from(point: GeoPoint) -> Self {
        Self::new(point.lat, point.lon)
    }
}

/// Per-leg and cumulative distances, in kilometers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub legs: Vec<f64>,
    pub total_km: f64,
}

/// Haversine distance between two points in kilometers.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Leg distances between consecutive valid points, in itinerary order.
pub fn summarize(points: &[RoutePoint]) -> RouteSummary {
    let valid: Vec<GeoPoint> = points.iter().filter_map(RoutePoint::point).collect();
    let legs: Vec<f64> = valid.windows(2).map(|w| haversine_km(w[0], w[1])).collect();
    let total_km = legs.iter().sum();
    RouteSummary { legs, total_km }
}

/// Cumulative distance in kilometers; 0 with fewer than two valid points.
pub fn total_distance(points: &[RoutePoint]) -> f64 {
    summarize(points).total_km
}

/// "-" for no distance, meters under 1 km, one-decimal kilometers otherwise.
pub fn format_distance(km: f64) -> String {
    if km.is_nan() || km <= 0.0 {
        "-".to_string()
    } else if km < 1.0 {
        format!("{}m", (km * 1000.0).round() as i64)
    } else {
        format!("{:.1}km", km)
    }
}
