//! HTTP API for single and batch place resolution and route distance.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ResolveError;
use crate::models::{GeocodeResult, PlaceQuery, Stats};
use crate::resolver::Resolver;
use crate::route::{format_distance, summarize, RoutePoint, RouteSummary};

/// Application state shared across handlers
pub struct AppState {
    pub resolver: Resolver,
}

type ApiError = (StatusCode, String);

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/geocode", post(geocode_handler))
        .route("/v1/geocode/batch", post(batch_handler))
        .route("/v1/route/distance", post(route_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    provider: String,
    cities: usize,
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        provider: state.resolver.provider_name().to_string(),
        cities: state.resolver.normalizer().table().len(),
    })
}

#[derive(Deserialize)]
struct GeocodeRequest {
    title: Option<String>,
    subtitle: Option<String>,
    destination: Option<String>,
}

#[derive(Serialize)]
struct GeocodeResponse {
    #[serde(flatten)]
    result: GeocodeResult,
    message: &'static str,
}

/// Resolve a single place
async fn geocode_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GeocodeRequest>, JsonRejection>,
) -> Result<Json<GeocodeResponse>, ApiError> {
    let Json(request) = payload.map_err(bad_json)?;
    let query = PlaceQuery {
        title: request.title.unwrap_or_default(),
        subtitle: request.subtitle,
        destination: request.destination.unwrap_or_default(),
    };

    let result = state.resolver.resolve(&query).await.map_err(|e| {
        if matches!(e, ResolveError::UnknownDestination(_)) {
            tracing::error!("Geocoding failed for {:?}: {}", query.title, e);
        }
        error_status(e)
    })?;

    Ok(Json(GeocodeResponse {
        message: result.confidence.message(),
        result,
    }))
}

#[derive(Deserialize)]
struct BatchRequest {
    places: Option<Vec<BatchPlace>>,
    destination: Option<String>,
}

#[derive(Deserialize)]
struct BatchPlace {
    #[serde(default)]
    title: String,
    subtitle: Option<String>,
    /// Falls back to the batch destination when absent
    #[serde(default)]
    destination: String,
}

#[derive(Serialize)]
struct BatchResponse {
    results: Vec<GeocodeResult>,
    stats: Stats,
    message: String,
}

/// Resolve an itinerary's places in order
async fn batch_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<BatchResponse>, ApiError> {
    let Json(request) = payload.map_err(bad_json)?;
    let places = request.places.unwrap_or_default();
    let destination = request.destination.unwrap_or_default();

    let queries: Vec<PlaceQuery> = places
        .into_iter()
        .map(|p| PlaceQuery {
            title: p.title,
            subtitle: p.subtitle,
            destination: p.destination,
        })
        .collect();

    let batch = state
        .resolver
        .resolve_batch(&queries, &destination)
        .await
        .map_err(|e| {
            if matches!(e, ResolveError::UnknownDestination(_)) {
                tracing::error!("Batch geocoding failed: {}", e);
            }
            error_status(e)
        })?;

    Ok(Json(BatchResponse {
        message: batch.stats.summary(),
        results: batch.results,
        stats: batch.stats,
    }))
}

#[derive(Deserialize)]
struct RouteRequest {
    #[serde(default)]
    points: Vec<RoutePoint>,
}

#[derive(Serialize)]
struct RouteResponse {
    #[serde(flatten)]
    summary: RouteSummary,
    formatted: String,
}

/// Cumulative great-circle distance over points in itinerary order
async fn route_handler(
    payload: Result<Json<RouteRequest>, JsonRejection>,
) -> Result<Json<RouteResponse>, ApiError> {
    let Json(request) = payload.map_err(bad_json)?;
    let summary = summarize(&request.points);
    Ok(Json(RouteResponse {
        formatted: format_distance(summary.total_km),
        summary,
    }))
}

fn bad_json(rejection: JsonRejection) -> ApiError {
    (StatusCode::BAD_REQUEST, rejection.body_text())
}

fn error_status(error: ResolveError) -> ApiError {
    let status = match error {
        ResolveError::Validation(_) => StatusCode::BAD_REQUEST,
        ResolveError::UnknownDestination(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, error.to_string())
}
