//! Error types for place resolution.

use thiserror::Error;

/// Failure of a single search provider call. Absorbed by the resolver's
/// fallback chain; never reaches the caller.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {0}")]
    Status(u16),

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// Errors surfaced to callers of the resolver.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Missing or empty required field; a client error.
    #[error("invalid request: {0}")]
    Validation(String),

    /// No match and no centroid for the destination; a server error.
    #[error("could not locate destination {0:?}")]
    UnknownDestination(String),
}
