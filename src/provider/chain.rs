use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{PlaceSearch, SearchQuery};
use crate::error::ProviderError;
use crate::models::Candidate;

/// Tries providers in order and returns the first non-empty answer.
///
/// Errors from earlier providers are logged and skipped; the last error is
/// returned only if every provider failed.
pub struct ProviderChain {
    providers: Vec<Arc<dyn PlaceSearch>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Arc<dyn PlaceSearch>>) -> Self {
        Self { providers }
    }
}

#[async_trait]
impl PlaceSearch for ProviderChain {
    fn name(&self) -> &str {
        "chain"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>, ProviderError> {
        let mut last_error = None;
        let mut any_ok = false;

        for provider in &self.providers {
            match provider.search(query).await {
                Ok(candidates) if !candidates.is_empty() => {
                    debug!(
                        provider = provider.name(),
                        count = candidates.len(),
                        "chain answered for {:?}",
                        query.text
                    );
                    return Ok(candidates);
                }
                Ok(_) => any_ok = true,
                Err(e) => {
                    warn!(provider = provider.name(), "search failed: {}", e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if !any_ok => Err(e),
            _ => Ok(Vec::new()),
        }
    }
}
