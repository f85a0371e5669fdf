//! Aggregated search response

use super::models::SearchRequest;
use crate::codec::fields::nullable;
use crate::pools::{PoolIdentity, PoolResult};
use serde::{Deserialize, Serialize};

/// The aggregated answer from all pools searched for one request.
///
/// `pool_results` holds successful and failed pools side by side, in the
/// order the aggregator ranked them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub request: Option<SearchRequest>,
    #[serde(default, deserialize_with = "nullable")]
    pub pools: Vec<PoolIdentity>,
    #[serde(default)]
    pub total_time_ms: i64,
    #[serde(default)]
    pub total_hits: i64,
    #[serde(rename = "pool_results", default, deserialize_with = "nullable")]
    pub results: Vec<PoolResult>,
    #[serde(default, deserialize_with = "nullable")]
    pub warnings: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub suggestions: Vec<Suggestion>,
}

impl SearchResponse {
    /// Create an empty response echoing the originating request
    pub fn new(request: SearchRequest) -> Self {
        Self {
            request: Some(request),
            ..Default::default()
        }
    }

    /// Record a pool that took part in the search
    pub fn add_pool(&mut self, pool: PoolIdentity) {
        self.pools.push(pool);
    }

    /// Append one pool's answer
    pub fn add_result(&mut self, result: PoolResult) {
        self.results.push(result);
    }

    pub fn add_suggestion(&mut self, suggestion: Suggestion) {
        self.suggestions.push(suggestion);
    }

    /// Identity of the pool with the given id
    pub fn pool(&self, id: &str) -> Option<&PoolIdentity> {
        self.pools.iter().find(|p| p.id == id)
    }

    /// Results from pools that answered with a 2xx status
    pub fn successful_results(&self) -> impl Iterator<Item = &PoolResult> {
        self.results.iter().filter(|r| r.is_success())
    }

    /// Results from pools that failed
    pub fn failed_results(&self) -> impl Iterator<Item = &PoolResult> {
        self.results.iter().filter(|r| !r.is_success())
    }
}

/// A query suggestion, e.g. an author or subject search
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub value: String,
}

impl Suggestion {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}
