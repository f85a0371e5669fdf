//! Search request and related data models

use crate::codec::fields::nullable;
use serde::{Deserialize, Serialize};

/// Everything a client sends to run one search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The search query string
    #[serde(default)]
    pub query: String,
    /// Requested window of results
    #[serde(default)]
    pub pagination: Pagination,
    /// Selected sort; empty `sort_id` means pool default
    #[serde(default)]
    pub sort: SortOrder,
    /// Facet constraints, at most one entry per pool
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub filters: Vec<Filter>,
    /// Routing hints
    #[serde(default)]
    pub preferences: SearchPreferences,
}

impl SearchRequest {
    /// Create a request for the first page of `query`
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Set the result window
    pub fn with_page(mut self, start: u64, rows: u64) -> Self {
        self.pagination.start = start;
        self.pagination.rows = rows;
        self
    }

    /// Set the sort order
    pub fn with_sort(mut self, sort_id: impl Into<String>, order: impl Into<String>) -> Self {
        self.sort = SortOrder::new(sort_id, order);
        self
    }

    /// Add a facet constraint, merging into an existing filter for the same pool
    pub fn with_filter(
        mut self,
        pool_id: impl Into<String>,
        facet_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let pool_id = pool_id.into();
        let facet = FilterFacet {
            facet_id: facet_id.into(),
            value: value.into(),
        };

        match self.filters.iter_mut().find(|f| f.pool_id == pool_id) {
            Some(filter) => filter.facets.push(facet),
            None => self.filters.push(Filter {
                pool_id,
                facets: vec![facet],
            }),
        }
        self
    }

    /// Route the search to a preferred pool
    pub fn target_pool(mut self, pool_id: impl Into<String>) -> Self {
        self.preferences.target_pool = pool_id.into();
        self
    }

    /// Skip a pool, identified by its service URL
    pub fn exclude_pool(mut self, url: impl Into<String>) -> Self {
        self.preferences.exclude_pool.push(url.into());
        self
    }

    /// Filter addressed to the given pool, if any
    pub fn filter_for(&self, pool_id: &str) -> Option<&Filter> {
        self.filters.iter().find(|f| f.pool_id == pool_id)
    }

    /// Check if query is empty
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
    }
}

/// Offset, page size and (on responses) total hit count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Zero-based offset of the first hit
    #[serde(default)]
    pub start: u64,
    /// Page size
    #[serde(default)]
    pub rows: u64,
    /// Hits available; only meaningful on responses
    #[serde(default)]
    pub total: i64,
}

impl Pagination {
    pub fn new(start: u64, rows: u64) -> Self {
        Self {
            start,
            rows,
            total: 0,
        }
    }
}

/// Sort selection for a search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    /// Matches a `SortOption::id` advertised by the pool
    #[serde(default)]
    pub sort_id: String,
    /// "asc" or "desc"
    #[serde(default)]
    pub order: String,
}

impl SortOrder {
    pub fn new(sort_id: impl Into<String>, order: impl Into<String>) -> Self {
        Self {
            sort_id: sort_id.into(),
            order: order.into(),
        }
    }

    /// No explicit sort was requested
    pub fn is_unset(&self) -> bool {
        self.sort_id.is_empty()
    }
}

/// Facet constraints addressed to one pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub pool_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub facets: Vec<FilterFacet>,
}

impl Filter {
    /// Whether this filter selects `value` for `facet_id`
    pub fn contains(&self, facet_id: &str, value: &str) -> bool {
        self.facets
            .iter()
            .any(|f| f.facet_id == facet_id && f.value == value)
    }
}

/// One selected facet value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterFacet {
    #[serde(default)]
    pub facet_id: String,
    #[serde(default)]
    pub value: String,
}

/// Client routing hints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPreferences {
    #[serde(default)]
    pub target_pool: String,
    /// Service URLs of pools the client does not want searched
    #[serde(default, deserialize_with = "nullable")]
    pub exclude_pool: Vec<String>,
}

impl SearchPreferences {
    /// Exact, case-sensitive match against the exclusion list.
    /// An empty URL is never excluded.
    pub fn is_excluded(&self, url: &str) -> bool {
        if url.is_empty() {
            return false;
        }
        self.exclude_pool.iter().any(|excluded| excluded == url)
    }
}
