//! Pool descriptions and per-pool answers
//!
//! A pool is an independent search backend. It describes itself with a
//! [`PoolIdentity`] and answers a search with a [`PoolResult`] (or a
//! [`PoolFacets`] when only facets were requested).

mod identity;
mod providers;
mod result;

pub use identity::{PoolAttribute, PoolIdentity, SortKind, SortOption};
pub use providers::{PoolProviders, Provider};
pub use result::{confidence_index, Confidence, PoolFacets, PoolResult};
