//! v4api: the shared data contract of a federated pool search service
//!
//! A search aggregator fans a [`SearchRequest`] out to independent search
//! pools, each of which answers with a [`PoolResult`]; the aggregator returns
//! the collected answers as a [`SearchResponse`]. This crate holds those
//! wire types, their JSON codec, and a checker for the contract's invariants.

pub mod check;
pub mod codec;
pub mod config;
pub mod error;
pub mod filters;
pub mod pools;
pub mod results;
pub mod search;

pub use codec::{Document, DocumentKind};
pub use config::Settings;
pub use error::{ContractError, Result};
pub use pools::{Confidence, PoolIdentity, PoolResult, SortKind};
pub use search::{SearchPreferences, SearchRequest, SearchResponse};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
