//! Search request and aggregated response
//!
//! The request is what a client sends to the aggregator (and what the
//! aggregator forwards to each pool); the response collects every pool's
//! answer along with warnings and suggestions.

mod models;
mod response;

pub use models::*;
pub use response::{SearchResponse, Suggestion};
