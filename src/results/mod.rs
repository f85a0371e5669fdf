//! Hit payloads returned by pools
//!
//! Records are grouped, carry their fields in display order, and are
//! accompanied by facet buckets describing the result set.

mod types;

pub use types::*;
