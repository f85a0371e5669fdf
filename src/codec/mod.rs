//! JSON wire codec for contract documents
//!
//! Every top-level document exchanged between clients, the aggregator and
//! pools can be decoded by kind name, which is what the command line checker
//! uses. Typed callers can use [`decode`] and [`encode`] directly.

pub mod fields;

use crate::error::{ContractError, Result};
use crate::filters::QueryFilterResponse;
use crate::pools::{PoolFacets, PoolIdentity, PoolProviders, PoolResult};
use crate::search::{SearchRequest, SearchResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Top-level document kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Request,
    Response,
    PoolResult,
    PoolFacets,
    PoolIdentity,
    Providers,
    QueryFilters,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 7] = [
        DocumentKind::Request,
        DocumentKind::Response,
        DocumentKind::PoolResult,
        DocumentKind::PoolFacets,
        DocumentKind::PoolIdentity,
        DocumentKind::Providers,
        DocumentKind::QueryFilters,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DocumentKind::Request => "request",
            DocumentKind::Response => "response",
            DocumentKind::PoolResult => "pool-result",
            DocumentKind::PoolFacets => "pool-facets",
            DocumentKind::PoolIdentity => "pool-identity",
            DocumentKind::Providers => "providers",
            DocumentKind::QueryFilters => "query-filters",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DocumentKind {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ContractError::UnknownKind(s.to_string()))
    }
}

/// A decoded document of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Request(SearchRequest),
    Response(SearchResponse),
    PoolResult(PoolResult),
    PoolFacets(PoolFacets),
    PoolIdentity(PoolIdentity),
    Providers(PoolProviders),
    QueryFilters(QueryFilterResponse),
}

impl Document {
    /// Decode `text` as a document of the given kind
    pub fn decode(kind: DocumentKind, text: &str) -> Result<Self> {
        let name = kind.name();
        let document = match kind {
            DocumentKind::Request => Document::Request(decode_named(name, text)?),
            DocumentKind::Response => Document::Response(decode_named(name, text)?),
            DocumentKind::PoolResult => Document::PoolResult(decode_named(name, text)?),
            DocumentKind::PoolFacets => Document::PoolFacets(decode_named(name, text)?),
            DocumentKind::PoolIdentity => Document::PoolIdentity(decode_named(name, text)?),
            DocumentKind::Providers => Document::Providers(decode_named(name, text)?),
            DocumentKind::QueryFilters => Document::QueryFilters(decode_named(name, text)?),
        };
        debug!("Decoded {} document ({} bytes)", name, text.len());
        Ok(document)
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Request(_) => DocumentKind::Request,
            Document::Response(_) => DocumentKind::Response,
            Document::PoolResult(_) => DocumentKind::PoolResult,
            Document::PoolFacets(_) => DocumentKind::PoolFacets,
            Document::PoolIdentity(_) => DocumentKind::PoolIdentity,
            Document::Providers(_) => DocumentKind::Providers,
            Document::QueryFilters(_) => DocumentKind::QueryFilters,
        }
    }

    /// Encode to canonical wire JSON
    pub fn encode(&self, pretty: bool) -> Result<String> {
        let name = self.kind().name();
        match self {
            Document::Request(doc) => encode_named(name, doc, pretty),
            Document::Response(doc) => encode_named(name, doc, pretty),
            Document::PoolResult(doc) => encode_named(name, doc, pretty),
            Document::PoolFacets(doc) => encode_named(name, doc, pretty),
            Document::PoolIdentity(doc) => encode_named(name, doc, pretty),
            Document::Providers(doc) => encode_named(name, doc, pretty),
            Document::QueryFilters(doc) => encode_named(name, doc, pretty),
        }
    }
}

/// Decode a typed document from JSON text
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T> {
    decode_named(short_type_name::<T>(), text)
}

/// Encode a typed document as compact JSON
pub fn encode<T: Serialize>(value: &T) -> Result<String> {
    encode_named(short_type_name::<T>(), value, false)
}

fn decode_named<T: DeserializeOwned>(kind: &'static str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|source| ContractError::Decode { kind, source })
}

fn encode_named<T: Serialize>(kind: &'static str, value: &T, pretty: bool) -> Result<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.map_err(|source| ContractError::Encode { kind, source })
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        for kind in DocumentKind::ALL {
            assert_eq!(kind.name().parse::<DocumentKind>().unwrap(), kind);
        }
        assert!(matches!(
            "records".parse::<DocumentKind>(),
            Err(ContractError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_decode_by_kind() {
        let doc = Document::decode(
            DocumentKind::Request,
            r#"{"query":"cats","pagination":{"start":0,"rows":10}}"#,
        )
        .unwrap();
        assert_eq!(doc.kind(), DocumentKind::Request);

        match &doc {
            Document::Request(request) => {
                assert_eq!(request.query, "cats");
                assert_eq!(request.pagination.total, 0);
            }
            other => panic!("unexpected document {:?}", other),
        }

        let encoded = doc.encode(false).unwrap();
        assert_eq!(Document::decode(DocumentKind::Request, &encoded).unwrap(), doc);
    }

    #[test]
    fn test_decode_error_names_kind() {
        let err = Document::decode(DocumentKind::PoolResult, r#"{"status_code": "ok"}"#).unwrap_err();
        assert!(err.to_string().starts_with("failed to decode pool-result"));

        let err = decode::<SearchRequest>("not json").unwrap_err();
        assert!(err.to_string().contains("SearchRequest"));
    }

    #[test]
    fn test_typed_encode() {
        let result = PoolResult::new("", "catalog");
        let json = encode(&result).unwrap();
        let parsed: PoolResult = decode(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
