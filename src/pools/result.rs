//! Per-pool result payloads

use crate::codec::fields::{is_zero, nullable};
use crate::results::{Facet, Group};
use crate::search::{Pagination, SortOrder};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Pool-reported estimate of how well its results match the query.
/// Variants are ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Confidence {
    Low,
    Medium,
    High,
    Exact,
}

impl Confidence {
    pub const ALL: [Confidence; 4] = [
        Confidence::Low,
        Confidence::Medium,
        Confidence::High,
        Confidence::Exact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
            Confidence::Exact => "exact",
        }
    }

    /// Ordinal rank, 0 for low through 3 for exact
    pub fn rank(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|c| c.as_str() == s).ok_or(())
    }
}

/// Rank of a confidence label. Unknown or empty labels rank lowest.
pub fn confidence_index(label: &str) -> usize {
    label.parse::<Confidence>().map(Confidence::rank).unwrap_or(0)
}

/// One pool's answer to a search request.
///
/// A failing pool is reported as a result with a non-2xx `status_code`,
/// a `status_msg`, and no groups, so the aggregator can still return the
/// other pools' hits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolResult {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_url: String,
    #[serde(rename = "pool_id", default, skip_serializing_if = "String::is_empty")]
    pub pool_name: String,
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub sort: SortOrder,
    #[serde(
        rename = "group_list",
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "nullable"
    )]
    pub groups: Vec<Group>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub facet_list: Vec<Facet>,
    /// One of "low", "medium", "high", "exact", or empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub confidence: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub elapsed_ms: i64,
    #[serde(default, skip_serializing_if = "Map::is_empty", deserialize_with = "nullable")]
    pub debug: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub status_code: i64,
    #[serde(rename = "status_msg", default, skip_serializing_if = "String::is_empty")]
    pub status_message: String,
    /// Language of the returned content; internal only
    #[serde(skip)]
    pub content_language: String,
}

impl PoolResult {
    /// Create a successful, empty result for a pool
    pub fn new(service_url: impl Into<String>, pool_name: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            pool_name: pool_name.into(),
            status_code: 200,
            ..Default::default()
        }
    }

    /// Create a result reporting that the pool failed
    pub fn failed(
        service_url: impl Into<String>,
        pool_name: impl Into<String>,
        status_code: i64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status_code,
            status_message: message.into(),
            ..Self::new(service_url, pool_name)
        }
    }

    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence.as_str().to_string();
        self
    }

    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    pub fn with_facet(mut self, facet: Facet) -> Self {
        self.facet_list.push(facet);
        self
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Rank of `confidence`, 0 when unset or unrecognized
    pub fn confidence_index(&self) -> usize {
        confidence_index(&self.confidence)
    }

    /// Parsed confidence, if it is one of the known labels
    pub fn confidence_level(&self) -> Option<Confidence> {
        self.confidence.parse().ok()
    }

    /// Check if the pool answered with a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Total records across all groups
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }
}

/// Facet-only answer from a pool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolFacets {
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub facet_list: Vec<Facet>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub elapsed_ms: i64,
    #[serde(default, skip_serializing_if = "Map::is_empty", deserialize_with = "nullable")]
    pub debug: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub status_code: i64,
    #[serde(rename = "status_msg", default, skip_serializing_if = "String::is_empty")]
    pub status_message: String,
}

impl PoolFacets {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{FacetBucket, Record, RecordField};
    use serde_json::json;

    #[test]
    fn test_confidence_ranks() {
        assert_eq!(confidence_index("low"), 0);
        assert_eq!(confidence_index("medium"), 1);
        assert_eq!(confidence_index("high"), 2);
        assert_eq!(confidence_index("exact"), 3);
    }

    #[test]
    fn test_unknown_confidence_is_lowest() {
        for label in ["", "HIGH", "Exact", "certain", " low", "medium "] {
            assert_eq!(confidence_index(label), 0, "label {:?}", label);
        }
        assert!(Confidence::Low < Confidence::Exact);
    }

    #[test]
    fn test_result_confidence() {
        let result = PoolResult::new("https://catalog.example", "catalog")
            .with_confidence(Confidence::High);
        assert_eq!(result.confidence, "high");
        assert_eq!(result.confidence_index(), 2);
        assert_eq!(result.confidence_level(), Some(Confidence::High));

        let unset = PoolResult::default();
        assert_eq!(unset.confidence_index(), 0);
        assert_eq!(unset.confidence_level(), None);
    }

    #[test]
    fn test_optional_keys_omitted() {
        let result = PoolResult {
            status_code: 200,
            ..Default::default()
        };
        let value = serde_json::to_value(&result).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj["status_code"], json!(200));
        for key in [
            "warnings",
            "debug",
            "status_msg",
            "group_list",
            "facet_list",
            "confidence",
            "elapsed_ms",
            "service_url",
            "pool_id",
        ] {
            assert!(!obj.contains_key(key), "unexpected key {}", key);
        }
        assert!(obj.contains_key("pagination"));
        assert!(obj.contains_key("sort"));
    }

    #[test]
    fn test_status_code_always_present() {
        let value = serde_json::to_value(PoolResult::default()).unwrap();
        assert_eq!(value["status_code"], json!(0));
    }

    #[test]
    fn test_content_language_internal() {
        let mut result = PoolResult::new("https://catalog.example", "catalog");
        result.content_language = "en-US".to_string();
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("content_language"));
        assert!(!json.contains("en-US"));
    }

    #[test]
    fn test_failed_pool() {
        let result = PoolResult::failed("https://images.example", "images", 503, "pool offline");
        assert!(!result.is_success());
        assert!(result.groups.is_empty());

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status_code"], json!(503));
        assert_eq!(value["status_msg"], json!("pool offline"));
        assert_eq!(value["pool_id"], json!("images"));
    }

    #[test]
    fn test_record_count() {
        let result = PoolResult::new("u", "p")
            .with_group(Group::single(Record::new().with_field(RecordField::new("id", "1"))))
            .with_group(Group {
                value: "g".to_string(),
                count: 2,
                records: vec![Record::new(), Record::new()],
            })
            .with_facet(Facet {
                id: "FacetFormat".to_string(),
                name: "Format".to_string(),
                facet_type: "checkbox".to_string(),
                buckets: vec![FacetBucket {
                    value: "Book".to_string(),
                    count: 3,
                    selected: false,
                }],
            });
        assert_eq!(result.record_count(), 3);
        assert!(result.is_success());
    }

    #[test]
    fn test_pool_facets_wire() {
        let facets: PoolFacets = serde_json::from_value(json!({
            "facet_list": null,
            "elapsed_ms": 14,
            "status_code": 200
        }))
        .unwrap();
        assert!(facets.facet_list.is_empty());
        assert!(facets.is_success());

        let value = serde_json::to_value(&facets).unwrap();
        assert_eq!(value, json!({"elapsed_ms": 14, "status_code": 200}));
    }
}
