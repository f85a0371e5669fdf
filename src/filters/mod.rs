//! Pre-search filter catalog
//!
//! Returned before any search is issued so a client can populate its
//! filter controls.

use crate::codec::fields::nullable;
use serde::{Deserialize, Serialize};

/// One filter dimension and its known values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFilter {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, deserialize_with = "nullable")]
    pub values: Vec<QueryFilterValue>,
}

/// A filter value and how many items carry it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFilterValue {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub count: i64,
}

/// All pre-search filters, with the sources that contributed them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFilterResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub sources: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub filters: Vec<QueryFilter>,
}

impl QueryFilterResponse {
    /// Look up a filter by id
    pub fn filter(&self, id: &str) -> Option<&QueryFilter> {
        self.filters.iter().find(|f| f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_catalog() {
        let response: QueryFilterResponse = serde_json::from_value(json!({
            "sources": ["catalog", "articles"],
            "filters": [{
                "id": "FilterCirculating",
                "label": "Circulating",
                "values": [{"value": "yes", "count": 1204}, {"value": "no", "count": 17}]
            }]
        }))
        .unwrap();

        let circ = response.filter("FilterCirculating").unwrap();
        assert_eq!(circ.values[0].count, 1204);
        assert!(response.filter("FilterLibrary").is_none());
    }

    #[test]
    fn test_empty_catalog_wire() {
        let value = serde_json::to_value(QueryFilterResponse::default()).unwrap();
        assert_eq!(value, json!({"sources": [], "filters": []}));

        let parsed: QueryFilterResponse =
            serde_json::from_value(json!({"sources": null, "filters": null})).unwrap();
        assert_eq!(parsed, QueryFilterResponse::default());
    }
}
