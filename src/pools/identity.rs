//! Pool identity, capabilities and sort options

use crate::codec::fields::nullable;
use crate::error::ContractError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Describes one pool and what it can do
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolIdentity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// e.g. "record" or "image"
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub source: String,
    /// Service URL; also the key used by `SearchPreferences::exclude_pool`
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub attributes: Vec<PoolAttribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub sort_options: Vec<SortOption>,
}

impl PoolIdentity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Advertise a capability
    pub fn with_attribute(mut self, attribute: PoolAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Advertise a sort option
    pub fn with_sort_option(mut self, option: SortOption) -> Self {
        self.sort_options.push(option);
        self
    }

    /// Look up a capability by name
    pub fn attribute(&self, name: &str) -> Option<&PoolAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Whether the named capability is present and supported
    pub fn supports(&self, name: &str) -> bool {
        self.attribute(name).map(|a| a.supported).unwrap_or(false)
    }

    /// Whether `sort_id` is one of the advertised sort options
    pub fn advertises_sort(&self, sort_id: &str) -> bool {
        self.sort_options.iter().any(|s| s.id == sort_id)
    }
}

/// One capability flag of a pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolAttribute {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub supported: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl PoolAttribute {
    pub fn new(name: impl Into<String>, supported: bool) -> Self {
        Self {
            name: name.into(),
            supported,
            value: String::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// A sort mode a pool supports, with direction labels for display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub asc: String,
    #[serde(default)]
    pub desc: String,
}

impl SortOption {
    pub fn new(kind: SortKind, label: impl Into<String>) -> Self {
        Self {
            id: kind.label().to_string(),
            label: label.into(),
            asc: String::new(),
            desc: String::new(),
        }
    }

    /// Set ascending/descending labels
    pub fn with_directions(mut self, asc: impl Into<String>, desc: impl Into<String>) -> Self {
        self.asc = asc.into();
        self.desc = desc.into();
        self
    }
}

/// The common sort modes shared by catalog pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKind {
    /// Descending relevance
    Relevance,
    /// Published date
    Date,
    Title,
    Author,
}

impl SortKind {
    /// Every sort kind, in declaration order
    pub const ALL: [SortKind; 4] = [
        SortKind::Relevance,
        SortKind::Date,
        SortKind::Title,
        SortKind::Author,
    ];

    /// Identifier used in `SortOption::id` and `SortOrder::sort_id`
    pub fn label(self) -> &'static str {
        match self {
            SortKind::Relevance => "SortRelevance",
            SortKind::Date => "SortDatePublished",
            SortKind::Title => "SortTitle",
            SortKind::Author => "SortAuthor",
        }
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKind {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| ContractError::UnknownSortLabel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_labels() {
        assert_eq!(SortKind::Relevance.to_string(), "SortRelevance");
        assert_eq!(SortKind::Date.to_string(), "SortDatePublished");
        assert_eq!(SortKind::Title.to_string(), "SortTitle");
        assert_eq!(SortKind::Author.to_string(), "SortAuthor");
    }

    #[test]
    fn test_sort_label_parse() {
        for kind in SortKind::ALL {
            assert_eq!(kind.label().parse::<SortKind>().unwrap(), kind);
        }
        assert!(matches!(
            "SortDate".parse::<SortKind>(),
            Err(ContractError::UnknownSortLabel(label)) if label == "SortDate"
        ));
    }

    #[test]
    fn test_identity_capabilities() {
        let pool = PoolIdentity::new("catalog", "Catalog", "https://catalog.example")
            .with_attribute(PoolAttribute::new("facets", true))
            .with_attribute(PoolAttribute::new("sorting", false))
            .with_attribute(PoolAttribute::new("logo_url", true).with_value("https://x/logo.png"))
            .with_sort_option(
                SortOption::new(SortKind::Date, "Date Published").with_directions("oldest", "newest"),
            );

        assert!(pool.supports("facets"));
        assert!(!pool.supports("sorting"));
        assert!(!pool.supports("cover_images"));
        assert_eq!(pool.attribute("logo_url").unwrap().value, "https://x/logo.png");
        assert!(pool.advertises_sort("SortDatePublished"));
        assert!(!pool.advertises_sort("SortTitle"));
    }

    #[test]
    fn test_identity_wire_form() {
        let pool = PoolIdentity::new("images", "Images", "https://images.example");
        let value = serde_json::to_value(&pool).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "images",
                "name": "Images",
                "description": "",
                "mode": "",
                "source": "",
                "url": "https://images.example"
            })
        );

        let attr = serde_json::to_value(PoolAttribute::new("facets", true)).unwrap();
        assert_eq!(attr, json!({"name": "facets", "supported": true}));
    }
}
