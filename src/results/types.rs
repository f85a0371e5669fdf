//! Record, group and facet definitions

use crate::codec::fields::nullable;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field type assumed when `RecordField::field_type` is empty
pub const DEFAULT_FIELD_TYPE: &str = "text";

/// Visibility assumed when `RecordField::visibility` is empty
pub const DEFAULT_VISIBILITY: &str = "basic";

/// A set of hits sharing one group value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub count: i64,
    #[serde(
        rename = "record_list",
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "nullable"
    )]
    pub records: Vec<Record>,
}

impl Group {
    /// Create a group holding a single record
    pub fn single(record: Record) -> Self {
        Self {
            value: record.group_value.clone(),
            count: 1,
            records: vec![record],
        }
    }
}

/// One search hit. `fields` is in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "nullable")]
    pub fields: Vec<RecordField>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub related: Vec<RelatedRecord>,
    #[serde(default, skip_serializing_if = "Map::is_empty", deserialize_with = "nullable")]
    pub debug: Map<String, Value>,
    /// Grouping key used by pools that collapse hits; never on the wire
    #[serde(skip)]
    pub group_value: String,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field
    pub fn with_field(mut self, field: RecordField) -> Self {
        self.fields.push(field);
        self
    }

    /// Set the internal grouping key
    pub fn with_group_value(mut self, value: impl Into<String>) -> Self {
        self.group_value = value.into();
        self
    }

    /// First field with the given name
    pub fn field(&self, name: &str) -> Option<&RecordField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// All fields with the given name, in display order
    pub fn fields_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a RecordField> + 'a {
        self.fields.iter().filter(move |f| f.name == name)
    }
}

/// One named attribute of a record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordField {
    #[serde(default)]
    pub name: String,
    /// Empty means "text"
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(default)]
    pub value: String,
    /// Literal separator, or a named one such as "paragraph"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub separator: String,
    /// "basic" or "detailed"; empty means "basic"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub visibility: String,
    /// "optional" or empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display: String,
    /// Link provider, e.g. "hathitrust"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub provider: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub item: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub citation_part: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ris_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_value: Option<Value>,
}

impl RecordField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = field_type.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Mark the field as shown only in the detailed view
    pub fn detailed(mut self) -> Self {
        self.visibility = "detailed".to_string();
        self
    }

    pub fn with_structured_value(mut self, value: Value) -> Self {
        self.structured_value = Some(value);
        self
    }

    pub fn effective_type(&self) -> &str {
        if self.field_type.is_empty() {
            DEFAULT_FIELD_TYPE
        } else {
            &self.field_type
        }
    }

    pub fn effective_visibility(&self) -> &str {
        if self.visibility.is_empty() {
            DEFAULT_VISIBILITY
        } else {
            &self.visibility
        }
    }

    pub fn is_optional(&self) -> bool {
        self.display == "optional"
    }
}

/// Cross-reference to a sibling record, populated by image pools
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub iiif_manifest_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub iiif_image_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub iiif_base_url: String,
}

/// Facet metadata and its value buckets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub facet_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub buckets: Vec<FacetBucket>,
}

impl Facet {
    /// Buckets currently selected by the request's filters
    pub fn selected(&self) -> impl Iterator<Item = &FacetBucket> {
        self.buckets.iter().filter(|b| b.selected)
    }
}

/// One facet value and its hit count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetBucket {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub selected: bool,
}
