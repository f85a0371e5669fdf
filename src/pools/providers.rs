//! Content providers a pool may surface in its records

use crate::codec::fields::nullable;
use serde::{Deserialize, Serialize};

/// One content provider, referenced by `RecordField::provider`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    #[serde(default)]
    pub provider: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub homepage_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub logo_url: String,
}

/// All providers a pool may return
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolProviders {
    #[serde(default, deserialize_with = "nullable")]
    pub providers: Vec<Provider>,
}

impl PoolProviders {
    /// Look up a provider by key
    pub fn get(&self, key: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.provider == key)
    }
}
