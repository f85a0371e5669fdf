//! Settings structures for the contract checker

use crate::error::Result;
use crate::pools::PoolIdentity;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure, read from `v4api.yml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub check: CheckSettings,
    pub output: OutputSettings,
    /// Catalog of known pools, consulted when a response omits a pool's identity
    pub pools: Vec<PoolIdentity>,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (V4API_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    fn merge_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("V4API_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Some(val) = var("V4API_LOG") {
            self.general.log_level = val;
        }
        if let Some(val) = var("V4API_STRICT") {
            self.check.strict = val.parse().unwrap_or(false);
        }
        if let Some(val) = var("V4API_MAX_ROWS") {
            if let Ok(rows) = val.parse() {
                self.check.max_rows = Some(rows);
            }
        }
        if let Some(val) = var("V4API_PRETTY") {
            self.output.pretty = val.parse().unwrap_or(true);
        }
    }
}

/// General settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Log filter directive used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: "info".to_string(),
        }
    }
}

/// Checker behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckSettings {
    /// Treat warnings as failures
    pub strict: bool,
    /// Largest page size a request may ask for
    pub max_rows: Option<u64>,
    /// Flag pools that are neither described in the document nor in the catalog
    pub require_known_pools: bool,
    /// Validate URL-valued fields
    pub check_urls: bool,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            strict: false,
            max_rows: None,
            require_known_pools: false,
            check_urls: true,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Pretty-print the canonical document
    pub pretty: bool,
    /// Print the canonical document after checking
    pub echo: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            pretty: true,
            echo: true,
        }
    }
}
