//! Error types for decoding, encoding and configuration

use thiserror::Error;

/// Errors produced by the contract codec and settings loader
#[derive(Debug, Error)]
pub enum ContractError {
    /// The payload was not valid JSON for the requested document
    #[error("failed to decode {kind}: {source}")]
    Decode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A document could not be serialized
    #[error("failed to encode {kind}: {source}")]
    Encode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Unknown document kind name
    #[error("unknown document kind: {0}")]
    UnknownKind(String),

    /// Unknown sort enumeration label
    #[error("unknown sort label: {0}")]
    UnknownSortLabel(String),

    /// Settings file could not be read
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file was not valid YAML
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_yaml::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ContractError>;
