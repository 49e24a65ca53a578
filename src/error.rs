//! Error types for the concierge calendar engine.

use thiserror::Error;

/// Main error type for concierge operations.
///
/// The calendar engine itself degrades silently: malformed records are
/// dropped from aggregation and unresolvable move intents are no-ops.
/// Typed errors only surface at the edges (configuration, record files).
#[derive(Error, Debug)]
pub enum ConciergeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Record file error: {0}")]
    Records(#[from] RecordError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors loading the external record collections.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to read record file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse records: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for concierge operations.
pub type Result<T> = std::result::Result<T, ConciergeError>;
