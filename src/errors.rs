//! Error types for the trichoguide engine
//!
//! The four core functions (classify, recommend, summarize, filter) are total
//! and never fail. Errors only arise at the loading edges: embedded reference
//! data, the package catalog, and configuration files.

use thiserror::Error;

/// Main error type for the assessment engine
#[derive(Error, Debug)]
pub enum AssessmentError {
    /// Embedded reference data failed to deserialize
    #[error("Reference data error in {table}: {source}")]
    ReferenceData {
        table: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reference table violates a structural invariant
    #[error("Reference table {table} invalid: {message}")]
    InvalidTable { table: String, message: String },

    /// Package catalog inconsistency (missing id, empty catalog)
    #[error("Package catalog error: {0}")]
    Catalog(String),

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, AssessmentError>;

/// Convert anyhow errors from the config layer
impl From<anyhow::Error> for AssessmentError {
    fn from(err: anyhow::Error) -> Self {
        AssessmentError::Config(err.to_string())
    }
}
