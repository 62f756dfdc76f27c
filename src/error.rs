//! Error types for trialboard
//!
//! Decode failures are fatal for the whole call: no partial matrices are
//! ever returned alongside an error.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// trialboard error types
#[derive(Error, Debug)]
pub enum Error {
    /// Observation is missing a dimension value, or a value is not numeric
    #[error("Malformed observation {observation_id}: {detail}")]
    MalformedObservation {
        /// ID of the offending observation
        observation_id: u64,
        /// What was wrong with it
        detail: String,
    },

    /// Experiment does not exist or belongs to another user
    #[error("Experiment {0} not found")]
    ExperimentNotFound(u64),

    /// Invalid input (configuration values, arguments)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON (de)serialization failed (config files, chart payloads)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Arrow error (record batch assembly, CSV writer)
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for a [`Error::MalformedObservation`].
    pub(crate) fn malformed(observation_id: u64, detail: impl Into<String>) -> Self {
        Self::MalformedObservation {
            observation_id,
            detail: detail.into(),
        }
    }
}
