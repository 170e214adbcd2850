//! Error types for the fitness_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitness_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workout-type code not present in the dispatch table
    #[error("Undefined training type: {0:?}")]
    UnknownWorkoutType(String),

    /// Sensor package carries the wrong number of fields for its workout type
    #[error("Wrong number of fields for {code}: expected {expected}, got {actual}")]
    FieldCount {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// A field value cannot be used by the formulas
    #[error("Invalid field `{field}`: {reason}")]
    InvalidField { field: String, reason: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        Error::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
