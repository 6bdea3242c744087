//! Error types for the alivia_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for alivia_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
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

    /// Incomplete or out-of-range questionnaire answers
    #[error("Questionnaire error: {0}")]
    Questionnaire(String),

    /// Malformed medication schedule
    #[error("Schedule error: {0}")]
    Schedule(String),

    /// Time-of-day text that is not `HH:MM`
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
