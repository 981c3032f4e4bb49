//! Error types for the degradation ledger
//!
//! Every error names the record or track it came from, so a report can show
//! the operator exactly which log entry needs fixing.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Degradation ledger error types
#[derive(Error, Debug)]
pub enum Error {
    /// A run's clock time could not be parsed as `HH:MM`
    #[error("Invalid time '{value}' in run dated {date}: expected HH:MM")]
    Format {
        /// Date label of the offending run record
        date: String,
        /// The raw time string that failed to parse
        value: String,
    },

    /// A track has no mass measurements, so no baseline exists
    #[error("Insufficient data: track '{track}' has no mass measurements")]
    InsufficientData {
        /// Identifier of the track
        track: String,
    },

    /// Experiment data is structurally inconsistent
    #[error("Invalid experiment data: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
