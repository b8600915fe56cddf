//! Core error types for the Wealthdash dashboard.
//!
//! Transport-specific errors (from `reqwest`, etc.) are converted to these types
//! by the client crate so the core stays transport-agnostic.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Request to {resource} timed out after {timeout_ms}ms")]
    Timeout { resource: String, timeout_ms: u64 },

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Snapshot validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(
        "Performance series length mismatch: {labels} labels, {portfolio} portfolio, \
         {nifty50} nifty50, {gold} gold"
    )]
    SeriesLengthMismatch {
        labels: usize,
        portfolio: usize,
        nifty50: usize,
        gold: usize,
    },

    #[error("Invalid configuration value: {0}")]
    Config(String),
}

/// Shape violations detected in a fetched batch before it is adopted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Holding at position {0} has an empty symbol")]
    EmptySymbol(usize),

    #[error("Duplicate holding symbol '{0}'")]
    DuplicateSymbol(String),

    #[error("Holding '{symbol}' has a negative quantity ({quantity})")]
    NegativeQuantity { symbol: String, quantity: String },

    #[error("Allocation bucket '{label}' in {dimension} is out of range: {reason}")]
    BucketOutOfRange {
        dimension: String,
        label: String,
        reason: String,
    },

    #[error("Timeline date '{0}' is not a valid YYYY-MM-DD date")]
    InvalidTimelineDate(String),

    #[error("Timeline is not chronological: '{previous}' comes before '{current}'")]
    UnorderedTimeline { previous: String, current: String },
}

impl Error {
    /// True for failures that happened before any response body was seen.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Timeout { .. })
    }
}
