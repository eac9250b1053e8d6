//! Error types for the anofox-anomaly library.

use thiserror::Error;

/// Result type alias for detection operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;

/// Errors that can occur while validating input or running detection.
///
/// A zero residual spread is deliberately absent: it is a defined
/// "no anomalies" outcome, reported through
/// [`ThresholdResult::degenerate`](crate::detection::ThresholdResult::degenerate).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnomalyError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// A sample delivered by the data source is missing a field or holds a
    /// non-numeric or non-finite value.
    #[error("malformed sample at index {index}: {reason}")]
    MalformedSample { index: usize, reason: String },

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// The data source payload could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for AnomalyError {
    fn from(err: serde_json::Error) -> Self {
        AnomalyError::Decode(err.to_string())
    }
}
