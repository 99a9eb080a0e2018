//! Error types for the radar compositing pipeline.

use thiserror::Error;

/// Result type alias using RadarError.
pub type RadarResult<T> = Result<T, RadarError>;

/// Primary error type for radar pipeline operations.
#[derive(Debug, Error)]
pub enum RadarError {
    // === Caller Errors ===
    #[error("Unknown radar product code: {0}")]
    UnknownProduct(String),

    #[error("Site identifier must not be empty")]
    EmptySiteId,

    // === Layer Fetch Errors ===
    #[error("Failed to fetch layer from {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Failed to decode layer image from {url}: {message}")]
    Decode { url: String, message: String },
}

impl RadarError {
    /// True when the error is a bad input rather than a remote failure,
    /// so retrying the same request cannot succeed.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            RadarError::UnknownProduct(_) | RadarError::EmptySiteId
        )
    }
}
