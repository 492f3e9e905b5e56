//! Error types for the tuning harness.

/// Result type alias for tuning operations.
pub type Result<T> = std::result::Result<T, TuningError>;

/// Errors raised while talking to the detection or completion services.
///
/// Parsing replacement lists out of model output never produces one of
/// these: that path fails soft and yields an empty list.
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    /// A required API key is not set.
    #[error("missing environment variable {0}")]
    MissingKey(&'static str),

    /// The service answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, as returned
        body: String,
    },

    /// The caller-supplied transport failed before a response arrived.
    #[error("transport error: {0}")]
    Transport(String),

    /// A request could not be encoded or a response could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
