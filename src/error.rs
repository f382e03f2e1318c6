//! Error types for the Kinloom SDK

use thiserror::Error;

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK error types
#[derive(Error, Debug)]
pub enum SdkError {
    /// Record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Event network unreachable
    #[error("Network unavailable: {0}")]
    NetworkUnavailable(String),

    /// Network integration switched off by configuration
    #[error("Network integration is disabled")]
    NetworkDisabled,

    /// Response could not be decoded into records
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Live query produced no records
    #[error("Empty result for {0}")]
    EmptyResult(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Contribution outbox at capacity
    #[error("Outbox full, backpressure at {0}%")]
    OutboxFull(u8),

    /// Viewer clearance below the record's protocol level
    #[error("Access denied: {required} protocol required, viewer has {actual}")]
    AccessDenied { required: String, actual: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SdkError {
    /// Whether the aggregation service may serve the fallback catalog
    /// in place of this failure.
    ///
    /// The three fetch failures degrade; everything else is a caller error.
    pub fn is_degradable(&self) -> bool {
        matches!(
            self,
            Self::NetworkUnavailable(_) | Self::MalformedResponse(_) | Self::EmptyResult(_)
        )
    }
}

#[cfg(feature = "gateway")]
impl From<reqwest::Error> for SdkError {
    fn from(err: reqwest::Error) -> Self {
        SdkError::NetworkUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::Serialization(err.to_string())
    }
}
