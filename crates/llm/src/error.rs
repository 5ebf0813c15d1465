//! Error types for scene generation

/// Errors that can occur during a generation request
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Request timed out
    #[error("Generation timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Provider-specific failure (HTTP status, refusal, quota, ...)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The model returned text with no parseable voxel array
    #[error("Unexpected response format: {0}")]
    UnexpectedFormat(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns true if retrying the request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Timeout(_) | Error::Provider(_))
    }
}
