//! Error types for project persistence

/// Errors that can occur while loading or saving projects
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The project record could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No project with the given id exists in the store
    #[error("Project not found: {0}")]
    NotFound(String),
}

/// Result type for project operations
pub type Result<T> = std::result::Result<T, Error>;
