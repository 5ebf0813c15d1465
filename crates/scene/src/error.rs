//! Error types for the scene model

/// Errors that can occur when mutating or reading the scene
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An index-based operation referenced a slot outside the store
    ///
    /// Indices are not stable across mutations; callers must re-read the
    /// store after any add or remove before reusing an index.
    #[error("Voxel index {index} out of range (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A color string could not be parsed as a hex color
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Result type for scene operations
pub type Result<T> = std::result::Result<T, Error>;
