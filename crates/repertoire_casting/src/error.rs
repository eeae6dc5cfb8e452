//! Error types for component inference.

/// Error type for component inference.
///
/// Only fatal conditions are errors. Unsupported props shapes and
/// unresolved props types degrade to an empty-properties descriptor
/// instead of failing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CastingError {
    /// Source text is not syntactically valid.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// No declaration with markup content exists in the file.
    #[error("Could not find any component in file {path}")]
    NoComponentFound { path: String },
}

/// Result type for component inference.
pub type CastingResult<T> = Result<T, CastingError>;
