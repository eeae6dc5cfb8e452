//! Error types for batch story generation.

use repertoire_casting::CastingError;
use repertoire_script::ScriptError;

/// Error type for batch story generation.
#[derive(Debug, thiserror::Error)]
pub enum EnsembleError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Component inference failed.
    #[error("{0}")]
    Casting(#[from] CastingError),

    /// Story write failed.
    #[error("{0}")]
    Script(#[from] ScriptError),

    /// Directory walk error.
    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Result type for batch story generation.
pub type EnsembleResult<T> = Result<T, EnsembleError>;
