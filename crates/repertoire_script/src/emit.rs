//! Story file write mechanics.
//!
//! Writing is idempotent-by-skip: an existing story file is never
//! overwritten, so regenerating a project leaves hand-edited stories
//! untouched.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codegen::StoryOutput;

/// Error type for story writing.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for story writing.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Outcome of a story write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The story file was created.
    Written(PathBuf),
    /// A file already existed at the destination; nothing was touched.
    Skipped(PathBuf),
}

impl WriteOutcome {
    /// Destination path of the story file.
    #[inline]
    pub fn path(&self) -> &Path {
        match self {
            Self::Written(path) | Self::Skipped(path) => path,
        }
    }
}

/// Write a rendered story next to its component.
///
/// `directory` is the component's directory; the destination is
/// `directory/<filename>`. If a file already exists there the write is
/// skipped and its content left as-is.
pub fn write_story(directory: &Path, output: &StoryOutput) -> ScriptResult<WriteOutcome> {
    let destination = directory.join(&output.filename);

    if destination.exists() {
        return Ok(WriteOutcome::Skipped(destination));
    }

    fs::write(&destination, &output.code)?;
    Ok(WriteOutcome::Written(destination))
}
