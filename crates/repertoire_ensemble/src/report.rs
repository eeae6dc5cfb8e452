//! Batch report types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A per-file failure recorded during a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFailure {
    /// Component file that failed.
    pub path: PathBuf,
    /// Error message.
    pub message: String,
}

/// Result of a batch story generation run.
///
/// One file's failure never influences another file's outcome: every
/// eligible file lands in exactly one of the three buckets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    /// Story files created by this run.
    pub written: Vec<PathBuf>,
    /// Story files that already existed and were left untouched.
    pub skipped: Vec<PathBuf>,
    /// Component files whose generation failed.
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    /// Whether every eligible file was processed without failure.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of eligible component files seen by the run.
    #[inline]
    pub fn file_count(&self) -> usize {
        self.written.len() + self.skipped.len() + self.failures.len()
    }
}
