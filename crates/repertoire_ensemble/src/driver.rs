//! Batch driver: walk a component directory and generate a story per
//! component file.

use std::path::Path;

use repertoire_casting::infer_component;
use repertoire_script::{render_story, write_story, WriteOutcome};

use crate::error::{EnsembleError, EnsembleResult};
use crate::report::{BatchReport, FileFailure};

/// Generate stories for every eligible component file under
/// `components_dir`.
///
/// Eligible files match the component naming convention: `*.tsx`,
/// excluding `*.spec.tsx` test files and `*.stories.tsx` output of
/// earlier runs. Hidden directories and `node_modules` are never
/// descended into. Files are visited in sorted order.
///
/// Per-file failures are collected into the report rather than aborting
/// the batch; only walk-level errors (an unreadable directory) are
/// fatal.
pub fn generate_stories(components_dir: &Path) -> EnsembleResult<BatchReport> {
    let mut report = BatchReport::default();

    for entry in walkdir::WalkDir::new(components_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Don't filter the root directory itself
            if e.path() == components_dir {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !name.starts_with('.') && name != "node_modules"
        })
    {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || !is_component_file(path) {
            continue;
        }

        match generate_story_for(path) {
            Ok(WriteOutcome::Written(destination)) => {
                tracing::debug!(component = %path.display(), story = %destination.display(), "story written");
                report.written.push(destination);
            }
            Ok(WriteOutcome::Skipped(destination)) => {
                tracing::debug!(story = %destination.display(), "story exists, skipped");
                report.skipped.push(destination);
            }
            Err(error) => {
                tracing::warn!(component = %path.display(), %error, "story generation failed");
                report.failures.push(FileFailure {
                    path: path.to_path_buf(),
                    message: error.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        failures = report.failures.len(),
        "batch story generation finished"
    );

    Ok(report)
}

/// Whether a path matches the component file-naming convention.
fn is_component_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    name.ends_with(".tsx") && !name.ends_with(".spec.tsx") && !name.ends_with(".stories.tsx")
}

/// Run inference, rendering, and the skip-if-exists write for one
/// component file.
fn generate_story_for(path: &Path) -> Result<WriteOutcome, EnsembleError> {
    let source = std::fs::read_to_string(path)?;
    let descriptor = infer_component(&source, &path.to_string_lossy())?;

    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let stem = file_name.strip_suffix(".tsx").unwrap_or(file_name);

    let story = render_story(&descriptor, stem);
    let directory = path.parent().unwrap_or_else(|| Path::new("."));

    Ok(write_story(directory, &story)?)
}
