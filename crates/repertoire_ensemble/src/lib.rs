//! # repertoire_ensemble
//!
//! Ensemble - Batch story generation for Repertoire.
//!
//! ## Name Origin
//!
//! An **ensemble** performs together: no single actor carries the show.
//! `repertoire_ensemble` walks a project's component directory and gives
//! every component in the cast its own story, one file at a time, so a
//! single misbehaving component never stops the rest of the run.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use repertoire_ensemble::generate_stories;
//!
//! let report = generate_stories(Path::new("libs/ui/src/lib")).unwrap();
//! println!(
//!     "{} written, {} skipped, {} failed",
//!     report.written.len(),
//!     report.skipped.len(),
//!     report.failures.len()
//! );
//! ```

pub mod driver;
pub mod error;
pub mod report;

// Re-exports for convenience
pub use driver::generate_stories;
pub use error::{EnsembleError, EnsembleResult};
pub use report::{BatchReport, FileFailure};
