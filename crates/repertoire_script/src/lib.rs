//! # repertoire_script
//!
//! Script - Story file generation for Repertoire.
//!
//! ## Name Origin
//!
//! A **script** is the text a company performs from. `repertoire_script`
//! writes the lines: given an inferred component descriptor it renders a
//! story file pairing the component with an example render, one editable
//! control per prop, and places it next to the component source.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use repertoire_casting::infer_component;
//! use repertoire_script::{render_story, write_story};
//!
//! let source = std::fs::read_to_string("src/lib/button.tsx").unwrap();
//! let descriptor = infer_component(&source, "src/lib/button.tsx").unwrap();
//!
//! let story = render_story(&descriptor, "button");
//! write_story(Path::new("src/lib"), &story).unwrap();
//! ```
//!
//! Generation is idempotent-by-skip: an existing story file is never
//! overwritten.

pub mod codegen;
pub mod emit;

// Re-exports for convenience
pub use codegen::{render_story, StoryOutput};
pub use emit::{write_story, ScriptError, ScriptResult, WriteOutcome};
