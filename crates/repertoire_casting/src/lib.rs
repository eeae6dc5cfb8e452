//! # repertoire_casting
//!
//! Casting - Component and props inference for Repertoire.
//!
//! ## Name Origin
//!
//! **Casting** is the process of deciding who appears on stage. Similarly,
//! `repertoire_casting` inspects a React component source file and decides
//! which component will star in a generated story, and which props it can
//! be directed through.
//!
//! ## Concepts
//!
//! - **Primary component declaration**: the first top-level variable
//!   declaration whose initializer renders markup, treated as the file's
//!   sole component for generation purposes
//! - **Props type**: the named interface describing the component's
//!   caller-supplied attributes
//! - **Control**: the editable input kind inferred for each prop
//!   (text, number, boolean)
//!
//! ## Usage
//!
//! ```
//! use repertoire_casting::{infer_component, ControlKind};
//!
//! let source = r#"
//! import React from 'react';
//!
//! export interface ButtonProps {
//!   label: string;
//!   disabled: boolean;
//! }
//!
//! export const Button = (props: ButtonProps) => {
//!   return <button disabled={props.disabled}>{props.label}</button>;
//! };
//! "#;
//!
//! let descriptor = infer_component(source, "Button.tsx").unwrap();
//! assert_eq!(descriptor.exported_name, "Button");
//! assert_eq!(descriptor.properties[0].control, ControlKind::Text);
//! ```
//!
//! Inference is purely functional over the source text: no I/O, no shared
//! state, deterministic output.

pub mod descriptor;
pub mod error;
pub mod infer;

mod markup;

// Re-exports for convenience
pub use descriptor::{ComponentDescriptor, ControlKind, PrimitiveKind, PropertyDescriptor};
pub use error::{CastingError, CastingResult};
pub use infer::infer_component;
