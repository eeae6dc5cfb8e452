//! Descriptor types for inferred components.
//!
//! These are the value types handed to story generation: a component's
//! exported name plus an ordered list of its declared props, each carrying
//! an inferred control kind and a default editable literal.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Primitive kind of a prop's declared type.
///
/// Parser node kinds are translated into this domain enumeration
/// immediately after parsing; parser-internal kind codes never travel
/// further than the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// `string` keyword.
    String,
    /// `number` keyword.
    Number,
    /// `boolean` keyword.
    Boolean,
    /// Anything else: object types, unions, arrays, type references.
    Other,
}

/// Control kind inferred for a prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    /// Text input control.
    Text,
    /// Number input control.
    Number,
    /// Boolean toggle control.
    Boolean,
    /// Unrecognized prop type; edited as raw text.
    Unknown,
}

impl ControlKind {
    /// Default editable value, as a source literal.
    ///
    /// The literal is always syntactically valid for the kind. Unknown
    /// kinds resolve to the empty text literal, never an undefined value.
    #[inline]
    pub const fn default_literal(self) -> &'static str {
        match self {
            Self::Text | Self::Unknown => "''",
            Self::Number => "0",
            Self::Boolean => "false",
        }
    }
}

impl From<PrimitiveKind> for ControlKind {
    #[inline]
    fn from(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::String => Self::Text,
            PrimitiveKind::Number => Self::Number,
            PrimitiveKind::Boolean => Self::Boolean,
            PrimitiveKind::Other => Self::Unknown,
        }
    }
}

/// A single declared prop of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    /// Prop name, unique within its owning type.
    pub name: CompactString,
    /// Inferred control kind.
    pub control: ControlKind,
    /// Default value as a source literal matching the kind.
    pub default_value: CompactString,
}

impl PropertyDescriptor {
    /// Create a descriptor from a prop name and its primitive kind.
    ///
    /// The default value is derived from the kind, so the
    /// literal-matches-kind invariant holds by construction.
    #[inline]
    pub fn new(name: &str, kind: PrimitiveKind) -> Self {
        let control = ControlKind::from(kind);
        Self {
            name: CompactString::new(name),
            control,
            default_value: CompactString::const_new(control.default_literal()),
        }
    }
}

/// Inferred description of one component source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    /// Name of the primary component declaration.
    pub exported_name: CompactString,
    /// Name of the props interface, when the declaration matches the
    /// supported `(props: Name)` shape.
    pub props_type_name: Option<CompactString>,
    /// Declared props in source order. Empty (never absent) when no props
    /// type was found or resolved.
    pub properties: Vec<PropertyDescriptor>,
}

impl ComponentDescriptor {
    /// Create a descriptor with no resolved props.
    #[inline]
    pub fn bare(exported_name: &str) -> Self {
        Self {
            exported_name: CompactString::new(exported_name),
            props_type_name: None,
            properties: Vec::new(),
        }
    }

    /// Whether any props were resolved.
    #[inline]
    pub fn has_props(&self) -> bool {
        !self.properties.is_empty()
    }
}
