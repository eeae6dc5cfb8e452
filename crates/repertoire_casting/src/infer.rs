//! OXC-based component inference.
//!
//! Parses one component source file and produces a [`ComponentDescriptor`]
//! describing its primary component and declared props:
//!
//! 1. Parse the source into an AST (hard error on any parse diagnostic)
//! 2. Locate the first top-level variable declaration whose initializer
//!    contains markup
//! 3. Narrow the initializer to the supported `(props: Name) => ...` shape
//! 4. Resolve the props interface by name and map its members to controls
//!
//! Only the first qualifying declaration is used even when several
//! markup-returning declarations exist in one file; later ones are
//! silently ignored (one component per file).

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    BindingPattern, Declaration, Expression, FormalParameters, PropertyKey, Statement,
    TSInterfaceDeclaration, TSSignature, TSType, TSTypeName, VariableDeclaration,
    VariableDeclarator,
};
use oxc_parser::Parser;
use oxc_span::SourceType;
use rustc_hash::FxHashMap;

use crate::descriptor::{ComponentDescriptor, PrimitiveKind, PropertyDescriptor};
use crate::error::{CastingError, CastingResult};
use crate::markup::contains_markup;

/// Infer the primary component of a source file.
///
/// `source_path` is used for source-type detection and diagnostic
/// messages only; the file is never read or written here.
///
/// # Errors
///
/// - [`CastingError::Parse`] when the source text is not syntactically
///   valid
/// - [`CastingError::NoComponentFound`] when no top-level declaration
///   contains markup
///
/// Unsupported props shapes and unresolved props types are not errors:
/// they produce a descriptor with no props type and an empty property
/// list.
pub fn infer_component(source_text: &str, source_path: &str) -> CastingResult<ComponentDescriptor> {
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(source_path).unwrap_or_else(|_| SourceType::tsx());

    let ret = Parser::new(&allocator, source_text, source_type).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let message: Vec<String> = ret.errors.iter().map(|e| e.to_string()).collect();
        return Err(CastingError::Parse {
            path: source_path.to_string(),
            message: message.join("; "),
        });
    }

    let program = ret.program;

    // First pass: index top-level interfaces by name so a props type
    // reference can be resolved regardless of declaration order
    let mut interfaces: FxHashMap<&str, &TSInterfaceDeclaration<'_>> = FxHashMap::default();
    for stmt in program.body.iter() {
        if let Some(iface) = interface_of(stmt) {
            interfaces.insert(iface.id.name.as_str(), iface);
        }
    }

    // Second pass: pick index 0 of the markup-containing declarations
    let declarator = program
        .body
        .iter()
        .find_map(component_declarator)
        .ok_or_else(|| CastingError::NoComponentFound {
            path: source_path.to_string(),
        })?;

    let BindingPattern::BindingIdentifier(id) = &declarator.id else {
        // component_declarator only yields identifier-bound declarators
        return Err(CastingError::NoComponentFound {
            path: source_path.to_string(),
        });
    };

    let props_type_name = declarator.init.as_ref().and_then(props_type_of);

    let properties = props_type_name
        .and_then(|name| interfaces.get(name))
        .map(|iface| collect_properties(iface))
        .unwrap_or_default();

    Ok(ComponentDescriptor {
        exported_name: id.name.as_str().into(),
        props_type_name: props_type_name.map(Into::into),
        properties,
    })
}

/// Top-level interface declaration of a statement, through `export` if
/// present.
fn interface_of<'a, 'b>(stmt: &'b Statement<'a>) -> Option<&'b TSInterfaceDeclaration<'a>> {
    match stmt {
        Statement::TSInterfaceDeclaration(iface) => Some(iface),
        Statement::ExportNamedDeclaration(export) => match &export.declaration {
            Some(Declaration::TSInterfaceDeclaration(iface)) => Some(iface),
            _ => None,
        },
        _ => None,
    }
}

/// First identifier-bound declarator of a top-level statement whose
/// initializer contains markup.
fn component_declarator<'a, 'b>(stmt: &'b Statement<'a>) -> Option<&'b VariableDeclarator<'a>> {
    let decl = match stmt {
        Statement::VariableDeclaration(decl) => decl,
        Statement::ExportNamedDeclaration(export) => match &export.declaration {
            Some(Declaration::VariableDeclaration(decl)) => decl,
            _ => return None,
        },
        _ => return None,
    };

    markup_declarator(decl)
}

fn markup_declarator<'a, 'b>(
    decl: &'b VariableDeclaration<'a>,
) -> Option<&'b VariableDeclarator<'a>> {
    decl.declarations.iter().find(|declarator| {
        matches!(declarator.id, BindingPattern::BindingIdentifier(_))
            && declarator
                .init
                .as_ref()
                .is_some_and(|init| contains_markup(init))
    })
}

/// Props type name of a component initializer.
///
/// Supported shape only: a function or arrow-function literal whose single
/// parameter is literally named `props` and annotated with a named type
/// reference. Everything else (no parameter, rest parameter, destructured
/// or differently-named parameter, inline object type, qualified name,
/// missing annotation) yields `None` rather than a guess.
fn props_type_of<'a, 'b>(init: &'b Expression<'a>) -> Option<&'b str> {
    let params = match init {
        Expression::ArrowFunctionExpression(arrow) => &arrow.params,
        Expression::FunctionExpression(func) => &func.params,
        _ => return None,
    };

    single_props_param(params)
}

fn single_props_param<'a, 'b>(params: &'b FormalParameters<'a>) -> Option<&'b str> {
    if params.items.len() != 1 || params.rest.is_some() {
        return None;
    }

    let param = &params.items[0];
    let BindingPattern::BindingIdentifier(id) = &param.pattern else {
        return None;
    };
    if id.name != "props" {
        return None;
    }

    let annotation = param.type_annotation.as_ref()?;
    match &annotation.type_annotation {
        TSType::TSTypeReference(reference) => match &reference.type_name {
            TSTypeName::IdentifierReference(name) => Some(name.name.as_str()),
            _ => None,
        },
        _ => None,
    }
}

/// Map interface members to property descriptors, preserving declaration
/// order.
///
/// Only named property signatures participate; call/index/method
/// signatures and computed or string-literal keys are skipped so every
/// descriptor stays bindable by name.
fn collect_properties(iface: &TSInterfaceDeclaration<'_>) -> Vec<PropertyDescriptor> {
    iface
        .body
        .body
        .iter()
        .filter_map(|member| {
            let TSSignature::TSPropertySignature(prop) = member else {
                return None;
            };
            let PropertyKey::StaticIdentifier(key) = &prop.key else {
                return None;
            };

            let kind = prop
                .type_annotation
                .as_ref()
                .map(|annotation| primitive_kind(&annotation.type_annotation))
                .unwrap_or(PrimitiveKind::Other);

            Some(PropertyDescriptor::new(key.name.as_str(), kind))
        })
        .collect()
}

/// Translate a parser type node into the domain enumeration.
#[inline]
fn primitive_kind(ts_type: &TSType<'_>) -> PrimitiveKind {
    match ts_type {
        TSType::TSStringKeyword(_) => PrimitiveKind::String,
        TSType::TSNumberKeyword(_) => PrimitiveKind::Number,
        TSType::TSBooleanKeyword(_) => PrimitiveKind::Boolean,
        _ => PrimitiveKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ControlKind;

    #[test]
    fn test_infer_component_with_props() {
        let descriptor = infer_component(
            r#"
import React from 'react';

export interface TestProps {
  name: string;
  age: number;
  displayAge: boolean;
}

export const Test = (props: TestProps) => {
  return (
    <div>
      <h1>Welcome to test component, {props.name}</h1>
    </div>
  );
};

export default Test;
"#,
            "test-ui-lib.tsx",
        )
        .unwrap();

        assert_eq!(descriptor.exported_name, "Test");
        assert_eq!(descriptor.props_type_name.as_deref(), Some("TestProps"));

        let props: Vec<_> = descriptor
            .properties
            .iter()
            .map(|p| (p.name.as_str(), p.control, p.default_value.as_str()))
            .collect();
        assert_eq!(
            props,
            vec![
                ("name", ControlKind::Text, "''"),
                ("age", ControlKind::Number, "0"),
                ("displayAge", ControlKind::Boolean, "false"),
            ]
        );
    }

    #[test]
    fn test_infer_component_without_parameter() {
        let descriptor = infer_component(
            "export const Banner = () => <header>hello</header>;",
            "Banner.tsx",
        )
        .unwrap();

        assert_eq!(descriptor.exported_name, "Banner");
        assert_eq!(descriptor.props_type_name, None);
        assert!(descriptor.properties.is_empty());
    }

    #[test]
    fn test_infer_component_destructured_parameter() {
        let descriptor = infer_component(
            r#"
interface CardProps {
  title: string;
}

const Card = ({ title }: CardProps) => <div>{title}</div>;
"#,
            "Card.tsx",
        )
        .unwrap();

        // Destructured parameter is a deliberate narrowing, not best-effort
        assert_eq!(descriptor.exported_name, "Card");
        assert_eq!(descriptor.props_type_name, None);
        assert!(descriptor.properties.is_empty());
    }

    #[test]
    fn test_infer_component_differently_named_parameter() {
        let descriptor = infer_component(
            r#"
interface CardProps {
  title: string;
}

const Card = (options: CardProps) => <div>{options.title}</div>;
"#,
            "Card.tsx",
        )
        .unwrap();

        assert_eq!(descriptor.props_type_name, None);
        assert!(descriptor.properties.is_empty());
    }

    #[test]
    fn test_infer_component_missing_annotation() {
        // The annotation-less parameter degrades to no props type
        // instead of failing
        let descriptor =
            infer_component("const Chip = (props) => <span />;", "Chip.jsx").unwrap();

        assert_eq!(descriptor.exported_name, "Chip");
        assert_eq!(descriptor.props_type_name, None);
        assert!(descriptor.properties.is_empty());
    }

    #[test]
    fn test_infer_component_unresolved_props_type() {
        let descriptor = infer_component(
            "export const Modal = (props: ExternalProps) => <div />;",
            "Modal.tsx",
        )
        .unwrap();

        assert_eq!(descriptor.exported_name, "Modal");
        assert_eq!(descriptor.props_type_name.as_deref(), Some("ExternalProps"));
        assert!(descriptor.properties.is_empty());
    }

    #[test]
    fn test_infer_no_component_found() {
        let err = infer_component(
            "export const helper = (value: number) => value * 2;",
            "helper.ts",
        )
        .unwrap_err();

        assert!(matches!(err, CastingError::NoComponentFound { .. }));
        assert!(err.to_string().contains("helper.ts"));
    }

    #[test]
    fn test_infer_parse_error() {
        let err = infer_component("const = <div>", "broken.tsx").unwrap_err();

        assert!(matches!(err, CastingError::Parse { .. }));
        assert!(err.to_string().contains("broken.tsx"));
    }

    #[test]
    fn test_first_match_wins() {
        let descriptor = infer_component(
            r#"
const plain = 42;
const First = () => <div>first</div>;
const Second = () => <div>second</div>;
"#,
            "pair.tsx",
        )
        .unwrap();

        assert_eq!(descriptor.exported_name, "First");
    }

    #[test]
    fn test_non_primitive_members_fall_back_to_unknown() {
        let descriptor = infer_component(
            r#"
interface WidgetProps {
  label: string;
  onClick: () => void;
  items: string[];
  size: 'sm' | 'lg';
}

const Widget = (props: WidgetProps) => <div>{props.label}</div>;
"#,
            "Widget.tsx",
        )
        .unwrap();

        let controls: Vec<_> = descriptor
            .properties
            .iter()
            .map(|p| (p.name.as_str(), p.control))
            .collect();
        assert_eq!(
            controls,
            vec![
                ("label", ControlKind::Text),
                ("onClick", ControlKind::Unknown),
                ("items", ControlKind::Unknown),
                ("size", ControlKind::Unknown),
            ]
        );

        // Unknown kinds still carry the empty text literal
        assert!(descriptor
            .properties
            .iter()
            .filter(|p| p.control == ControlKind::Unknown)
            .all(|p| p.default_value == "''"));
    }

    #[test]
    fn test_order_preserved_after_permutation() {
        let source = |body: &str| {
            format!(
                "interface P {{\n{body}\n}}\nconst Box = (props: P) => <div />;\n"
            )
        };

        let forward = infer_component(&source("a: string;\nb: number;\nc: boolean;"), "Box.tsx")
            .unwrap();
        let names: Vec<_> = forward.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);

        let permuted =
            infer_component(&source("c: boolean;\na: string;\nb: number;"), "Box.tsx").unwrap();
        let names: Vec<_> = permuted
            .properties
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_function_expression_component() {
        let descriptor = infer_component(
            r#"
interface RowProps {
  id: number;
}

const Row = function (props: RowProps) {
  return <tr data-id={props.id} />;
};
"#,
            "Row.tsx",
        )
        .unwrap();

        assert_eq!(descriptor.exported_name, "Row");
        assert_eq!(descriptor.props_type_name.as_deref(), Some("RowProps"));
        assert_eq!(descriptor.properties.len(), 1);
        assert_eq!(descriptor.properties[0].control, ControlKind::Number);
    }

    #[test]
    fn test_conditional_render_counts_as_markup() {
        let descriptor = infer_component(
            r#"
const Toggle = (props: ToggleProps) => {
  if (props.open) {
    return <div>open</div>;
  }
  return null;
};
"#,
            "Toggle.tsx",
        )
        .unwrap();

        assert_eq!(descriptor.exported_name, "Toggle");
    }

    #[test]
    fn test_interface_after_component_still_resolves() {
        let descriptor = infer_component(
            r#"
export const Late = (props: LateProps) => <em>{props.note}</em>;

export interface LateProps {
  note: string;
}
"#,
            "Late.tsx",
        )
        .unwrap();

        assert_eq!(descriptor.props_type_name.as_deref(), Some("LateProps"));
        assert_eq!(descriptor.properties.len(), 1);
    }

    #[test]
    fn test_skips_non_property_members() {
        let descriptor = infer_component(
            r#"
interface GridProps {
  rows: number;
  (query: string): void;
  'data-test': string;
}

const Grid = (props: GridProps) => <table />;
"#,
            "Grid.tsx",
        )
        .unwrap();

        let names: Vec<_> = descriptor
            .properties
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["rows"]);
    }
}
