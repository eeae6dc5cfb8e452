//! Story file code generation.
//!
//! Renders a knob-style story file from a [`ComponentDescriptor`]: a
//! default export pairing the component with its title, and one `primary`
//! example render binding a control call per prop.

use repertoire_casting::{ComponentDescriptor, ControlKind};
use serde::{Deserialize, Serialize};

/// Output of story generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryOutput {
    /// Generated story code.
    pub code: String,
    /// Suggested filename (e.g., "button.stories.tsx").
    pub filename: String,
}

/// Render a story file for an inferred component.
///
/// `component_file_stem` is the component's filename without extension;
/// it names both the import path (`./<stem>`) and the story filename
/// (`<stem>.stories.tsx`).
pub fn render_story(descriptor: &ComponentDescriptor, component_file_stem: &str) -> StoryOutput {
    let mut output = String::new();

    output.push_str(&generate_imports(descriptor, component_file_stem));
    output.push('\n');

    output.push_str(&generate_meta(descriptor));
    output.push('\n');

    output.push_str(&generate_example(descriptor));

    StoryOutput {
        code: output,
        filename: format!("{}.stories.tsx", component_file_stem),
    }
}

/// Generate import statements.
fn generate_imports(descriptor: &ComponentDescriptor, component_file_stem: &str) -> String {
    let mut imports = String::new();

    // Knobs import lists each used control once, in first-use order
    if descriptor.has_props() {
        imports.push_str(&format!(
            "import {{ {} }} from '@storybook/addon-knobs';\n",
            used_knobs(descriptor).join(", ")
        ));
    }

    imports.push_str("import React from 'react';\n");

    match &descriptor.props_type_name {
        Some(props_type_name) => imports.push_str(&format!(
            "import {{ {}, {} }} from './{}';\n",
            descriptor.exported_name, props_type_name, component_file_stem
        )),
        None => imports.push_str(&format!(
            "import {{ {} }} from './{}';\n",
            descriptor.exported_name, component_file_stem
        )),
    }

    imports
}

/// Generate the meta (default export) pairing component and title.
fn generate_meta(descriptor: &ComponentDescriptor) -> String {
    let mut meta = String::new();

    meta.push_str("export default {\n");
    meta.push_str(&format!("  component: {},\n", descriptor.exported_name));
    meta.push_str(&format!("  title: '{}'\n", descriptor.exported_name));
    meta.push_str("};\n");

    meta
}

/// Generate the `primary` example render.
fn generate_example(descriptor: &ComponentDescriptor) -> String {
    let mut example = String::new();

    example.push_str("export const primary = () => {\n");

    if let Some(props_type_name) = &descriptor.props_type_name {
        if descriptor.has_props() {
            example.push_str(&format!("  const props: {} = {{\n", props_type_name));
            let bindings: Vec<String> = descriptor
                .properties
                .iter()
                .map(|prop| {
                    format!(
                        "    {}: {}('{}', {})",
                        prop.name,
                        knob_ident(prop.control),
                        prop.name,
                        prop.default_value
                    )
                })
                .collect();
            example.push_str(&bindings.join(",\n"));
            example.push_str("\n  };\n");
        } else {
            example.push_str(&format!("  const props: {} = {{}};\n", props_type_name));
        }
        example.push('\n');
    }

    example.push_str(&format!("  return <{}{} />;\n", descriptor.exported_name, attributes(descriptor)));
    example.push_str("};\n");

    example
}

/// Attribute bindings passing every prop value into the example instance.
fn attributes(descriptor: &ComponentDescriptor) -> String {
    descriptor
        .properties
        .iter()
        .map(|prop| format!(" {}={{props.{}}}", prop.name, prop.name))
        .collect()
}

/// Used knob identifiers, deduplicated in first-use order.
fn used_knobs(descriptor: &ComponentDescriptor) -> Vec<&'static str> {
    let mut knobs = Vec::new();
    for prop in &descriptor.properties {
        let ident = knob_ident(prop.control);
        if !knobs.contains(&ident) {
            knobs.push(ident);
        }
    }
    knobs
}

/// Knob function generating a control's default value.
///
/// Unknown kinds are edited as text so the generated call is always
/// well-formed.
#[inline]
fn knob_ident(control: ControlKind) -> &'static str {
    match control {
        ControlKind::Text | ControlKind::Unknown => "text",
        ControlKind::Number => "number",
        ControlKind::Boolean => "boolean",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repertoire_casting::infer_component;

    fn test_component() -> ComponentDescriptor {
        infer_component(
            r#"
import React from 'react';

export interface TestProps {
  name: string;
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
        .unwrap()
    }

    #[test]
    fn test_render_story_with_props() {
        let story = render_story(&test_component(), "test-ui-lib");

        assert_eq!(story.filename, "test-ui-lib.stories.tsx");
        insta::assert_snapshot!(story.code, @r"
import { text, boolean } from '@storybook/addon-knobs';
import React from 'react';
import { Test, TestProps } from './test-ui-lib';

export default {
  component: Test,
  title: 'Test'
};

export const primary = () => {
  const props: TestProps = {
    name: text('name', ''),
    displayAge: boolean('displayAge', false)
  };

  return <Test name={props.name} displayAge={props.displayAge} />;
};
");
    }

    #[test]
    fn test_render_story_without_props_type() {
        let descriptor =
            infer_component("export const Banner = () => <header />;", "banner.tsx").unwrap();
        let story = render_story(&descriptor, "banner");

        assert_eq!(story.filename, "banner.stories.tsx");
        insta::assert_snapshot!(story.code, @r"
import React from 'react';
import { Banner } from './banner';

export default {
  component: Banner,
  title: 'Banner'
};

export const primary = () => {
  return <Banner />;
};
");
    }

    #[test]
    fn test_render_story_unresolved_props_type() {
        let descriptor = infer_component(
            "export const Modal = (props: ExternalProps) => <div />;",
            "modal.tsx",
        )
        .unwrap();
        let story = render_story(&descriptor, "modal");

        // Props type survives into the import and an empty props binding
        assert!(story
            .code
            .contains("import { Modal, ExternalProps } from './modal';"));
        assert!(story.code.contains("const props: ExternalProps = {};"));
        assert!(story.code.contains("return <Modal />;"));
        assert!(!story.code.contains("@storybook/addon-knobs"));
    }

    #[test]
    fn test_knobs_import_deduplicated() {
        let descriptor = infer_component(
            r#"
interface PairProps {
  first: string;
  second: string;
  count: number;
}

const Pair = (props: PairProps) => <div />;
"#,
            "pair.tsx",
        )
        .unwrap();
        let story = render_story(&descriptor, "pair");

        assert!(story
            .code
            .contains("import { text, number } from '@storybook/addon-knobs';"));
    }

    #[test]
    fn test_unknown_kind_renders_as_text_control() {
        let descriptor = infer_component(
            r#"
interface ChartProps {
  series: number[];
}

const Chart = (props: ChartProps) => <svg />;
"#,
            "chart.tsx",
        )
        .unwrap();
        let story = render_story(&descriptor, "chart");

        assert!(story.code.contains("series: text('series', '')"));
        assert!(story
            .code
            .contains("import { text } from '@storybook/addon-knobs';"));
    }
}
