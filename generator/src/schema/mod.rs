//! Generation of the JSON Schema for `.clang-format` files.
//!
//! The schema targets JSON Schema draft 2020-12 and carries the IntelliJ extensions
//! (`x-intellij-html-description`, `x-intellij-enum-metadata`) used for documentation popups and
//! completion (https://www.jetbrains.com/help/idea/json.html#ws_json_show_doc_in_html).

mod common;
mod style;
mod types;

use cf_header::{OptionTables, StyleOption};
use cf_markup::{documentation_anchor, to_html, to_plain_text, PARAGRAPH_BEGIN};
use serde_json::{json, Map, Value};

use common::{annotate, GeneratorContext};

const SCHEMA_DRAFT: &str = "https://json-schema.org/draft/2020-12/schema";
const TITLE: &str = "Clang Format Style Schema";
const HTML_DESCRIPTION: &str = "x-intellij-html-description";
const DEPRECATED_MARKER: &str = "**deprecated**";

fn option_schema(tables: &OptionTables, option: &StyleOption) -> Value {
    let mut context = GeneratorContext::new(tables, &option.name);
    let mut schema = types::type_schema(&mut context, &option.type_name);

    let mut documentation = documentation_anchor(&option.name);
    documentation.push_str(PARAGRAPH_BEGIN);
    documentation.push_str(&to_html(&option.comment));
    if let Some(nested) = option
        .nested_struct_ref
        .as_ref()
        .and_then(|name| tables.nested_structs.get(name))
    {
        documentation.push_str(PARAGRAPH_BEGIN);
        documentation.push_str(&to_html(&nested.comment));
    }
    if let Some(version) = &option.version {
        documentation.push_str(PARAGRAPH_BEGIN);
        documentation.push_str(&format!("From clang-format {version}"));
    }
    if option.enum_ref.is_some() {
        documentation.push_str(PARAGRAPH_BEGIN);
        documentation.push_str("Invoke completion to see all options");
    }
    annotate(&mut schema, HTML_DESCRIPTION, documentation);

    if option.is_deprecated_declaration() {
        annotate(&mut schema, "deprecated", true);
        annotate(
            &mut schema,
            "deprecationMessage",
            to_plain_text(&option.comment),
        );
    }
    if option.comment.contains(DEPRECATED_MARKER) {
        annotate(&mut schema, "deprecated", true);
        annotate(
            &mut schema,
            "deprecationMessage",
            "Check the documentation for more information.",
        );
    }

    schema
}

/// Builds the schema with one property per option (sorted by name) after the predefined
/// `BasedOnStyle` property.
pub fn generate_schema(tables: &OptionTables) -> Value {
    let mut options: Vec<&StyleOption> = tables.options.iter().collect();
    options.sort_by(|a, b| a.name.cmp(&b.name));

    let mut properties = Map::new();
    properties.insert("BasedOnStyle".to_string(), style::based_on_style());
    for option in options {
        properties.insert(option.name.clone(), option_schema(tables, option));
    }

    json!({
        "$schema": SCHEMA_DRAFT,
        "title": TITLE,
        "type": "object",
        "additionalProperties": false,
        "properties": properties,
    })
}

/// Serializes a schema the way it is written to disk: two-space indentation and a final newline.
pub fn to_json_string(schema: &Value) -> Result<String, serde_json::Error> {
    let mut text = serde_json::to_string_pretty(schema)?;
    text.push('\n');
    Ok(text)
}
