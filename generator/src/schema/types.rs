use cf_header::{EnumValue, NestedField, NestedStruct, Primitive, TypeName};
use cf_markup::{documentation_anchor, summary, to_html};
use log::warn;
use serde_json::{json, Map, Value};

use super::common::{annotate, GeneratorContext};
use super::HTML_DESCRIPTION;

/// Maps a declared C++ type to its schema. Unknown types are logged and mapped to a
/// placeholder that makes the problem visible in the output.
pub(super) fn type_schema(context: &mut GeneratorContext, type_name: &str) -> Value {
    match TypeName::classify(type_name) {
        TypeName::Primitive(Primitive::Number) => json!({ "type": "number" }),
        TypeName::Primitive(Primitive::Boolean) => json!({ "type": "boolean" }),
        TypeName::Primitive(Primitive::String) => json!({ "type": "string" }),
        TypeName::Deprecated => json!({}),
        TypeName::Vector(inner) => json!({
            "type": "array",
            "items": type_schema(context, inner),
        }),
        TypeName::Optional(inner) => type_schema(context, inner),
        TypeName::Named(name) => {
            let tables = context.tables;
            if let Some(nested) = tables.nested_structs.get(name) {
                struct_schema(context, nested)
            } else if let Some(declared) = tables.enums.get(name) {
                enum_schema(&declared.values)
            } else {
                warn!("Unknown type {name} in option {}", context.option_name);
                unknown_type(name)
            }
        }
    }
}

fn unknown_type(name: &str) -> Value {
    json!({ "type": format!("???({name})") })
}

pub(super) fn enum_schema(values: &[EnumValue]) -> Value {
    let names: Vec<&str> = values.iter().map(EnumValue::unprefixed_name).collect();
    let metadata: Map<String, Value> = values
        .iter()
        .map(|value| {
            (
                value.unprefixed_name().to_string(),
                json!({ "description": summary(&value.comment) }),
            )
        })
        .collect();
    json!({
        "type": "string",
        "enum": names,
        "x-intellij-enum-metadata": metadata,
    })
}

fn struct_schema<'a>(context: &mut GeneratorContext<'a>, nested: &'a NestedStruct) -> Value {
    if !context.visiting_structs.insert(&nested.name) {
        warn!("Nested struct {} contains itself", nested.name);
        return unknown_type(&nested.name);
    }

    let mut fields: Vec<&NestedField> = nested.fields.iter().collect();
    fields.sort_by(|a, b| a.name().cmp(b.name()));

    let mut properties = Map::new();
    for field in fields {
        let mut property = match field {
            NestedField::Typed { type_name, .. } => type_schema(context, type_name),
            NestedField::Enum { values, .. } => enum_schema(values),
        };
        let description = format!(
            "{}<p>{}",
            to_html(field.comment()),
            documentation_anchor(context.option_name)
        );
        annotate(&mut property, HTML_DESCRIPTION, description);
        properties.insert(field.name().to_string(), property);
    }

    context.visiting_structs.remove(nested.name.as_str());
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": properties,
    })
}
