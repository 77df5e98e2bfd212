use std::collections::HashSet;

use cf_header::OptionTables;
use serde_json::Value;

pub(super) struct GeneratorContext<'a> {
    pub(super) tables: &'a OptionTables,
    /// The top-level option being generated. Nested structs have no documentation anchors of
    /// their own, so their fields link to this option.
    pub(super) option_name: &'a str,
    /// Nested structs currently being expanded, to cut self-referencing types.
    pub(super) visiting_structs: HashSet<&'a str>,
}

impl<'a> GeneratorContext<'a> {
    pub(super) fn new(tables: &'a OptionTables, option_name: &'a str) -> Self {
        Self {
            tables,
            option_name,
            visiting_structs: HashSet::new(),
        }
    }
}

/// Adds `key` to a schema object. Non-object schemas are left untouched.
pub(super) fn annotate(schema: &mut Value, key: &str, value: impl Into<Value>) {
    if let Some(object) = schema.as_object_mut() {
        object.insert(key.to_string(), value.into());
    }
}
