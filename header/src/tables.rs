use std::collections::BTreeMap;

use crate::model::{Enum, NestedStruct, StyleOption};
use crate::types::TypeName;
use crate::Diagnostic;

/// Everything read from one or more headers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionTables {
    /// Options in declaration order (or name order after [`sort_options()`](Self::sort_options)).
    pub options: Vec<StyleOption>,
    pub enums: BTreeMap<String, Enum>,
    pub nested_structs: BTreeMap<String, NestedStruct>,
}

impl OptionTables {
    /// Appends the options of `other`. Enums and nested structs of `other` replace those with
    /// the same name.
    pub fn merge(&mut self, other: OptionTables) {
        self.options.extend(other.options);
        self.enums.extend(other.enums);
        self.nested_structs.extend(other.nested_structs);
    }

    /// Sorts the options by name, keeping declaration order among equal names.
    pub fn sort_options(&mut self) {
        self.options.sort_by(|a, b| a.name.cmp(&b.name));
    }

    pub fn option(&self, name: &str) -> Option<&StyleOption> {
        self.options.iter().find(|option| option.name == name)
    }

    /// Links every option to the enum or nested struct its type names. Returns a diagnostic for
    /// each option whose type cannot be mapped; the schema mapping logs the type itself.
    pub fn resolve_references(&mut self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for i in 0..self.options.len() {
            let type_name = self.options[i].type_name.clone();
            if let TypeName::Named(name) = TypeName::classify(&type_name) {
                if self.enums.contains_key(name) {
                    self.options[i].enum_ref = Some(name.to_string());
                } else if self.nested_structs.contains_key(name) {
                    self.options[i].nested_struct_ref = Some(name.to_string());
                }
            }
            if !self.is_known_type(&type_name) {
                diagnostics.push(Diagnostic::UnknownType {
                    option: self.options[i].name.clone(),
                    type_name,
                });
            }
        }
        diagnostics
    }

    pub fn is_known_type(&self, type_name: &str) -> bool {
        match TypeName::classify(type_name) {
            TypeName::Primitive(_) | TypeName::Deprecated => true,
            TypeName::Vector(inner) | TypeName::Optional(inner) => self.is_known_type(inner),
            TypeName::Named(name) => {
                self.enums.contains_key(name) || self.nested_structs.contains_key(name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(name: &str, type_name: &str) -> StyleOption {
        StyleOption::new(name, type_name, String::new(), Some("3.7".into()))
    }

    fn tables() -> OptionTables {
        let mut tables = OptionTables::default();
        tables.options = vec![
            option("Standard", "LanguageStandard"),
            option("BraceWrapping", "BraceWrappingFlags"),
            option("ColumnLimit", "unsigned"),
            option("IncludeCategories", "std::vector<IncludeCategory>"),
        ];
        tables.enums.insert(
            "LanguageStandard".into(),
            Enum::new("LanguageStandard", String::new()),
        );
        tables.nested_structs.insert(
            "BraceWrappingFlags".into(),
            NestedStruct::new("BraceWrappingFlags", String::new()),
        );
        tables
    }

    #[test]
    fn resolves_enum_and_struct_references() {
        let mut tables = tables();
        let diagnostics = tables.resolve_references();

        let standard = tables.option("Standard").unwrap();
        assert_eq!(standard.enum_ref.as_deref(), Some("LanguageStandard"));
        assert_eq!(standard.nested_struct_ref, None);
        let wrapping = tables.option("BraceWrapping").unwrap();
        assert_eq!(
            wrapping.nested_struct_ref.as_deref(),
            Some("BraceWrappingFlags")
        );
        assert_eq!(tables.option("ColumnLimit").unwrap().enum_ref, None);

        assert_eq!(
            diagnostics,
            vec![Diagnostic::UnknownType {
                option: "IncludeCategories".into(),
                type_name: "std::vector<IncludeCategory>".into(),
            }]
        );
    }

    #[test]
    fn merged_tables_resolve_across_headers() {
        let mut format = tables();
        let mut include = OptionTables::default();
        include.options.push(option("IncludeBlocks", "IncludeBlocksStyle"));
        include.enums.insert(
            "IncludeBlocksStyle".into(),
            Enum::new("IncludeBlocksStyle", String::new()),
        );
        include.nested_structs.insert(
            "IncludeCategory".into(),
            NestedStruct::new("IncludeCategory", String::new()),
        );

        format.merge(include);
        format.sort_options();

        let names: Vec<_> = format.options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "BraceWrapping",
                "ColumnLimit",
                "IncludeBlocks",
                "IncludeCategories",
                "Standard"
            ]
        );
        assert!(format.resolve_references().is_empty());
    }
}
