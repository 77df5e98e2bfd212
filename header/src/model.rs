/// The declared type of fields that are commented out in the header.
pub const DEPRECATED_TYPE: &str = "deprecated";

/// A top-level configuration option, i.e. a documented field of one of the root structs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleOption {
    pub name: String,
    /// The C++ type as written in the declaration, e.g. `std::vector<std::string>`.
    pub type_name: String,
    pub comment: String,
    /// Set by [`OptionTables::resolve_references`](crate::OptionTables::resolve_references)
    /// when `type_name` names a known enum.
    pub enum_ref: Option<String>,
    /// Set by [`OptionTables::resolve_references`](crate::OptionTables::resolve_references)
    /// when `type_name` names a known nested struct.
    pub nested_struct_ref: Option<String>,
    pub version: Option<String>,
}

impl StyleOption {
    pub fn new(name: &str, type_name: &str, comment: String, version: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            comment,
            enum_ref: None,
            nested_struct_ref: None,
            version,
        }
    }

    pub fn is_deprecated_declaration(&self) -> bool {
        self.type_name == DEPRECATED_TYPE
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumValue {
    /// The C++ enumerator, e.g. `SFS_None`.
    pub name: String,
    pub comment: String,
    /// The spelling used in configuration files. Taken from a trailing `// ...` on the
    /// enumerator line, otherwise the enumerator itself.
    pub config: String,
}

impl EnumValue {
    /// The enumerator without its `Prefix_`, e.g. `None` for `SFS_None`.
    pub fn unprefixed_name(&self) -> &str {
        match self.name.split_once('_') {
            Some((_, rest)) if !rest.is_empty() => rest,
            _ => &self.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enum {
    pub name: String,
    pub comment: String,
    pub values: Vec<EnumValue>,
}

impl Enum {
    pub fn new(name: &str, comment: String) -> Self {
        Self {
            name: name.to_string(),
            comment,
            values: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NestedField {
    Typed {
        type_name: String,
        name: String,
        comment: String,
        version: Option<String>,
    },
    /// A field whose type is an enum that was already declared when the field was read.
    Enum {
        name: String,
        type_name: String,
        comment: String,
        values: Vec<EnumValue>,
    },
}

impl NestedField {
    pub fn name(&self) -> &str {
        match self {
            Self::Typed { name, .. } | Self::Enum { name, .. } => name,
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            Self::Typed { type_name, .. } | Self::Enum { type_name, .. } => type_name,
        }
    }

    pub fn comment(&self) -> &str {
        match self {
            Self::Typed { comment, .. } | Self::Enum { comment, .. } => comment,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NestedStruct {
    pub name: String,
    pub comment: String,
    pub fields: Vec<NestedField>,
}

impl NestedStruct {
    pub fn new(name: &str, comment: String) -> Self {
        Self {
            name: name.to_string(),
            comment,
            fields: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(name: &str) -> EnumValue {
        EnumValue {
            name: name.into(),
            comment: String::new(),
            config: name.into(),
        }
    }

    #[test]
    fn strips_enumerator_prefix() {
        assert_eq!(value("SFS_None").unprefixed_name(), "None");
        assert_eq!(value("RCPS_WithPreceding").unprefixed_name(), "WithPreceding");
    }

    #[test]
    fn keeps_unprefixed_enumerators() {
        assert_eq!(value("Always").unprefixed_name(), "Always");
        assert_eq!(value("Trailing_").unprefixed_name(), "Trailing_");
    }
}
