use crate::model::DEPRECATED_TYPE;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Primitive {
    Number,
    Boolean,
    String,
}

/// The shape of a declared C++ type, as far as the schema is concerned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypeName<'a> {
    Primitive(Primitive),
    /// A commented-out field; its real type is unknown.
    Deprecated,
    Vector(&'a str),
    Optional(&'a str),
    /// Anything else, expected to be an enum or nested struct.
    Named(&'a str),
}

impl<'a> TypeName<'a> {
    pub fn classify(type_name: &'a str) -> Self {
        let type_name = type_name.trim();
        match type_name {
            "int" | "unsigned" | "unsigned int" | "int8_t" | "int16_t" | "int32_t" | "int64_t"
            | "uint8_t" | "uint16_t" | "uint32_t" | "uint64_t" => Self::Primitive(Primitive::Number),
            "bool" => Self::Primitive(Primitive::Boolean),
            "std::string" => Self::Primitive(Primitive::String),
            DEPRECATED_TYPE => Self::Deprecated,
            _ => {
                if let Some(inner) = unwrap_template(type_name, "std::vector") {
                    Self::Vector(inner)
                } else if let Some(inner) = unwrap_template(type_name, "std::optional") {
                    Self::Optional(inner)
                } else {
                    Self::Named(type_name)
                }
            }
        }
    }
}

fn unwrap_template<'a>(type_name: &'a str, template: &str) -> Option<&'a str> {
    let inner = type_name
        .strip_prefix(template)?
        .trim_start()
        .strip_prefix('<')?
        .strip_suffix('>')?
        .trim();
    (!inner.is_empty()).then_some(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_primitives() {
        assert_eq!(
            TypeName::classify("unsigned"),
            TypeName::Primitive(Primitive::Number)
        );
        assert_eq!(
            TypeName::classify("int8_t"),
            TypeName::Primitive(Primitive::Number)
        );
        assert_eq!(
            TypeName::classify("bool"),
            TypeName::Primitive(Primitive::Boolean)
        );
        assert_eq!(
            TypeName::classify("std::string"),
            TypeName::Primitive(Primitive::String)
        );
        assert_eq!(TypeName::classify("deprecated"), TypeName::Deprecated);
    }

    #[test]
    fn unwraps_templates() {
        assert_eq!(
            TypeName::classify("std::vector<std::string>"),
            TypeName::Vector("std::string")
        );
        assert_eq!(
            TypeName::classify("std::optional<unsigned>"),
            TypeName::Optional("unsigned")
        );
        assert_eq!(
            TypeName::classify("std::vector<std::optional<int>>"),
            TypeName::Vector("std::optional<int>")
        );
    }

    #[test]
    fn everything_else_is_named() {
        assert_eq!(
            TypeName::classify("BraceWrappingFlags"),
            TypeName::Named("BraceWrappingFlags")
        );
        assert_eq!(TypeName::classify("std::vector<>"), TypeName::Named("std::vector<>"));
        assert_eq!(TypeName::classify("std::map<int"), TypeName::Named("std::map<int"));
    }
}
