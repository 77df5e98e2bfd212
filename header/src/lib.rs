//! Reads the option declarations of the clang-format headers (`Format.h`, `IncludeStyle.h`)
//! into plain tables of options, enums and nested structs.

pub mod model;
pub mod reader;
pub mod types;

mod comment;
mod error;
mod tables;

pub use error::Diagnostic;
pub use model::{Enum, EnumValue, NestedField, NestedStruct, StyleOption, DEPRECATED_TYPE};
pub use reader::{read_options, HeaderReader, ROOT_STRUCTS};
pub use tables::OptionTables;
pub use types::{Primitive, TypeName};
