use thiserror::Error;

/// A non-fatal problem found while reading a header. Reading always continues after one of
/// these; the affected declaration is skipped or kept with partial information.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("line {line}: `\\code` in another `\\code`: {text:?}")]
    NestedCodeBlock { line: usize, text: String },
    #[error("line {line}: no `\\code` before `\\endcode`: {text:?}")]
    UnmatchedEndCode { line: usize, text: String },
    #[error("line {line}: code block should be indented: {text:?}")]
    UnindentedCodeBlock { line: usize, text: String },
    #[error("line {line}: missing version for {field}")]
    MissingVersion { line: usize, field: String },
    #[error("line {line}: expected comment, field, enum or struct, found {text:?}")]
    UnexpectedLine { line: usize, text: String },
    #[error("line {line}: malformed field declaration {text:?}")]
    MalformedField { line: usize, text: String },
    #[error("line {line}: malformed block opener {text:?}")]
    MalformedBlock { line: usize, text: String },
    #[error("no option struct found")]
    MissingOptionStruct,
    #[error("line {line}: input ended before the option struct was closed")]
    Unfinished { line: usize },
    #[error("unknown type {type_name:?} of option {option}")]
    UnknownType { option: String, type_name: String },
}
