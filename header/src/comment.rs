//! Conversion of `///` documentation lines into the restricted markup understood by
//! `cf-markup`: Doxygen blocks (`\code`, `\warning`, `\note`) become reST-style directives,
//! everything else keeps its text without the comment marker.

use lazy_static::lazy_static;
use regex::Regex;

use crate::Diagnostic;

lazy_static! {
    static ref CODE: Regex = Regex::new(r"^/// (?P<indent> +)?\\code(\{.(?P<lang>\w+)\})?$").unwrap();
    static ref END_CODE: Regex = Regex::new(r"^/// +\\endcode$").unwrap();
    static ref WARNING: Regex = Regex::new(r"^/// \\warning$").unwrap();
    static ref END_WARNING: Regex = Regex::new(r"^/// +\\endwarning$").unwrap();
    static ref NOTE: Regex = Regex::new(r"^/// \\note$").unwrap();
    static ref END_NOTE: Regex = Regex::new(r"^/// +\\endnote$").unwrap();
}

const DEFAULT_CODE_LANGUAGE: &str = "c++";

#[derive(Debug, Default)]
pub(crate) struct CommentCleaner {
    in_code_block: bool,
    code_indent: usize,
}

impl CommentCleaner {
    /// Cleans one trimmed line starting with `///`. The result always ends with a newline
    /// unless the line only closes a block.
    pub(crate) fn clean(
        &mut self,
        line: &str,
        lineno: usize,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> String {
        if let Some(captures) = CODE.captures(line) {
            if self.in_code_block {
                diagnostics.push(Diagnostic::NestedCodeBlock {
                    line: lineno,
                    text: line.to_string(),
                });
            }
            self.in_code_block = true;
            let indent = captures.name("indent").map_or("", |m| m.as_str());
            self.code_indent = indent.len();
            let lang = captures
                .name("lang")
                .map_or(DEFAULT_CODE_LANGUAGE, |m| m.as_str());
            return format!("\n{indent}.. code-block:: {lang}\n\n");
        }

        if END_CODE.is_match(line) {
            if !self.in_code_block {
                diagnostics.push(Diagnostic::UnmatchedEndCode {
                    line: lineno,
                    text: line.to_string(),
                });
            }
            self.in_code_block = false;
            return String::new();
        }

        if self.in_code_block && line != "///" {
            let required = format!("///  {}", " ".repeat(self.code_indent));
            if !line.starts_with(&required) {
                diagnostics.push(Diagnostic::UnindentedCodeBlock {
                    line: lineno,
                    text: line.to_string(),
                });
            }
        }

        if WARNING.is_match(line) {
            return "\n.. warning::\n\n".to_string();
        }
        if NOTE.is_match(line) {
            return "\n.. note::\n\n".to_string();
        }
        if END_WARNING.is_match(line) || END_NOTE.is_match(line) {
            return String::new();
        }

        let text = line.strip_prefix("///").unwrap_or(line);
        let text = text.strip_prefix(' ').unwrap_or(text);
        format!("{text}\n")
    }
}
