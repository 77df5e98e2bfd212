//! Line-based reader for the documented fields of the clang-format option structs.
//!
//! Every option is a field of a root struct preceded by a `///` comment:
//!
//! ```text
//! /// If ``true``, aligns escaped newlines.
//! /// \version 5
//! EscapedNewlineAlignmentStyle AlignEscapedNewlines;
//! ```
//!
//! The comment may instead be followed by an `enum` or `struct` block declaring the type of a
//! later field. Reading is best-effort: anything unexpected is recorded as a [`Diagnostic`] and
//! skipped.

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::comment::CommentCleaner;
use crate::model::{Enum, EnumValue, NestedField, NestedStruct, StyleOption, DEPRECATED_TYPE};
use crate::{Diagnostic, OptionTables};

/// Opening lines of the structs holding the options of `Format.h` and `IncludeStyle.h`.
pub const ROOT_STRUCTS: &[&str] = &["struct FormatStyle {", "struct IncludeStyle {"];

lazy_static! {
    static ref VERSION: Regex = Regex::new(r"^/// \\version\s*(?P<version>[0-9.]+)?").unwrap();
    static ref FIELD: Regex = Regex::new(r"^([<>:\w(,\s)]+)\s+(\w+);").unwrap();
    static ref ENUM: Regex =
        Regex::new(r"^enum\s+(?:class\s+)?(\w+)\s*(:((\s*\w+)+)\s*)?\{").unwrap();
    static ref STRUCT: Regex = Regex::new(r"^struct\s+(\w+)\s*\{").unwrap();
}

/// Where to continue after a block that had to be skipped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Resume {
    Struct,
    NestedStruct,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    BeforeStruct,
    InStruct,
    InFieldComment,
    InEnum,
    InEnumMemberComment,
    InNestedStruct,
    InNestedFieldComment,
    InNestedEnum,
    InNestedEnumMemberComment,
    Skipping { depth: usize, resume: Resume },
    Finished,
}

pub struct HeaderReader<'a> {
    root_structs: &'a [&'a str],
    state: State,
    lineno: usize,
    cleaner: CommentCleaner,
    diagnostics: Vec<Diagnostic>,
    tables: OptionTables,
    comment: String,
    version: Option<String>,
    current_enum: Option<Enum>,
    current_struct: Option<NestedStruct>,
}

impl Default for HeaderReader<'static> {
    fn default() -> Self {
        Self::new(ROOT_STRUCTS)
    }
}

impl<'a> HeaderReader<'a> {
    /// A reader looking for options in the structs opened by one of `root_structs` (compared
    /// against trimmed lines, e.g. `struct FormatStyle {`).
    pub fn new(root_structs: &'a [&'a str]) -> Self {
        Self {
            root_structs,
            state: State::BeforeStruct,
            lineno: 0,
            cleaner: CommentCleaner::default(),
            diagnostics: Vec::new(),
            tables: OptionTables::default(),
            comment: String::new(),
            version: None,
            current_enum: None,
            current_struct: None,
        }
    }

    /// Reads the whole header. Diagnostics are logged as well as returned.
    pub fn read(mut self, text: &str) -> (OptionTables, Vec<Diagnostic>) {
        for line in text.lines() {
            self.lineno += 1;
            self.read_line(line.trim());
            if self.state == State::Finished {
                break;
            }
        }
        match self.state {
            State::Finished => {}
            State::BeforeStruct => self.diagnostics.push(Diagnostic::MissingOptionStruct),
            _ => self.diagnostics.push(Diagnostic::Unfinished { line: self.lineno }),
        }
        for diagnostic in &self.diagnostics {
            warn!("{diagnostic}");
        }
        (self.tables, self.diagnostics)
    }

    fn read_line(&mut self, line: &str) {
        match self.state {
            State::BeforeStruct => {
                if self.root_structs.iter().any(|opener| *opener == line) {
                    self.state = State::InStruct;
                }
            }
            State::InStruct => {
                if line.starts_with("///") {
                    self.state = State::InFieldComment;
                    self.start_comment(line);
                } else if line == "};" {
                    self.state = State::Finished;
                }
            }
            State::InFieldComment => self.read_field_comment(line),
            State::InEnum | State::InNestedEnum => {
                if line.starts_with("///") {
                    self.state = if self.state == State::InEnum {
                        State::InEnumMemberComment
                    } else {
                        State::InNestedEnumMemberComment
                    };
                    self.start_comment(line);
                } else if line == "};" {
                    self.finish_enum();
                }
                // Undocumented enumerators are documented where the enum is used.
            }
            State::InEnumMemberComment | State::InNestedEnumMemberComment => {
                self.read_enum_member_comment(line)
            }
            State::InNestedStruct => {
                if line.starts_with("///") {
                    self.state = State::InNestedFieldComment;
                    self.start_comment(line);
                } else if line == "};" {
                    if let Some(nested) = self.current_struct.take() {
                        self.tables
                            .nested_structs
                            .insert(nested.name.clone(), nested);
                    }
                    self.state = State::InStruct;
                }
            }
            State::InNestedFieldComment => self.read_nested_field_comment(line),
            State::Skipping { depth, resume } => {
                if line == "};" && depth <= 1 {
                    self.state = match resume {
                        Resume::Struct => State::InStruct,
                        Resume::NestedStruct => State::InNestedStruct,
                    };
                } else if line == "};" {
                    self.state = State::Skipping {
                        depth: depth - 1,
                        resume,
                    };
                } else if line.ends_with('{') {
                    self.state = State::Skipping {
                        depth: depth + 1,
                        resume,
                    };
                }
            }
            State::Finished => {}
        }
    }

    fn start_comment(&mut self, line: &str) {
        self.comment = self.cleaner.clean(line, self.lineno, &mut self.diagnostics);
    }

    fn append_comment(&mut self, line: &str) {
        let cleaned = self.cleaner.clean(line, self.lineno, &mut self.diagnostics);
        self.comment.push_str(&cleaned);
    }

    fn read_field_comment(&mut self, line: &str) {
        if line.starts_with(r"/// \version") {
            if let Some(version) = VERSION.captures(line).and_then(|c| c.name("version")) {
                self.version = Some(version.as_str().to_string());
            }
        } else if line.starts_with("///") {
            self.append_comment(line);
        } else if line.starts_with("enum") {
            self.open_enum(line, Resume::Struct);
        } else if line.starts_with("struct") {
            match STRUCT.captures(line) {
                Some(captures) => {
                    let comment = std::mem::take(&mut self.comment);
                    self.version = None;
                    self.current_struct = Some(NestedStruct::new(&captures[1], comment));
                    self.state = State::InNestedStruct;
                }
                None => self.skip_block(line, Resume::Struct),
            }
        } else if line.ends_with(';') {
            self.read_field(line);
            self.state = State::InStruct;
        } else {
            self.diagnostics.push(Diagnostic::UnexpectedLine {
                line: self.lineno,
                text: line.to_string(),
            });
            self.comment.clear();
            self.version = None;
            self.state = State::InStruct;
        }
    }

    fn read_field(&mut self, line: &str) {
        let (line, is_deprecated) = match line.strip_prefix("// ") {
            Some(line) => (line, true),
            None => (line, false),
        };
        let comment = std::mem::take(&mut self.comment);
        let version = self.version.take();
        let Some(captures) = FIELD.captures(line) else {
            self.diagnostics.push(Diagnostic::MalformedField {
                line: self.lineno,
                text: line.to_string(),
            });
            return;
        };
        let name = &captures[2];
        let type_name = if is_deprecated {
            DEPRECATED_TYPE
        } else {
            captures[1].trim()
        };
        if version.is_none() {
            self.diagnostics.push(Diagnostic::MissingVersion {
                line: self.lineno,
                field: name.to_string(),
            });
        }
        self.tables
            .options
            .push(StyleOption::new(name, type_name, comment, version));
    }

    fn read_nested_field_comment(&mut self, line: &str) {
        if line.starts_with(r"/// \version") {
            if let Some(version) = VERSION.captures(line).and_then(|c| c.name("version")) {
                self.version = Some(version.as_str().to_string());
            }
        } else if line.starts_with("///") {
            self.append_comment(line);
        } else if line.starts_with("enum") {
            self.open_enum(line, Resume::NestedStruct);
        } else if line.starts_with("struct") {
            // Structs do not nest further.
            self.skip_block(line, Resume::NestedStruct);
        } else {
            self.state = State::InNestedStruct;
            let comment = std::mem::take(&mut self.comment);
            let version = self.version.take();
            let Some(captures) = FIELD.captures(line) else {
                self.diagnostics.push(Diagnostic::MalformedField {
                    line: self.lineno,
                    text: line.to_string(),
                });
                return;
            };
            let type_name = captures[1].trim().to_string();
            let name = captures[2].to_string();
            let field = match self.tables.enums.get(&type_name) {
                Some(known) => NestedField::Enum {
                    name,
                    values: known.values.clone(),
                    type_name,
                    comment,
                },
                None => NestedField::Typed {
                    type_name,
                    name,
                    comment,
                    version,
                },
            };
            if let Some(nested) = self.current_struct.as_mut() {
                nested.fields.push(field);
            }
        }
    }

    fn open_enum(&mut self, line: &str, resume: Resume) {
        match ENUM.captures(line) {
            Some(captures) => {
                let comment = std::mem::take(&mut self.comment);
                // A version documents the enum, not the field declared with it.
                self.version = None;
                self.current_enum = Some(Enum::new(&captures[1], comment));
                self.state = match resume {
                    Resume::Struct => State::InEnum,
                    Resume::NestedStruct => State::InNestedEnum,
                };
            }
            None => self.skip_block(line, resume),
        }
    }

    fn finish_enum(&mut self) {
        if let Some(finished) = self.current_enum.take() {
            self.tables.enums.insert(finished.name.clone(), finished);
        }
        self.state = match self.state {
            State::InNestedEnum | State::InNestedEnumMemberComment => State::InNestedStruct,
            _ => State::InStruct,
        };
    }

    fn read_enum_member_comment(&mut self, line: &str) {
        if line.starts_with("///") {
            self.append_comment(line);
            return;
        }
        if line == "};" {
            self.finish_enum();
            return;
        }
        if line.is_empty() {
            return;
        }

        self.state = if self.state == State::InEnumMemberComment {
            State::InEnum
        } else {
            State::InNestedEnum
        };
        let value = line.replace(',', "");
        let (declaration, config) = match value.split_once(" // ") {
            Some((declaration, config)) => (declaration, Some(config.trim())),
            None => (value.as_str(), None),
        };
        // `Name = 3` declares the same enumerator as `Name`.
        let name = declaration
            .split('=')
            .next()
            .unwrap_or(declaration)
            .trim()
            .to_string();
        let comment = std::mem::take(&mut self.comment);
        if let Some(current) = self.current_enum.as_mut() {
            current.values.push(EnumValue {
                config: config.map_or_else(|| name.clone(), str::to_string),
                name,
                comment,
            });
        }
    }

    fn skip_block(&mut self, line: &str, resume: Resume) {
        self.diagnostics.push(Diagnostic::MalformedBlock {
            line: self.lineno,
            text: line.to_string(),
        });
        self.comment.clear();
        self.version = None;
        self.state = State::Skipping {
            depth: usize::from(line.ends_with('{')),
            resume,
        };
    }
}

/// Reads the options of a clang-format header using the default [`ROOT_STRUCTS`].
pub fn read_options(text: &str) -> (OptionTables, Vec<Diagnostic>) {
    HeaderReader::default().read(text)
}
