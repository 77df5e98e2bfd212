//! Conversion of the documentation markup used in the clang-format headers (a mix of reST,
//! Doxygen commands and a little HTML) into HTML fragments or plain text.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

/// Opens every paragraph after the first one in generated HTML.
pub const PARAGRAPH_BEGIN: &str = "<p style='margin-top:5px'>";

const DOCUMENTATION_ROOT: &str = "https://clang.llvm.org/docs/ClangFormatStyleOptions.html";

lazy_static! {
    static ref TT: Regex = Regex::new(r"<tt>\s*(.*?)\s*</tt>").unwrap();
    static ref BACKSLASH_C: Regex = Regex::new(r"\\c ([^ ,;.]+)").unwrap();
    static ref LITERAL_HTML: Regex = Regex::new(r"``(.*?)``").unwrap();
    static ref LITERAL_TEXT: Regex = Regex::new(r"``\s*(.*?)\s*``").unwrap();
    static ref COMMAND: Regex = Regex::new(r"\\\w+ ").unwrap();
    static ref URL: Regex = Regex::new(r"(^|[^<])(https://[^\s>()]+)").unwrap();
    static ref REST_LINK: Regex = Regex::new(r"`([^<]+) *<(.+)>`_").unwrap();
    static ref BLANK_LINES: Regex = Regex::new(r"\n *\n").unwrap();
    static ref TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref DIRECTIVE: Regex =
        Regex::new(r"^(?P<indent> *)\.\. (?P<kind>code-block|warning|note)::").unwrap();
}

/// Link to the online documentation of an option.
pub fn documentation_link(name: &str) -> String {
    format!("{DOCUMENTATION_ROOT}#{}", name.to_lowercase())
}

/// An HTML anchor pointing to the online documentation of an option, followed by a newline.
pub fn documentation_anchor(name: &str) -> String {
    format!("<a href='{}'>{name} Documentation</a>\n", documentation_link(name))
}

/// Converts a documentation comment into an HTML fragment.
///
/// Inline markup (`<tt>`, `\c`, double backquotes, URLs and reST links) is converted within
/// each paragraph. Paragraphs are separated by [`PARAGRAPH_BEGIN`]. The indented body of a
/// `.. code-block::` directive is emitted verbatim (HTML-escaped) inside `<pre>`.
pub fn to_html(text: &str) -> String {
    let mut html = String::new();
    for block in split_blocks(text) {
        let rendered = match block {
            Block::Paragraph(lines) => inline_html(&lines.join("\n")),
            Block::Code(lines) => format!("<pre>{}</pre>", escape_html(&lines.join("\n"))),
            Block::Admonition(label) => format!("<b>{label}:</b>"),
        };
        if !html.is_empty() {
            html.push_str(PARAGRAPH_BEGIN);
        }
        html.push_str(&rendered);
    }
    html
}

/// Converts a documentation comment into a single line of plain text.
pub fn to_plain_text(text: &str) -> String {
    let text = LITERAL_TEXT.replace_all(text, "'$1'");
    let text = TT.replace_all(&text, "$1");
    let text = BACKSLASH_C.replace_all(&text, "$1");
    let text = COMMAND.replace_all(&text, "");
    let text = BLANK_LINES.replace_all(&text, "\n");
    let text = TAG.replace_all(&text, "");
    let text = text.replace("**", "");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

/// The first line of a comment as plain text, as used for short descriptions.
pub fn summary(text: &str) -> String {
    to_plain_text(text.trim_start().lines().next().unwrap_or_default())
}

fn inline_html(text: &str) -> String {
    let text = TT.replace_all(text, "<code>$1</code>");
    let text = BACKSLASH_C.replace_all(&text, "<code>$1</code>");
    let text = LITERAL_HTML.replace_all(&text, "<code>$1</code>");
    let text = COMMAND.replace_all(&text, "");
    // URLs directly after `<` belong to a reST link and are handled below.
    let text = URL.replace_all(&text, "$1<a href='$2'>$2</a>");
    let text = REST_LINK.replace_all(&text, "<a href='$2'>$1</a>");
    text.trim().to_string()
}

fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '\'', '"']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&#39;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[derive(Debug, PartialEq, Eq)]
enum Block<'a> {
    Paragraph(Vec<&'a str>),
    /// Lines of a code block with the common indentation removed.
    Code(Vec<&'a str>),
    Admonition(&'static str),
}

fn indentation(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

fn split_blocks(text: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut lines = text.lines().peekable();

    while let Some(line) = lines.next() {
        let directive = DIRECTIVE.captures(line);
        if line.trim().is_empty() || directive.is_some() {
            if !paragraph.is_empty() {
                blocks.push(Block::Paragraph(std::mem::take(&mut paragraph)));
            }
        } else {
            paragraph.push(line);
            continue;
        }
        let Some(directive) = directive else {
            continue;
        };

        match &directive["kind"] {
            "warning" => blocks.push(Block::Admonition("Warning")),
            "note" => blocks.push(Block::Admonition("Note")),
            _ => {
                let directive_indent = directive["indent"].len();
                let mut body: Vec<&str> = Vec::new();
                while let Some(&next) = lines.peek() {
                    if !next.trim().is_empty() && indentation(next) <= directive_indent {
                        break;
                    }
                    body.push(next);
                    lines.next();
                }
                while body.last().is_some_and(|l| l.trim().is_empty()) {
                    body.pop();
                }
                while body.first().is_some_and(|l| l.trim().is_empty()) {
                    body.remove(0);
                }
                let common = body
                    .iter()
                    .filter(|l| !l.trim().is_empty())
                    .map(|l| indentation(l))
                    .min()
                    .unwrap_or(0);
                let body = body
                    .into_iter()
                    .map(|l| l.get(common..).unwrap_or(""))
                    .collect();
                blocks.push(Block::Code(body));
            }
        }
    }
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph(paragraph));
    }
    blocks
}
