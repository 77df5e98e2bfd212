use std::fs;
use std::path::Path;

use cf_header::{Diagnostic, OptionTables};
use log::info;

use crate::error::Error;

const CLANG_ROOT: &str = "https://raw.githubusercontent.com/llvm/llvm-project/__branch__/clang";

/// A header file declaring options, with its location inside the clang source tree.
pub struct Header {
    pub file_name: &'static str,
    pub repository_path: &'static str,
}

/// The headers to read, in order. Later headers win on duplicate enum or struct names.
pub const HEADERS: [Header; 2] = [
    Header {
        file_name: "Format.h",
        repository_path: "include/clang/Format/Format.h",
    },
    Header {
        file_name: "IncludeStyle.h",
        repository_path: "include/clang/Tooling/Inclusions/IncludeStyle.h",
    },
];

pub fn header_url(clang_tag: &str, header: &Header) -> String {
    format!(
        "{}/{}",
        CLANG_ROOT.replace("__branch__", clang_tag),
        header.repository_path
    )
}

fn download_file(url: &str, path: &Path) -> Result<(), Error> {
    info!("Downloading {url} to {}", path.display());
    let text = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|source| Error::Download {
            url: url.to_string(),
            source,
        })?;
    fs::write(path, text).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Downloads every header of [`HEADERS`] at `clang_tag` into `dir`.
pub fn download_headers(clang_tag: &str, dir: &Path) -> Result<(), Error> {
    fs::create_dir_all(dir).map_err(|source| Error::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    for header in &HEADERS {
        download_file(&header_url(clang_tag, header), &dir.join(header.file_name))?;
    }
    Ok(())
}

/// Reads every header of [`HEADERS`] from `dir` into one set of tables, with the options
/// sorted by name and their type references resolved. The diagnostics of all headers and of
/// the resolution are returned alongside.
pub fn read_headers(dir: &Path) -> Result<(OptionTables, Vec<Diagnostic>), Error> {
    let mut tables = OptionTables::default();
    let mut diagnostics = Vec::new();
    for header in &HEADERS {
        let path = dir.join(header.file_name);
        let text = fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let (header_tables, header_diagnostics) = cf_header::read_options(&text);
        info!(
            "Read {} options from {} ({} diagnostics)",
            header_tables.options.len(),
            path.display(),
            header_diagnostics.len()
        );
        tables.merge(header_tables);
        diagnostics.extend(header_diagnostics);
    }
    tables.sort_options();
    let unresolved = tables.resolve_references();
    if !unresolved.is_empty() {
        info!("{} options have a type that cannot be mapped", unresolved.len());
    }
    diagnostics.extend(unresolved);
    Ok((tables, diagnostics))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMAT_H: &str = include_str!("../../header/tests/data/Format.h");
    const INCLUDE_STYLE_H: &str = include_str!("../../header/tests/data/IncludeStyle.h");

    #[test]
    fn builds_raw_github_urls() {
        assert_eq!(
            header_url("main", &HEADERS[0]),
            "https://raw.githubusercontent.com/llvm/llvm-project/main/clang/include/clang/Format/Format.h"
        );
        assert_eq!(
            header_url("llvmorg-18.1.0", &HEADERS[1]),
            "https://raw.githubusercontent.com/llvm/llvm-project/llvmorg-18.1.0/clang/include/clang/Tooling/Inclusions/IncludeStyle.h"
        );
    }

    #[test]
    fn reads_and_merges_headers() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Format.h"), FORMAT_H).unwrap();
        fs::write(dir.path().join("IncludeStyle.h"), INCLUDE_STYLE_H).unwrap();

        let (tables, diagnostics) = read_headers(dir.path()).unwrap();
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(tables.options.len(), 11);
        assert!(tables
            .options
            .windows(2)
            .all(|pair| pair[0].name <= pair[1].name));
        let blocks = tables.option("IncludeBlocks").unwrap();
        assert_eq!(blocks.enum_ref.as_deref(), Some("IncludeBlocksStyle"));
    }

    #[test]
    fn collects_reader_and_resolution_diagnostics() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Format.h"), FORMAT_H).unwrap();
        fs::write(
            dir.path().join("IncludeStyle.h"),
            "struct IncludeStyle {\n/// Undated.\nMysteryType Mystery;\n};\n",
        )
        .unwrap();

        let (tables, diagnostics) = read_headers(dir.path()).unwrap();
        assert!(tables.option("Mystery").is_some());
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::MissingVersion {
                    line: 3,
                    field: "Mystery".into()
                },
                Diagnostic::UnknownType {
                    option: "Mystery".into(),
                    type_name: "MysteryType".into()
                },
            ]
        );
    }

    #[test]
    fn missing_header_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Format.h"), FORMAT_H).unwrap();

        match read_headers(dir.path()) {
            Err(Error::Read { path, .. }) => assert_eq!(path, dir.path().join("IncludeStyle.h")),
            other => panic!("expected a read error, got {other:?}"),
        }
    }
}
