mod cli;
mod error;
mod headers;
mod schema;

use std::error::Error as _;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use error::Error;

fn write_schema(path: &Path, text: &str) -> Result<(), Error> {
    let to_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, text).map_err(to_error)
}

fn run(cli: &cli::Cli) -> Result<(), Error> {
    if cli.download {
        headers::download_headers(&cli.clang_tag, &cli.header_dir)?;
    }

    info!("Parsing the schema");
    let (tables, diagnostics) = headers::read_headers(&cli.header_dir)?;
    if !diagnostics.is_empty() {
        info!("{} problems found while reading the headers", diagnostics.len());
    }
    let schema = schema::generate_schema(&tables);
    let text = schema::to_json_string(&schema)?;

    info!("Writing the schema to {}", cli.output.display());
    write_schema(&cli.output, &text)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = cli::Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            let mut source = err.source();
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use super::*;

    #[test]
    fn writes_schema_creating_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schemas").join("clangFormat-options.json");

        write_schema(&path, "{}\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn run_generates_schema_from_header_directory() {
        let dir = tempfile::tempdir().unwrap();
        let header_dir = dir.path().join("clang");
        fs::create_dir(&header_dir).unwrap();
        fs::write(
            header_dir.join("Format.h"),
            include_str!("../../header/tests/data/Format.h"),
        )
        .unwrap();
        fs::write(
            header_dir.join("IncludeStyle.h"),
            include_str!("../../header/tests/data/IncludeStyle.h"),
        )
        .unwrap();
        let output = dir.path().join("out").join("schema.json");

        let cli = cli::Cli::parse_from([
            OsStr::new("cf-schema-generator"),
            OsStr::new("--header-dir"),
            header_dir.as_os_str(),
            OsStr::new("--output"),
            output.as_os_str(),
        ]);
        run(&cli).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["properties"].as_object().unwrap().len(), 12);
    }

    #[test]
    fn run_fails_without_headers() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli::Cli::parse_from([
            OsStr::new("cf-schema-generator"),
            OsStr::new("--header-dir"),
            dir.path().as_os_str(),
        ]);
        assert!(matches!(run(&cli), Err(Error::Read { .. })));
    }
}
