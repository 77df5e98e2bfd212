use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[clap(version, about)]
pub struct Cli {
    #[clap(
        long,
        help = "Download the headers from the llvm-project repository before generating"
    )]
    pub download: bool,

    #[clap(
        long,
        default_value = "main",
        value_parser,
        help = "The llvm-project branch or tag to download the headers from"
    )]
    pub clang_tag: String,

    #[clap(
        long,
        default_value = "clang",
        value_parser,
        help = "The directory holding Format.h and IncludeStyle.h"
    )]
    pub header_dir: PathBuf,

    #[clap(
        long,
        default_value = "schemas/clangFormat-options.json",
        value_parser,
        help = "Where to write the generated schema"
    )]
    pub output: PathBuf,
}
