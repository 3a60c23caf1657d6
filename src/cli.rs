//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::render::LineStyle;

/// getsrc - list C/C++ source files under a directory.
#[derive(Parser, Debug)]
#[command(name = "getsrc")]
#[command(
    author,
    version,
    about,
    long_about = r#"getsrc walks ROOT recursively and prints one line per file whose name
ends in ".c" or ".cpp" (case-sensitive).

Each line is "<dir>/<file>", where <dir> is the last segment of the directory
holding the file. Separators are always forward slashes.

Examples:
    getsrc src
    getsrc src quoted
"#
)]
pub struct Cli {
    /// Directory to walk.
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Wrap each line in double quotes (any value enables it).
    #[arg(
        value_name = "QUOTE",
        long_help = "Any second argument enables quoted output: each line is wrapped in\n\
double quotes. The value itself is ignored."
    )]
    pub quote: Option<String>,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Print diagnostics to stderr. Result lines on stdout are unchanged."
    )]
    pub verbose: bool,
}

impl Cli {
    pub fn line_style(&self) -> LineStyle {
        LineStyle::from_flag(self.quote.is_some())
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let style = cli.line_style();
    crate::backends::collect::run_collect(&cli.root, style, cli.verbose)
}
