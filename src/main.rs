//! getsrc - List C/C++ source files for build file generation
//!
//! getsrc walks a directory tree and prints one `<dir>/<file>` line per
//! `.c`/`.cpp` file, optionally quoted, always with '/' separators.

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
