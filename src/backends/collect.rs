//! Source file collection backend
//!
//! Walks the root with walkdir and yields every `.c`/`.cpp` file lazily, in
//! file-name order within each directory.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::CollectError;
use crate::core::paths::{is_source_file, last_segment};
use crate::core::render::{LineStyle, LineWriter, SourceFile};

/// Collects C/C++ source files under a root directory
#[derive(Debug, Clone)]
pub struct PathCollector {
    root: PathBuf,
}

impl PathCollector {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Start the walk. Fails up front when the root is missing or not a directory.
    pub fn files(&self) -> Result<SourceFiles, CollectError> {
        match fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(CollectError::NotADirectory(self.root.clone())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CollectError::NotFound(self.root.clone()))
            }
            Err(source) => {
                return Err(CollectError::Io {
                    path: self.root.clone(),
                    source,
                })
            }
        }

        Ok(SourceFiles {
            root: self.root.clone(),
            inner: WalkDir::new(&self.root).sort_by_file_name().into_iter(),
        })
    }
}

/// Lazy iterator over matched source files
pub struct SourceFiles {
    root: PathBuf,
    inner: walkdir::IntoIter,
}

impl Iterator for SourceFiles {
    type Item = Result<SourceFile, CollectError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(e) => e,
                Err(err) => return Some(Err(CollectError::walk(&self.root, err))),
            };

            if !is_file_entry(&entry) {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !is_source_file(&name) {
                continue;
            }

            let dir = entry.path().parent().unwrap_or(self.root.as_path());
            return Some(Ok(SourceFile::new(last_segment(dir), name)));
        }
    }
}

/// Anything that is not a directory counts as a file. Symlinks are not
/// followed; a link to a directory is treated as a directory.
fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    true
}

/// Write every matched file to `writer`, returning the number of lines.
///
/// Lines already written are flushed before a walk error is returned.
pub fn collect_to<W: Write>(root: &Path, style: LineStyle, writer: W) -> Result<usize> {
    let collector = PathCollector::new(root);
    let files = collector.files()?;
    let mut out = LineWriter::new(writer, style);

    for file in files {
        match file {
            Ok(file) => out.write(&file).context("failed to write output")?,
            Err(err) => {
                out.flush().context("failed to write output")?;
                return Err(err.into());
            }
        }
    }

    out.flush().context("failed to write output")?;
    Ok(out.written())
}

/// Run the collection and print to stdout
pub fn run_collect(root: &Path, style: LineStyle, verbose: bool) -> Result<()> {
    if verbose {
        eprintln!("getsrc: walking {}", root.display());
    }

    let stdout = io::stdout();
    write_collected(root, style, verbose, BufWriter::new(stdout.lock()))
}

/// Like `collect_to`, but a closed reader ends the run successfully
fn write_collected<W: Write>(
    root: &Path,
    style: LineStyle,
    verbose: bool,
    writer: W,
) -> Result<()> {
    match collect_to(root, style, writer) {
        Ok(count) => {
            if verbose {
                eprintln!("getsrc: {} source file(s)", count);
            }
            Ok(())
        }
        // Reader went away (e.g. piped into `head`); nothing left to report
        Err(err) if is_broken_pipe(&err) => Ok(()),
        Err(err) => Err(err),
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
    })
}
