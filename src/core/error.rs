//! Collection errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while walking the root directory
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("root directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl CollectError {
    /// Wrap a walkdir error, keeping the path it failed on
    pub fn walk(root: &std::path::Path, source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.to_path_buf());
        CollectError::Walk { path, source }
    }
}
