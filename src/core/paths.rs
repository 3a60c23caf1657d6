//! Path normalization utilities
//!
//! Output always uses '/' as separator, whatever the host convention.

use std::path::{Component, Path};

/// File name suffixes treated as C/C++ sources (case-sensitive)
pub const SOURCE_SUFFIXES: &[&str] = &[".c", ".cpp"];

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Check whether a file name ends in one of the source suffixes
pub fn is_source_file(name: &str) -> bool {
    SOURCE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Last segment of a directory path, used as the prefix of an output line.
///
/// Only the final normal component is kept, so `a/b` yields `b`. Paths with
/// no such component (`.`, `..`, `/`) fall back to their own normalized text
/// without trailing slashes.
pub fn last_segment(dir: &Path) -> String {
    match dir.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().replace('\\', "/"),
        _ => normalize_path(dir).trim_end_matches('/').to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("src/main.c");
        assert_eq!(normalize_path(path), "src/main.c");
    }

    #[test]
    fn test_normalize_path_backslashes() {
        let path = Path::new("src\\lib\\util.cpp");
        assert_eq!(normalize_path(path), "src/lib/util.cpp");
    }

    #[test]
    fn test_is_source_file() {
        assert!(is_source_file("main.c"));
        assert!(is_source_file("engine.cpp"));
        assert!(!is_source_file("header.h"));
        assert!(!is_source_file("notes.txt"));
        assert!(!is_source_file("main.cc"));
    }

    #[test]
    fn test_is_source_file_case_sensitive() {
        assert!(!is_source_file("FOO.C"));
        assert!(!is_source_file("foo.CPP"));
        assert!(!is_source_file("foo.Cpp"));
    }

    #[test]
    fn test_is_source_file_bare_suffix() {
        assert!(is_source_file(".c"));
        assert!(!is_source_file("c"));
    }

    #[test]
    fn test_last_segment_nested() {
        assert_eq!(last_segment(Path::new("a/b")), "b");
        assert_eq!(last_segment(Path::new("/project/src/core")), "core");
    }

    #[test]
    fn test_last_segment_trailing_slash() {
        assert_eq!(last_segment(Path::new("src/")), "src");
    }

    #[test]
    fn test_last_segment_without_name() {
        assert_eq!(last_segment(Path::new(".")), ".");
        assert_eq!(last_segment(Path::new("..")), "..");
        assert_eq!(last_segment(Path::new("/")), "");
    }

    #[test]
    fn test_last_segment_dot_suffix() {
        // `a/.` has `a` as its last normal component
        assert_eq!(last_segment(Path::new("a/.")), "a");
    }
}
