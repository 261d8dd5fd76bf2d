//! Path utility functions
//!
//! Destination paths use `/` as separator regardless of platform; these
//! helpers mirror how the storage service addresses directories.

use crate::constants::PATH_SEPARATOR;

/// Strip a single leading and trailing separator from a path.
pub fn strip_path(path: &str) -> String {
    let stripped = path.strip_prefix(PATH_SEPARATOR).unwrap_or(path);
    stripped.strip_suffix(PATH_SEPARATOR).unwrap_or(stripped).to_string()
}

/// Split a path into its non-empty segments.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split(PATH_SEPARATOR).filter(|s| !s.is_empty()).collect()
}

/// Join path segments with the separator. Lone-separator and empty segments
/// collapse to empty strings, so `join_paths(&["/", "a"])` yields `"/a"`.
pub fn join_paths(paths: &[&str]) -> String {
    paths
        .iter()
        .map(|p| {
            if p.is_empty() || *p == PATH_SEPARATOR.to_string() {
                ""
            } else {
                p
            }
        })
        .collect::<Vec<_>>()
        .join(&PATH_SEPARATOR.to_string())
}

/// Parent of a path, ignoring a trailing separator. Returns an empty string
/// at or above the root.
pub fn parent_path(path: &str) -> String {
    let trimmed = path.strip_suffix(PATH_SEPARATOR).unwrap_or(path);
    match trimmed.rfind(PATH_SEPARATOR) {
        Some(pos) if pos > 1 => trimmed[..pos].to_string(),
        _ => String::new(),
    }
}
