//! File anchors used for navigation.

use crate::diff::ParsedFile;
use regex::Regex;
use std::sync::LazyLock;

static NON_ALNUM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").expect("Invalid anchor regex"));

/// Stable id for a file path: `file-` followed by the path with every
/// non-alphanumeric character replaced by `-`.
///
/// Distinct paths can share an anchor (`a/b` and `a-b`); lookups resolve to
/// the first match.
pub fn file_anchor_id(path: &str) -> String {
    format!("file-{}", NON_ALNUM_REGEX.replace_all(path, "-"))
}

/// Find a file by exact path or by anchor id. Returns its index.
pub fn find_file(files: &[ParsedFile], target: &str) -> Option<usize> {
    files
        .iter()
        .position(|f| f.path == target)
        .or_else(|| files.iter().position(|f| file_anchor_id(&f.path) == target))
}
