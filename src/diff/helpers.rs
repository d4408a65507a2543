//! Helper functions for diff parsing.

use regex::Regex;
use std::sync::LazyLock;

/// Hunk header: `@@ -<oldStart>[,<oldCount>] +<newStart>[,<newCount>] @@`.
static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,\d+)? \+(\d+)(?:,\d+)? @@").expect("Invalid hunk header regex")
});

/// Parse a hunk header line.
///
/// Counts are ignored; only the starting line numbers matter for numbering
/// the hunk body. Trailing section text after the closing `@@` is allowed.
///
/// Returns (old_start, new_start) or None if the header does not match.
pub(super) fn parse_hunk_header(line: &str) -> Option<(usize, usize)> {
    let caps = HUNK_HEADER_REGEX.captures(line)?;
    let old_start = caps.get(1)?.as_str().parse().ok()?;
    let new_start = caps.get(2)?.as_str().parse().ok()?;
    Some((old_start, new_start))
}

/// Derive the display path from the remainder of a `+++ ` line.
///
/// Only a single leading `b/` is stripped; `/dev/null` and unprefixed paths
/// are kept as-is.
pub(super) fn file_path_from_marker(rest: &str) -> String {
    rest.strip_prefix("b/").unwrap_or(rest).to_string()
}

/// True for metadata lines the parser skips outright.
pub(super) fn is_metadata_line(line: &str) -> bool {
    line.starts_with("diff ") || line.starts_with("--- ")
}
