//! Parsed representation of a unified diff.
//!
//! Values are built once per parse call and never mutated afterward. The
//! serialized form uses camelCase keys so exported JSON matches what
//! dashboard front-ends consume.

use serde::{Deserialize, Serialize};

/// Classification of a single line inside a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Line present only in the new file (`+`).
    Add,
    /// Line present only in the old file (`-`).
    Remove,
    /// Line present in both files.
    Context,
}

impl LineKind {
    /// The marker character shown in the gutter.
    pub fn marker(self) -> char {
        match self {
            LineKind::Add => '+',
            LineKind::Remove => '-',
            LineKind::Context => ' ',
        }
    }
}

/// One line of a hunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLine {
    /// The raw diff line, marker character included.
    pub content: String,
    #[serde(rename = "type")]
    pub kind: LineKind,
    /// Line number in the old file; `None` for added lines.
    pub old_line_number: Option<usize>,
    /// Line number in the new file; `None` for removed lines.
    pub new_line_number: Option<usize>,
}

impl ParsedLine {
    /// The line text without its leading marker character.
    ///
    /// Context lines that arrived without a leading space (blank lines from
    /// tools that trim trailing whitespace) are returned unchanged.
    pub fn text(&self) -> &str {
        match self.kind {
            LineKind::Add => self.content.strip_prefix('+').unwrap_or(&self.content),
            LineKind::Remove => self.content.strip_prefix('-').unwrap_or(&self.content),
            LineKind::Context => self.content.strip_prefix(' ').unwrap_or(&self.content),
        }
    }
}

/// A contiguous block of changes introduced by an `@@` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedHunk {
    /// The full `@@ ... @@` header line, trailing section text included.
    pub header: String,
    pub lines: Vec<ParsedLine>,
    pub old_start: usize,
    pub new_start: usize,
}

/// One file section of a patch, introduced by a `+++ ` marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFile {
    /// Path from the `+++ ` marker with a leading `b/` stripped.
    pub path: String,
    pub hunks: Vec<ParsedHunk>,
    pub added_lines: usize,
    pub removed_lines: usize,
}

impl ParsedFile {
    pub(super) fn new(path: String) -> Self {
        Self {
            path,
            hunks: Vec::new(),
            added_lines: 0,
            removed_lines: 0,
        }
    }

    /// Reconstruct this file's section as patch text.
    ///
    /// The `diff ` and `--- ` metadata lines are not kept by the parser, so
    /// a conventional `--- a/<path>` / `+++ b/<path>` pair is synthesized.
    /// Hunk headers and line contents are reproduced verbatim.
    pub fn to_patch_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("--- a/{}\n", self.path));
        out.push_str(&format!("+++ b/{}\n", self.path));
        for hunk in &self.hunks {
            out.push_str(&hunk.header);
            out.push('\n');
            for line in &hunk.lines {
                out.push_str(&line.content);
                out.push('\n');
            }
        }
        out
    }
}

/// A best-effort recovery the parser made while reading a patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseDiagnostic {
    /// 1-based line number in the input.
    pub line: usize,
    pub message: String,
}

/// Files plus any recoveries made while parsing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub files: Vec<ParsedFile>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Totals across a set of parsed files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffStats {
    pub files: usize,
    pub hunks: usize,
    pub added_lines: usize,
    pub removed_lines: usize,
}

impl DiffStats {
    pub fn from_files(files: &[ParsedFile]) -> Self {
        files.iter().fold(Self::default(), |acc, file| Self {
            files: acc.files + 1,
            hunks: acc.hunks + file.hunks.len(),
            added_lines: acc.added_lines + file.added_lines,
            removed_lines: acc.removed_lines + file.removed_lines,
        })
    }
}

impl std::fmt::Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.files == 1 { "file" } else { "files" };
        write!(
            f,
            "{} {} changed, {} insertions(+), {} deletions(-)",
            self.files, noun, self.added_lines, self.removed_lines
        )
    }
}
