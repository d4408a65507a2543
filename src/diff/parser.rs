//! Core diff parsing logic.
//!
//! The parser is a single forward pass over the input lines. It never fails:
//! malformed input degrades to a partial structure, and every recovery is
//! recorded as a [`ParseDiagnostic`].

use super::helpers::{file_path_from_marker, is_metadata_line, parse_hunk_header};
use super::model::{LineKind, ParseDiagnostic, ParseOutcome, ParsedFile, ParsedHunk, ParsedLine};

/// Parse a unified diff into files, hunks and lines.
///
/// An empty patch yields an empty list.
pub fn parse_patch(patch: &str) -> Vec<ParsedFile> {
    parse_patch_with_diagnostics(patch).files
}

/// Parse a unified diff, also reporting best-effort recoveries.
///
/// Recoveries are:
/// - a hunk header that does not match `@@ -a[,b] +c[,d] @@` starts both
///   sides at line 1
/// - a hunk that opens before any `+++ ` marker is dropped
pub fn parse_patch_with_diagnostics(patch: &str) -> ParseOutcome {
    let mut state = ParserState::default();

    for (idx, line) in patch.lines().enumerate() {
        let line_no = idx + 1;

        if is_metadata_line(line) {
            continue;
        }

        if let Some(rest) = line.strip_prefix("+++ ") {
            state.finish_hunk();
            state.finish_file();
            state.file = Some(ParsedFile::new(file_path_from_marker(rest)));
            continue;
        }

        if line.starts_with("@@") {
            state.finish_hunk();
            state.start_hunk(line, line_no);
            continue;
        }

        // Lines outside a hunk (index, mode changes, binary notices) carry
        // nothing the renderer needs.
        if state.hunk.is_some() {
            state.push_line(line);
        }
    }

    state.finish_hunk();
    state.finish_file();

    ParseOutcome {
        files: state.files,
        diagnostics: state.diagnostics,
    }
}

/// Classify a hunk body line by its marker.
fn classify(line: &str) -> LineKind {
    if line.starts_with('+') && !line.starts_with("+++") {
        LineKind::Add
    } else if line.starts_with('-') && !line.starts_with("---") {
        LineKind::Remove
    } else {
        LineKind::Context
    }
}

#[derive(Default)]
struct ParserState {
    files: Vec<ParsedFile>,
    diagnostics: Vec<ParseDiagnostic>,
    file: Option<ParsedFile>,
    hunk: Option<OpenHunk>,
}

struct OpenHunk {
    hunk: ParsedHunk,
    /// Input line of the header, kept for diagnostics.
    line_no: usize,
    old_line: usize,
    new_line: usize,
}

impl ParserState {
    fn start_hunk(&mut self, header: &str, line_no: usize) {
        let (old_start, new_start) = parse_hunk_header(header).unwrap_or_else(|| {
            self.diagnostics.push(ParseDiagnostic {
                line: line_no,
                message: format!(
                    "unrecognized hunk header '{}'; numbering both sides from 1",
                    header
                ),
            });
            (1, 1)
        });

        self.hunk = Some(OpenHunk {
            hunk: ParsedHunk {
                header: header.to_string(),
                lines: Vec::new(),
                old_start,
                new_start,
            },
            line_no,
            old_line: old_start,
            new_line: new_start,
        });
    }

    fn push_line(&mut self, line: &str) {
        let Some(open) = self.hunk.as_mut() else {
            return;
        };

        let kind = classify(line);
        let (old_line_number, new_line_number) = match kind {
            LineKind::Add => {
                let n = open.new_line;
                open.new_line = open.new_line.saturating_add(1);
                (None, Some(n))
            }
            LineKind::Remove => {
                let o = open.old_line;
                open.old_line = open.old_line.saturating_add(1);
                (Some(o), None)
            }
            LineKind::Context => {
                let (o, n) = (open.old_line, open.new_line);
                // Huge header starts pin at usize::MAX instead of wrapping.
                open.old_line = open.old_line.saturating_add(1);
                open.new_line = open.new_line.saturating_add(1);
                (Some(o), Some(n))
            }
        };

        if let Some(file) = self.file.as_mut() {
            match kind {
                LineKind::Add => file.added_lines += 1,
                LineKind::Remove => file.removed_lines += 1,
                LineKind::Context => {}
            }
        }

        open.hunk.lines.push(ParsedLine {
            content: line.to_string(),
            kind,
            old_line_number,
            new_line_number,
        });
    }

    fn finish_hunk(&mut self) {
        let Some(open) = self.hunk.take() else {
            return;
        };

        match self.file.as_mut() {
            Some(file) => file.hunks.push(open.hunk),
            None => self.diagnostics.push(ParseDiagnostic {
                line: open.line_no,
                message: "hunk appears before any '+++ ' file marker; dropped".to_string(),
            }),
        }
    }

    fn finish_file(&mut self) {
        if let Some(file) = self.file.take() {
            self.files.push(file);
        }
    }
}
