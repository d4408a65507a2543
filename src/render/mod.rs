//! Rendering of parsed diffs for the terminal.
//!
//! Two layouts are supported:
//! - unified: one row per diff line with old and new line numbers
//! - split: old side on the left, new side on the right, re-paired from the
//!   line-oriented hunk (see [`split::pair_lines`])
//!
//! Renderers return plain `Vec<String>` rows so callers decide where they
//! go (stdout, a pager, a test assertion).

pub mod anchor;
pub mod split;
pub mod state;
mod style;
pub mod unified;


use crate::config::{Config, RenderMode};
use crate::diff::{ParsedFile, ParsedHunk};

pub use anchor::{file_anchor_id, find_file};
pub use state::{HunkKey, ViewState};

/// Shown in place of the view when the patch has no files.
pub const EMPTY_PLACEHOLDER: &str = "No changes.";

/// Shown when the patch has files but filtering hid all of them.
pub const NO_MATCH_PLACEHOLDER: &str = "No files match the current filter.";

const EXPANDED_MARKER: char = '▼';
const COLLAPSED_MARKER: char = '▶';

/// Layout and formatting settings for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub line_number_width: usize,
    pub split_column_width: usize,
    pub tab_width: usize,
    pub color: bool,
}

impl RenderOptions {
    pub fn from_config(config: &Config, mode: RenderMode, color: bool) -> Self {
        Self {
            mode,
            line_number_width: config.line_number_width,
            split_column_width: config.split_column_width,
            tab_width: config.tab_width,
            color,
        }
    }
}

/// A file together with its position in the full parse result.
#[derive(Debug, Clone, Copy)]
pub struct FileEntry<'a> {
    pub index: usize,
    pub file: &'a ParsedFile,
}

/// Pair every file with its index.
pub fn entries(files: &[ParsedFile]) -> Vec<FileEntry<'_>> {
    files
        .iter()
        .enumerate()
        .map(|(index, file)| FileEntry { index, file })
        .collect()
}

/// Render `entries` in the layout chosen by `opts.mode`.
///
/// An empty slice renders the empty-state placeholder.
pub fn render(entries: &[FileEntry<'_>], state: &ViewState, opts: &RenderOptions) -> Vec<String> {
    if entries.is_empty() {
        return vec![EMPTY_PLACEHOLDER.to_string()];
    }

    match opts.mode {
        RenderMode::Unified => unified::render_unified(entries, state, opts),
        RenderMode::Split => split::render_split(entries, state, opts),
    }
}

/// Walk files and hunks, honoring collapse state, and let `body` emit the
/// rows of each expanded hunk.
pub(crate) fn render_blocks<F>(
    entries: &[FileEntry<'_>],
    state: &ViewState,
    opts: &RenderOptions,
    mut body: F,
) -> Vec<String>
where
    F: FnMut(&ParsedHunk, &mut Vec<String>),
{
    let mut out = Vec::new();

    for (pos, entry) in entries.iter().enumerate() {
        if pos > 0 {
            out.push(String::new());
        }

        let file_collapsed = state.is_file_collapsed(&entry.file.path);
        out.push(file_header_line(entry.file, file_collapsed, opts));
        if file_collapsed {
            continue;
        }

        for (hunk_index, hunk) in entry.file.hunks.iter().enumerate() {
            let key = HunkKey::new(entry.index, hunk_index);
            let hunk_collapsed = state.is_hunk_collapsed(key);
            out.push(hunk_header_line(hunk, key, hunk_collapsed, opts));
            if !hunk_collapsed {
                body(hunk, &mut out);
            }
        }
    }

    out
}

fn file_header_line(file: &ParsedFile, collapsed: bool, opts: &RenderOptions) -> String {
    let marker = if collapsed {
        COLLAPSED_MARKER
    } else {
        EXPANDED_MARKER
    };
    format!(
        "{}  {}",
        style::file_header(&format!("{} {}", marker, file.path), opts.color),
        style::counts(file.added_lines, file.removed_lines, opts.color)
    )
}

fn hunk_header_line(
    hunk: &ParsedHunk,
    key: HunkKey,
    collapsed: bool,
    opts: &RenderOptions,
) -> String {
    let marker = if collapsed {
        COLLAPSED_MARKER
    } else {
        EXPANDED_MARKER
    };
    format!(
        "  {} {}",
        marker,
        style::hunk_header(&format!("[{}] {}", key, hunk.header), opts.color)
    )
}

/// Right-aligned line number, or blanks when the side has no line.
pub(crate) fn number_cell(number: Option<usize>, width: usize) -> String {
    match number {
        Some(n) => format!("{:>width$}", n, width = width),
        None => " ".repeat(width),
    }
}

pub(crate) fn expand_tabs(text: &str, tab_width: usize) -> String {
    if text.contains('\t') {
        text.replace('\t', &" ".repeat(tab_width))
    } else {
        text.to_string()
    }
}

/// Pad or truncate `text` to exactly `width` characters, ending truncated
/// text with `…`.
pub(crate) fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}
