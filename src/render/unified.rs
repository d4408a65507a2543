//! Single-column layout.

use super::{FileEntry, RenderOptions, ViewState, expand_tabs, number_cell, render_blocks, style};
use crate::diff::ParsedLine;

/// Render files as `<old> <new> <marker><text>` rows under file and hunk
/// headers.
pub fn render_unified(
    entries: &[FileEntry<'_>],
    state: &ViewState,
    opts: &RenderOptions,
) -> Vec<String> {
    render_blocks(entries, state, opts, |hunk, out| {
        out.extend(hunk.lines.iter().map(|line| unified_row(line, opts)));
    })
}

fn unified_row(line: &ParsedLine, opts: &RenderOptions) -> String {
    let numbers = format!(
        "{} {}",
        number_cell(line.old_line_number, opts.line_number_width),
        number_cell(line.new_line_number, opts.line_number_width)
    );
    let text = format!(
        "{}{}",
        line.kind.marker(),
        expand_tabs(line.text(), opts.tab_width)
    );

    format!(
        "{} {}",
        style::gutter(&numbers, opts.color),
        style::line(&text, line.kind, opts.color)
    )
}
