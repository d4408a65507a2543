//! Two-column layout.
//!
//! A unified hunk only records one sequence of lines, so the two columns
//! are reconstructed by pairing:
//! - a context line appears on both sides
//! - a run of removes is matched position by position with the run of adds
//!   that immediately follows it; the shorter run is padded with empty cells
//! - adds with no preceding removes sit opposite empty left cells

use super::{
    FileEntry, RenderOptions, ViewState, expand_tabs, fit, number_cell, render_blocks, style,
};
use crate::diff::{LineKind, ParsedLine};

/// One row of the split view. `None` is an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRow<'a> {
    pub left: Option<&'a ParsedLine>,
    pub right: Option<&'a ParsedLine>,
}

/// Pair a hunk's lines into left (old) and right (new) cells.
pub fn pair_lines(lines: &[ParsedLine]) -> Vec<SplitRow<'_>> {
    let mut rows = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        match lines[i].kind {
            LineKind::Context => {
                rows.push(SplitRow {
                    left: Some(&lines[i]),
                    right: Some(&lines[i]),
                });
                i += 1;
            }
            LineKind::Remove => {
                let removes_end = run_end(lines, i, LineKind::Remove);
                let adds_end = run_end(lines, removes_end, LineKind::Add);
                let removes = &lines[i..removes_end];
                let adds = &lines[removes_end..adds_end];

                for k in 0..removes.len().max(adds.len()) {
                    rows.push(SplitRow {
                        left: removes.get(k),
                        right: adds.get(k),
                    });
                }
                i = adds_end;
            }
            LineKind::Add => {
                let adds_end = run_end(lines, i, LineKind::Add);
                rows.extend(lines[i..adds_end].iter().map(|line| SplitRow {
                    left: None,
                    right: Some(line),
                }));
                i = adds_end;
            }
        }
    }

    rows
}

fn run_end(lines: &[ParsedLine], start: usize, kind: LineKind) -> usize {
    lines[start..]
        .iter()
        .position(|l| l.kind != kind)
        .map_or(lines.len(), |offset| start + offset)
}

/// Render files as `<old> <left text> │ <new> <right text>` rows.
pub fn render_split(
    entries: &[FileEntry<'_>],
    state: &ViewState,
    opts: &RenderOptions,
) -> Vec<String> {
    render_blocks(entries, state, opts, |hunk, out| {
        out.extend(
            pair_lines(&hunk.lines)
                .into_iter()
                .map(|row| split_row(row, opts)),
        );
    })
}

fn split_row(row: SplitRow<'_>, opts: &RenderOptions) -> String {
    let left = cell(row.left, |l| l.old_line_number, opts);
    let right = cell(row.right, |l| l.new_line_number, opts);
    format!("{} │ {}", left, right).trim_end().to_string()
}

fn cell<F>(line: Option<&ParsedLine>, number: F, opts: &RenderOptions) -> String
where
    F: Fn(&ParsedLine) -> Option<usize>,
{
    let Some(line) = line else {
        return format!(
            "{} {}",
            number_cell(None, opts.line_number_width),
            " ".repeat(opts.split_column_width)
        );
    };

    let text = fit(
        &format!(
            "{}{}",
            line.kind.marker(),
            expand_tabs(line.text(), opts.tab_width)
        ),
        opts.split_column_width,
    );

    format!(
        "{} {}",
        style::gutter(&number_cell(number(line), opts.line_number_width), opts.color),
        style::line(&text, line.kind, opts.color)
    )
}
