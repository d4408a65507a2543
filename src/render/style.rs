//! Terminal styling keyed by line kind.
//!
//! Styling is applied after padding so escape codes never count toward
//! column widths. With color disabled text passes through unchanged.

use crate::diff::LineKind;
use colored::Colorize;

pub(super) fn line(text: &str, kind: LineKind, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match kind {
        LineKind::Add => text.green().to_string(),
        LineKind::Remove => text.red().to_string(),
        LineKind::Context => text.to_string(),
    }
}

pub(super) fn gutter(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub(super) fn file_header(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub(super) fn hunk_header(text: &str, color: bool) -> String {
    if color {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

pub(super) fn counts(added: usize, removed: usize, color: bool) -> String {
    let plus = format!("+{}", added);
    let minus = format!("-{}", removed);
    if color {
        format!("{} {}", plus.green(), minus.red())
    } else {
        format!("{} {}", plus, minus)
    }
}
