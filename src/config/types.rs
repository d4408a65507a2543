//! Configuration types and defaults for patchview.
//!
//! This module defines enums, constants, and default value functions
//! used by the Config struct.

use serde::{Deserialize, Serialize};

/// Layout used to render hunks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Single column: old number, new number, content.
    #[default]
    Unified,
    /// Two columns: old side on the left, new side on the right.
    Split,
}

/// When to emit ANSI colors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorChoice {
    /// Color only when stdout is a terminal (default).
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve to an on/off decision given whether stdout is a terminal.
    pub fn enabled(self, stdout_is_terminal: bool) -> bool {
        match self {
            Self::Auto => stdout_is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Smallest accepted `split_column_width`.
pub const MIN_SPLIT_COLUMN_WIDTH: usize = 10;

/// Largest accepted `line_number_width`.
pub const MAX_LINE_NUMBER_WIDTH: usize = 10;

/// Largest accepted `tab_width`.
pub const MAX_TAB_WIDTH: usize = 16;

pub fn default_split_column_width() -> usize {
    60
}

pub fn default_line_number_width() -> usize {
    5
}

pub fn default_tab_width() -> usize {
    4
}

pub fn default_download_filename() -> String {
    "changes.patch".to_string()
}

pub fn default_true() -> bool {
    true
}
