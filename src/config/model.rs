//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for patchview.
///
/// This struct represents the contents of `.patchview/config.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Rendering
    // =========================================================================
    /// Layout used when `show` is run without `--mode`.
    #[serde(default)]
    pub default_mode: RenderMode,

    /// When to emit ANSI colors (overridden by `--color`).
    #[serde(default)]
    pub color: ColorChoice,

    /// Width of each content column in split mode.
    #[serde(default = "default_split_column_width")]
    pub split_column_width: usize,

    /// Width of each line-number gutter.
    #[serde(default = "default_line_number_width")]
    pub line_number_width: usize,

    /// Number of spaces a tab expands to.
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// Files hidden from `show` and `files` (glob patterns on the file path).
    #[serde(default)]
    pub ignore_globs: Vec<String>,

    // =========================================================================
    // Output
    // =========================================================================
    /// Default file written by `download`.
    #[serde(default = "default_download_filename")]
    pub download_filename: String,

    /// Pager command line for `show`, e.g. `less -R`. Unset prints directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pager: Option<String>,

    /// Whether side-effecting commands append to the event log.
    #[serde(default = "default_true")]
    pub event_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: RenderMode::default(),
            color: ColorChoice::default(),
            split_column_width: default_split_column_width(),
            line_number_width: default_line_number_width(),
            tab_width: default_tab_width(),
            ignore_globs: Vec::new(),
            download_filename: default_download_filename(),
            pager: None,
            event_log: default_true(),
        }
    }
}
