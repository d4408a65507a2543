//! CLI argument parsing for patchview.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::{ColorChoice, RenderMode};
use crate::render::HunkKey;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// patchview: inspect unified diffs produced by coding agents.
///
/// Reads a patch from a file, stdin, or `git diff <range>` and renders it
/// file by file and hunk by hunk, in a unified or side-by-side layout.
#[derive(Parser, Debug)]
#[command(name = "patchview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: .patchview/config.yaml at the repository root).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// When to use colors (overrides the config file).
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    /// Print parser recoveries and other diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for patchview.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the patch.
    ///
    /// Files and hunks start expanded; use --collapse, --collapse-hunk or
    /// --collapse-all to fold them. Hunk keys are shown in each hunk header.
    Show(ShowArgs),

    /// List files in the patch with their anchors and line counts.
    Files(SourceArgs),

    /// Print totals: files, hunks, insertions and deletions.
    Stats(SourceArgs),

    /// Print the parsed patch as JSON.
    Export(ExportArgs),

    /// Copy the patch, or one file of it, to the clipboard.
    Copy(CopyArgs),

    /// Write the patch unmodified to a file (default: changes.patch).
    Download(DownloadArgs),

    /// Write a default config file.
    Init(InitArgs),
}

/// Where to read the patch from. Defaults to stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Patch file to read ("-" for stdin).
    #[arg(long, conflicts_with = "git")]
    pub patch: Option<PathBuf>,

    /// Revision range to diff, e.g. `main..HEAD` (runs `git diff <range>`).
    #[arg(long)]
    pub git: Option<String>,
}

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Layout (default from config).
    #[arg(short, long, value_enum)]
    pub mode: Option<RenderMode>,

    /// Collapse a file (path or anchor id).
    #[arg(long, value_name = "PATH|ANCHOR")]
    pub collapse: Vec<String>,

    /// Collapse a hunk by key (<fileIndex>-<hunkIndex>).
    #[arg(long, value_name = "KEY")]
    pub collapse_hunk: Vec<HunkKey>,

    /// Start with every file collapsed.
    #[arg(long)]
    pub collapse_all: bool,

    /// Show only this file (path or anchor id).
    #[arg(long, value_name = "PATH|ANCHOR")]
    pub file: Option<String>,

    /// Show only files matching this glob (repeatable).
    #[arg(long, value_name = "GLOB")]
    pub only: Vec<String>,

    /// Print directly even if a pager is configured.
    #[arg(long)]
    pub no_pager: bool,
}

/// Arguments for the `export` command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `copy` command.
#[derive(Args, Debug)]
pub struct CopyArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Copy only this file's section (path or anchor id).
    #[arg(long, value_name = "PATH|ANCHOR")]
    pub file: Option<String>,
}

/// Arguments for the `download` command.
#[derive(Args, Debug)]
pub struct DownloadArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output path (default from config: changes.patch).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `init` command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long)]
    pub force: bool,
}
