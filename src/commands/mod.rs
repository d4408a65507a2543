//! Command implementations for patchview.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the pieces every command shares: the resolved
//! [`Session`] (context, config, color) and patch loading.

mod copy;
mod download;
mod export;
mod files;
mod init;
mod show;
mod stats;

use crate::cli::{Cli, Command, SourceArgs};
use crate::config::Config;
use crate::context::WorkspaceContext;
use crate::diff::{ParseOutcome, ParsedFile, parse_patch_with_diagnostics};
use crate::error::{PatchviewError, Result};
use crate::render::find_file;
use crate::source::{self, PatchSource};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    // `init` must work when the existing config is broken, so it resolves
    // its own context instead of loading config through a Session.
    if let Command::Init(args) = &cli.command {
        return init::cmd_init(cli.config.as_deref(), args);
    }

    let session = Session::from_cli(&cli)?;

    match cli.command {
        Command::Show(args) => show::cmd_show(&session, args),
        Command::Files(source) => files::cmd_files(&session, &source),
        Command::Stats(source) => stats::cmd_stats(&session, &source),
        Command::Export(args) => export::cmd_export(&session, &args),
        Command::Copy(args) => copy::cmd_copy(&session, &args),
        Command::Download(args) => download::cmd_download(&session, &args),
        Command::Init(_) => unreachable!("init is dispatched above"),
    }
}

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct Session {
    pub ctx: WorkspaceContext,
    pub config: Config,
    /// Whether rendered output should carry ANSI colors.
    pub color: bool,
    pub verbose: bool,
}

impl Session {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let ctx = WorkspaceContext::resolve()?;
        let config = load_config(&ctx, cli.config.as_ref())?;

        let choice = cli.color.unwrap_or(config.color);
        let color = choice.enabled(std::io::stdout().is_terminal());
        colored::control::set_override(color);

        Ok(Self {
            ctx,
            config,
            color,
            verbose: cli.verbose,
        })
    }

    /// Session rooted at `ctx` with the given config, colors off.
    #[cfg(test)]
    pub(crate) fn for_tests(ctx: WorkspaceContext, config: Config) -> Self {
        Self {
            ctx,
            config,
            color: false,
            verbose: false,
        }
    }
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(ctx: &WorkspaceContext, explicit: Option<&PathBuf>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => Config::load_or_default(ctx.config_path()),
    }
}

/// A patch read from its source and parsed.
#[derive(Debug, Clone)]
pub struct LoadedPatch {
    pub source: PatchSource,
    /// The input exactly as read.
    pub raw: Vec<u8>,
    /// `raw` decoded for parsing and the clipboard.
    pub text: String,
    pub files: Vec<ParsedFile>,
}

/// Read and parse the patch named by `args`.
///
/// Parser recoveries are printed to stderr in verbose mode only.
pub fn load_patch(session: &Session, args: &SourceArgs) -> Result<LoadedPatch> {
    let source = PatchSource::from_args(args.patch.clone(), args.git.clone());
    let raw = source.read(&session.ctx.cwd)?;
    let text = source::decode(&raw);
    let ParseOutcome { files, diagnostics } = parse_patch_with_diagnostics(&text);

    if session.verbose {
        for diag in &diagnostics {
            eprintln!("Warning: {}:{}: {}", source.describe(), diag.line, diag.message);
        }
    }

    Ok(LoadedPatch {
        source,
        raw,
        text,
        files,
    })
}

/// Resolve a path-or-anchor to a file index, with an actionable error.
pub fn require_file(files: &[ParsedFile], target: &str) -> Result<usize> {
    find_file(files, target).ok_or_else(|| {
        PatchviewError::UserError(format!(
            "file '{}' not found in patch.\n\n\
             Use `patchview files` to list paths and anchors.",
            target
        ))
    })
}
