//! Implementation of the `patchview init` command.
//!
//! Writes a config file with every option at its default value, so users
//! have something to edit. Refuses to overwrite an existing file unless
//! `--force` is given.

use crate::cli::InitArgs;
use crate::config::Config;
use crate::context::WorkspaceContext;
use crate::error::{PatchviewError, Result};
use crate::events::{self, Event, EventAction};
use crate::fs::atomic_write;
use serde_json::json;
use std::path::Path;

const CONFIG_HEADER: &str = "# patchview configuration\n\
# Unknown keys are ignored; missing keys use the defaults shown here.\n";

pub fn cmd_init(explicit_path: Option<&Path>, args: &InitArgs) -> Result<()> {
    let ctx = WorkspaceContext::resolve()?;
    let path = write_default_config(&ctx, explicit_path, args.force)?;

    println!("Wrote {}.", path.display());
    println!("Workspace root: {}", ctx.root.display());
    if !ctx.in_repo {
        println!("Not inside a git repository: the event log is disabled here.");
    }

    events::record(
        &ctx,
        &Config::default(),
        Event::new(EventAction::Init).with_details(json!({
            "path": path.display().to_string(),
            "force": args.force,
        })),
    );

    Ok(())
}

fn write_default_config(
    ctx: &WorkspaceContext,
    explicit_path: Option<&Path>,
    force: bool,
) -> Result<std::path::PathBuf> {
    let path = explicit_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| ctx.config_path());

    if path.exists() && !force {
        return Err(PatchviewError::UserError(format!(
            "config file '{}' already exists.\n\n\
             Use `patchview init --force` to overwrite it.",
            path.display()
        )));
    }

    let content = format!("{}{}", CONFIG_HEADER, Config::default().to_yaml()?);
    atomic_write(&path, content.as_bytes())?;
    Ok(path)
}
