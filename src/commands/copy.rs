//! Implementation of the `patchview copy` command.
//!
//! Copies the whole patch, or one file's section of it, to the clipboard.
//! A missing clipboard is not an error: the command still succeeds and the
//! outcome is only visible in the event log.

use super::{LoadedPatch, Session, load_patch, require_file};
use crate::cli::CopyArgs;
use crate::clipboard;
use crate::error::Result;
use crate::events::{self, Event, EventAction};
use serde_json::json;

pub fn cmd_copy(session: &Session, args: &CopyArgs) -> Result<()> {
    let patch = load_patch(session, &args.source)?;
    let text = copy_text(&patch, args.file.as_deref())?;

    let copied = clipboard::copy_text(&text);
    if copied {
        println!("Copied {} bytes to the clipboard.", text.len());
    }

    events::record(
        &session.ctx,
        &session.config,
        Event::new(EventAction::Copy).with_details(json!({
            "source": patch.source.describe(),
            "file": args.file,
            "bytes": text.len(),
            "copied": copied,
        })),
    );

    Ok(())
}

/// The text to copy: one file's reconstructed section, or the input verbatim.
fn copy_text(patch: &LoadedPatch, file: Option<&str>) -> Result<String> {
    match file {
        Some(target) => {
            let index = require_file(&patch.files, target)?;
            Ok(patch.files[index].to_patch_text())
        }
        None => Ok(patch.text.clone()),
    }
}
