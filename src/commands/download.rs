//! Implementation of the `patchview download` command.
//!
//! Writes the patch exactly as it was read (no re-serialization) so the
//! file can be fed to `git apply`.

use super::{Session, load_patch};
use crate::cli::DownloadArgs;
use crate::error::Result;
use crate::events::{self, Event, EventAction};
use crate::fs::atomic_write;
use serde_json::json;
use std::path::PathBuf;

/// MIME type recorded for downloaded patches.
pub const PATCH_MIME_TYPE: &str = "text/plain";

pub fn cmd_download(session: &Session, args: &DownloadArgs) -> Result<()> {
    let patch = load_patch(session, &args.source)?;
    let output = output_path(session, args);

    atomic_write(&output, &patch.raw)?;

    println!(
        "Wrote {} ({} bytes, {}).",
        output.display(),
        patch.raw.len(),
        PATCH_MIME_TYPE
    );

    events::record(
        &session.ctx,
        &session.config,
        Event::new(EventAction::Download).with_details(json!({
            "source": patch.source.describe(),
            "path": output.display().to_string(),
            "bytes": patch.raw.len(),
            "mime_type": PATCH_MIME_TYPE,
        })),
    );

    Ok(())
}

/// `--output`, else `download_filename`, relative to the working directory.
fn output_path(session: &Session, args: &DownloadArgs) -> PathBuf {
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&session.config.download_filename));

    if path.is_absolute() {
        path
    } else {
        session.ctx.cwd.join(path)
    }
}
