//! Implementation of the `patchview stats` command.

use super::{Session, load_patch};
use crate::cli::SourceArgs;
use crate::diff::DiffStats;
use crate::error::Result;
use crate::render::EMPTY_PLACEHOLDER;

/// Print a one-line summary, or the empty-state placeholder.
pub fn cmd_stats(session: &Session, source: &SourceArgs) -> Result<()> {
    let patch = load_patch(session, source)?;

    if patch.files.is_empty() {
        println!("{}", EMPTY_PLACEHOLDER);
        return Ok(());
    }

    let stats = DiffStats::from_files(&patch.files);
    println!("{}", stats);
    if session.verbose {
        println!("{} hunks", stats.hunks);
    }

    Ok(())
}
