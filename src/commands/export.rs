//! Implementation of the `patchview export` command.
//!
//! Prints the parsed patch as a JSON array of files, the shape a dashboard
//! front-end consumes directly.

use super::{Session, load_patch};
use crate::cli::ExportArgs;
use crate::diff::ParsedFile;
use crate::error::{PatchviewError, Result};

pub fn cmd_export(session: &Session, args: &ExportArgs) -> Result<()> {
    let patch = load_patch(session, &args.source)?;
    println!("{}", to_json(&patch.files, args.pretty)?);
    Ok(())
}

fn to_json(files: &[ParsedFile], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(files)
    } else {
        serde_json::to_string(files)
    };
    json.map_err(|e| PatchviewError::UserError(format!("failed to serialize patch: {}", e)))
}
