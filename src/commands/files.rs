//! Implementation of the `patchview files` command.
//!
//! Lists each file with its index, line counts and navigation anchor. The
//! anchor (or path) can be passed to `show --file` and `copy --file`.

use super::{Session, load_patch};
use crate::cli::SourceArgs;
use crate::diff::ParsedFile;
use crate::error::Result;
use crate::render::{EMPTY_PLACEHOLDER, file_anchor_id};
use globset::GlobSet;

pub fn cmd_files(session: &Session, source: &SourceArgs) -> Result<()> {
    let patch = load_patch(session, source)?;
    let ignore = session.config.ignore_globset()?;

    for line in file_list(&patch.files, &ignore) {
        println!("{}", line);
    }

    Ok(())
}

fn file_list(files: &[ParsedFile], ignore: &GlobSet) -> Vec<String> {
    if files.is_empty() {
        return vec![EMPTY_PLACEHOLDER.to_string()];
    }

    let mut lines = Vec::new();
    let mut hidden = 0;

    for (index, file) in files.iter().enumerate() {
        if ignore.is_match(&file.path) {
            hidden += 1;
            continue;
        }
        lines.push(format!(
            "{:>3}  {:>6} {:>6}  {}  #{}",
            index,
            format!("+{}", file.added_lines),
            format!("-{}", file.removed_lines),
            file.path,
            file_anchor_id(&file.path)
        ));
    }

    if hidden > 0 {
        lines.push(format!("({} hidden by ignore_globs)", hidden));
    }

    lines
}
