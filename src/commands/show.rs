//! Implementation of the `patchview show` command.
//!
//! Selects which files to display (`--file`, `--only`, `ignore_globs`),
//! builds the initial collapse state from flags, renders, and writes the
//! result to stdout or the configured pager.

use super::{Session, load_patch, require_file};
use crate::cli::ShowArgs;
use crate::config::{Config, build_globset};
use crate::diff::ParsedFile;
use crate::error::{PatchviewError, Result};
use crate::render::{self, FileEntry, NO_MATCH_PLACEHOLDER, RenderOptions, ViewState};
use std::io::{IsTerminal, Write};
use std::process::{Command, Stdio};

pub fn cmd_show(session: &Session, args: ShowArgs) -> Result<()> {
    let patch = load_patch(session, &args.source)?;
    let files = &patch.files;

    let visible = select_files(files, &args, &session.config)?;
    let state = initial_state(files, &args)?;
    let mode = args.mode.unwrap_or(session.config.default_mode);
    let opts = RenderOptions::from_config(&session.config, mode, session.color);

    let lines = if !files.is_empty() && visible.is_empty() {
        vec![NO_MATCH_PLACEHOLDER.to_string()]
    } else {
        render::render(&visible, &state, &opts)
    };

    let pager = if args.no_pager || !std::io::stdout().is_terminal() {
        None
    } else {
        session.config.pager_command()?
    };

    match pager {
        Some(command) => page(&lines, &command),
        None => {
            for line in &lines {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

/// Files to render, keeping their indices in the full list.
///
/// `--file` picks exactly one file and bypasses `ignore_globs`; otherwise
/// ignored files are dropped and `--only` globs, when given, must match.
fn select_files<'a>(
    files: &'a [ParsedFile],
    args: &ShowArgs,
    config: &Config,
) -> Result<Vec<FileEntry<'a>>> {
    let all = render::entries(files);

    if let Some(target) = &args.file {
        let index = require_file(files, target)?;
        return Ok(vec![all[index]]);
    }

    let ignore = config.ignore_globset()?;
    let only = build_globset(&args.only, "--only")?;

    Ok(all
        .into_iter()
        .filter(|e| !ignore.is_match(&e.file.path))
        .filter(|e| args.only.is_empty() || only.is_match(&e.file.path))
        .collect())
}

/// Collapse state requested on the command line.
///
/// `--collapse` and `--collapse-hunk` only ever collapse, so combining them
/// with `--collapse-all` is harmless.
fn initial_state(files: &[ParsedFile], args: &ShowArgs) -> Result<ViewState> {
    let mut state = if args.collapse_all {
        ViewState::all_collapsed(files)
    } else {
        ViewState::expanded()
    };

    for target in &args.collapse {
        let path = &files[require_file(files, target)?].path;
        if !state.is_file_collapsed(path) {
            state.toggle_file(path);
        }
    }

    for &key in &args.collapse_hunk {
        let exists = files
            .get(key.file_index)
            .is_some_and(|f| key.hunk_index < f.hunks.len());
        if !exists {
            return Err(PatchviewError::UserError(format!(
                "hunk '{}' does not exist in this patch.\n\n\
                 Hunk keys are shown in brackets in each hunk header.",
                key
            )));
        }
        if !state.is_hunk_collapsed(key) {
            state.toggle_hunk(key);
        }
    }

    Ok(state)
}

/// Pipe rendered lines through the pager.
fn page(lines: &[String], command: &[String]) -> Result<()> {
    let (program, pager_args) = command
        .split_first()
        .ok_or_else(|| PatchviewError::UserError("pager command is empty".to_string()))?;

    let mut child = Command::new(program)
        .args(pager_args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| PatchviewError::IoError(format!("failed to start pager '{}': {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        for line in lines {
            // The user quitting the pager early closes the pipe; stop quietly.
            if writeln!(stdin, "{}", line).is_err() {
                break;
            }
        }
    }

    child
        .wait()
        .map_err(|e| PatchviewError::IoError(format!("pager '{}' failed: {}", program, e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SourceArgs;
    use crate::diff::parse_patch;
    use crate::render::HunkKey;

    const PATCH: &str = "+++ b/src/lib.rs
@@ -1 +1 @@
-a
+b
@@ -9 +9 @@
-c
+d
+++ b/docs/guide.md
@@ -1 +1 @@
-old
+new
+++ b/Cargo.lock
@@ -1 +1 @@
-1
+2
";

    fn args() -> ShowArgs {
        ShowArgs {
            source: SourceArgs::default(),
            mode: None,
            collapse: Vec::new(),
            collapse_hunk: Vec::new(),
            collapse_all: false,
            file: None,
            only: Vec::new(),
            no_pager: true,
        }
    }

    fn paths(entries: &[FileEntry<'_>]) -> Vec<(usize, String)> {
        entries
            .iter()
            .map(|e| (e.index, e.file.path.clone()))
            .collect()
    }

    #[test]
    fn test_select_all_by_default() {
        let files = parse_patch(PATCH);
        let selected = select_files(&files, &args(), &Config::default()).unwrap();
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_select_only_glob_keeps_indices() {
        let files = parse_patch(PATCH);
        let mut a = args();
        a.only = vec!["docs/**".to_string()];

        let selected = select_files(&files, &a, &Config::default()).unwrap();
        assert_eq!(paths(&selected), vec![(1, "docs/guide.md".to_string())]);
    }

    #[test]
    fn test_select_respects_ignore_globs() {
        let files = parse_patch(PATCH);
        let config = Config {
            ignore_globs: vec!["*.lock".to_string()],
            ..Config::default()
        };

        let selected = select_files(&files, &args(), &config).unwrap();
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|e| e.file.path != "Cargo.lock"));
    }

    #[test]
    fn test_select_file_by_anchor_bypasses_ignore() {
        let files = parse_patch(PATCH);
        let config = Config {
            ignore_globs: vec!["*.lock".to_string()],
            ..Config::default()
        };
        let mut a = args();
        a.file = Some("file-Cargo-lock".to_string());

        let selected = select_files(&files, &a, &config).unwrap();
        assert_eq!(paths(&selected), vec![(2, "Cargo.lock".to_string())]);
    }

    #[test]
    fn test_select_unknown_file_is_user_error() {
        let files = parse_patch(PATCH);
        let mut a = args();
        a.file = Some("nope.rs".to_string());

        let err = select_files(&files, &a, &Config::default()).unwrap_err();
        assert!(matches!(err, PatchviewError::UserError(_)));
        assert!(err.to_string().contains("patchview files"));
    }

    #[test]
    fn test_select_invalid_only_glob() {
        let files = parse_patch(PATCH);
        let mut a = args();
        a.only = vec!["src/[".to_string()];

        let err = select_files(&files, &a, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("--only"));
    }

    #[test]
    fn test_initial_state_expanded() {
        let files = parse_patch(PATCH);
        assert_eq!(initial_state(&files, &args()).unwrap(), ViewState::expanded());
    }

    #[test]
    fn test_initial_state_collapse_flags() {
        let files = parse_patch(PATCH);
        let mut a = args();
        a.collapse = vec!["file-docs-guide-md".to_string()];
        a.collapse_hunk = vec![HunkKey::new(0, 1)];

        let state = initial_state(&files, &a).unwrap();
        assert!(state.is_file_collapsed("docs/guide.md"));
        assert!(!state.is_file_collapsed("src/lib.rs"));
        assert!(state.is_hunk_collapsed(HunkKey::new(0, 1)));
        assert!(!state.is_hunk_collapsed(HunkKey::new(0, 0)));
    }

    #[test]
    fn test_collapse_all_with_collapse_stays_collapsed() {
        let files = parse_patch(PATCH);
        let mut a = args();
        a.collapse_all = true;
        a.collapse = vec!["src/lib.rs".to_string()];

        let state = initial_state(&files, &a).unwrap();
        assert!(state.is_file_collapsed("src/lib.rs"));
        assert!(state.is_file_collapsed("Cargo.lock"));
    }

    #[test]
    fn test_unknown_hunk_key_is_user_error() {
        let files = parse_patch(PATCH);
        let mut a = args();
        a.collapse_hunk = vec![HunkKey::new(1, 5)];

        let err = initial_state(&files, &a).unwrap_err();
        assert!(err.to_string().contains("1-5"));
    }
}
