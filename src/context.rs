//! Workspace context resolution for patchview.
//!
//! Finds where patchview keeps its state: `<repo root>/.patchview/` when run
//! inside a git repository, otherwise `<cwd>/.patchview/`. The config file
//! lives there, and so does the event log (repositories only).

use crate::error::{PatchviewError, Result};
use crate::git;
use std::env;
use std::path::{Path, PathBuf};

/// Name of the state directory under the workspace root.
pub const STATE_DIR_NAME: &str = ".patchview";

/// Resolved paths for one patchview invocation. All paths are absolute.
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    /// Directory commands run in (used for `git diff`).
    pub cwd: PathBuf,

    /// Repository root, or `cwd` when outside a repository.
    pub root: PathBuf,

    /// Whether `root` is a git repository.
    pub in_repo: bool,

    /// `{root}/.patchview/`
    pub state_dir: PathBuf,
}

impl WorkspaceContext {
    /// Resolve the context from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            PatchviewError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::resolve_from(cwd))
    }

    /// Resolve the context from a specific directory.
    ///
    /// Never fails: outside a repository the directory itself is the root.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Self {
        let cwd = cwd.as_ref().to_path_buf();
        let (root, in_repo) = match git::find_repo_root(&cwd) {
            Some(root) => (root, true),
            None => (cwd.clone(), false),
        };
        let state_dir = root.join(STATE_DIR_NAME);

        Self {
            cwd,
            root,
            in_repo,
            state_dir,
        }
    }

    /// Path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.state_dir.join("config.yaml")
    }

    /// Path to the NDJSON event log.
    pub fn events_file(&self) -> PathBuf {
        self.state_dir.join("events.ndjson")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{DirGuard, create_test_repo};
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_from_repo_root() {
        let temp_dir = create_test_repo();
        let ctx = WorkspaceContext::resolve_from(temp_dir.path());

        let expected_root = temp_dir.path().canonicalize().unwrap();
        assert_eq!(ctx.root.canonicalize().unwrap(), expected_root);
        assert!(ctx.in_repo);
        assert!(ctx.state_dir.ends_with(".patchview"));
    }

    #[test]
    fn test_resolve_from_subdirectory() {
        let temp_dir = create_test_repo();
        let subdir = temp_dir.path().join("src").join("nested");
        std::fs::create_dir_all(&subdir).unwrap();

        let ctx = WorkspaceContext::resolve_from(&subdir);

        let expected_root = temp_dir.path().canonicalize().unwrap();
        assert_eq!(ctx.root.canonicalize().unwrap(), expected_root);
        assert_eq!(ctx.cwd, subdir);
    }

    #[test]
    fn test_resolve_outside_repo_uses_cwd() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = WorkspaceContext::resolve_from(temp_dir.path());

        assert!(!ctx.in_repo);
        assert_eq!(ctx.root, temp_dir.path());
        assert_eq!(ctx.state_dir, temp_dir.path().join(".patchview"));
    }

    #[test]
    fn test_paths() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = WorkspaceContext::resolve_from(temp_dir.path());

        assert_eq!(ctx.config_path(), ctx.state_dir.join("config.yaml"));
        assert_eq!(ctx.events_file(), ctx.state_dir.join("events.ndjson"));
    }

    #[test]
    #[serial]
    fn test_resolve_uses_current_dir() {
        let temp_dir = create_test_repo();
        let _guard = DirGuard::new(temp_dir.path());

        let ctx = WorkspaceContext::resolve().unwrap();
        assert!(ctx.in_repo);
        assert_eq!(
            ctx.root.canonicalize().unwrap(),
            temp_dir.path().canonicalize().unwrap()
        );
    }
}
