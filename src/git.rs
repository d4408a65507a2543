//! Git command runner for patchview.
//!
//! Provides a wrapper around git commands with captured stdout/stderr and
//! structured error handling. Used to locate the repository root and to
//! produce patches from `git diff <range>`.

use crate::error::{PatchviewError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }
}

/// Spawn git and wait for it, mapping spawn failures to `GitError`.
fn execute_git(cwd: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            PatchviewError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })
}

fn failure(args: &[&str], output: &Output) -> PatchviewError {
    let git_output = GitOutput::from_output(output);
    let exit_code = output.status.code().unwrap_or(-1);
    let error_msg = if git_output.stderr.is_empty() {
        git_output.stdout
    } else {
        git_output.stderr
    };

    PatchviewError::GitError(format!(
        "git {} failed (exit code {}): {}",
        args.first().unwrap_or(&""),
        exit_code,
        error_msg
    ))
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(PatchviewError::GitError)` - On spawn failure or non-zero exit (exit code 3)
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = execute_git(cwd.as_ref(), args)?;

    if output.status.success() {
        Ok(GitOutput::from_output(&output))
    } else {
        Err(failure(args, &output))
    }
}

/// Produce the patch for a revision range via `git diff <range>`.
///
/// Unlike [`run_git`], stdout is returned as raw bytes so the patch can be
/// written back out byte-for-byte. Color and external diff drivers are
/// disabled so the output is always a plain unified diff.
pub fn diff_range<P: AsRef<Path>>(cwd: P, range: &str) -> Result<Vec<u8>> {
    let args = ["diff", "--no-color", "--no-ext-diff", range];
    let output = execute_git(cwd.as_ref(), &args)?;

    if !output.status.success() {
        return Err(failure(&args, &output));
    }

    Ok(output.stdout)
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// # Returns
///
/// * `Ok(Some(PathBuf))` - The absolute path to the repository root
/// * `Ok(None)` - `cwd` is not inside a git repository, or git is unavailable
pub fn find_repo_root<P: AsRef<Path>>(cwd: P) -> Option<PathBuf> {
    run_git(cwd, &["rev-parse", "--show-toplevel"])
        .ok()
        .filter(|output| !output.is_empty())
        .map(|output| PathBuf::from(output.stdout))
}
