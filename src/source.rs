//! Where a patch comes from.
//!
//! Every command reads exactly one patch: a file, stdin, or the output of
//! `git diff <range>`. Input is read as raw bytes so it can be written back
//! out unchanged; parsing works on a lossy UTF-8 decoding of it.

use crate::error::{PatchviewError, Result};
use crate::git;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

/// A resolved patch input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchSource {
    Stdin,
    File(PathBuf),
    /// Revision range handed to `git diff`, e.g. `main..HEAD`.
    Git(String),
}

impl PatchSource {
    /// Build a source from CLI options. `--patch -` means stdin.
    pub fn from_args(patch: Option<PathBuf>, git_range: Option<String>) -> Self {
        match (patch, git_range) {
            (Some(path), _) if path.as_os_str() == "-" => PatchSource::Stdin,
            (Some(path), _) => PatchSource::File(path),
            (None, Some(range)) => PatchSource::Git(range),
            (None, None) => PatchSource::Stdin,
        }
    }

    /// Short description used in messages and event details.
    pub fn describe(&self) -> String {
        match self {
            PatchSource::Stdin => "stdin".to_string(),
            PatchSource::File(path) => path.display().to_string(),
            PatchSource::Git(range) => format!("git diff {}", range),
        }
    }

    /// Read the patch bytes.
    ///
    /// `cwd` is where `git diff` runs for [`PatchSource::Git`].
    pub fn read(&self, cwd: &Path) -> Result<Vec<u8>> {
        match self {
            PatchSource::Stdin => read_stdin(),
            PatchSource::File(path) => read_file(path),
            PatchSource::Git(range) => git::diff_range(cwd, range),
        }
    }
}

/// Decode patch bytes for parsing. Invalid UTF-8 becomes U+FFFD.
pub fn decode(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        PatchviewError::UserError(format!(
            "failed to read patch file '{}': {}",
            path.display(),
            e
        ))
    })
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(PatchviewError::UserError(
            "no patch input.\n\n\
             Pass --patch <file>, --git <range>, or pipe a patch on stdin."
                .to_string(),
        ));
    }

    let mut buf = Vec::new();
    stdin.read_to_end(&mut buf).map_err(|e| {
        PatchviewError::UserError(format!("failed to read patch from stdin: {}", e))
    })?;
    Ok(buf)
}
