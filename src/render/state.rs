//! Expand/collapse state for the diff view.
//!
//! Everything starts expanded. Files are keyed by path, hunks by
//! `"<fileIndex>-<hunkIndex>"` where the indices refer to positions in the
//! full parse result, not in a filtered subset.

use crate::diff::ParsedFile;
use crate::error::PatchviewError;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Identifies one hunk by file position and hunk position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HunkKey {
    pub file_index: usize,
    pub hunk_index: usize,
}

impl HunkKey {
    pub fn new(file_index: usize, hunk_index: usize) -> Self {
        Self {
            file_index,
            hunk_index,
        }
    }
}

impl fmt::Display for HunkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.file_index, self.hunk_index)
    }
}

impl FromStr for HunkKey {
    type Err = PatchviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            PatchviewError::UserError(format!(
                "invalid hunk key '{}': expected <fileIndex>-<hunkIndex>, e.g. 0-2",
                s
            ))
        };

        let (file, hunk) = s.split_once('-').ok_or_else(invalid)?;
        let file_index = file.trim().parse().map_err(|_| invalid())?;
        let hunk_index = hunk.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(file_index, hunk_index))
    }
}

/// Which files and hunks are currently collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    collapsed_files: BTreeSet<String>,
    collapsed_hunks: BTreeSet<HunkKey>,
}

impl ViewState {
    /// Everything expanded.
    pub fn expanded() -> Self {
        Self::default()
    }

    /// Every file in `files` collapsed.
    pub fn all_collapsed(files: &[ParsedFile]) -> Self {
        Self {
            collapsed_files: files.iter().map(|f| f.path.clone()).collect(),
            collapsed_hunks: BTreeSet::new(),
        }
    }

    /// Flip a file's state. Returns true if the file is now collapsed.
    pub fn toggle_file(&mut self, path: &str) -> bool {
        if self.collapsed_files.remove(path) {
            false
        } else {
            self.collapsed_files.insert(path.to_string());
            true
        }
    }

    /// Flip a hunk's state. Returns true if the hunk is now collapsed.
    pub fn toggle_hunk(&mut self, key: HunkKey) -> bool {
        if self.collapsed_hunks.remove(&key) {
            false
        } else {
            self.collapsed_hunks.insert(key);
            true
        }
    }

    pub fn is_file_collapsed(&self, path: &str) -> bool {
        self.collapsed_files.contains(path)
    }

    pub fn is_hunk_collapsed(&self, key: HunkKey) -> bool {
        self.collapsed_hunks.contains(&key)
    }
}
