//! Unified-diff parsing for patchview.
//!
//! Turns a patch (the text `git diff` produces) into an ordered list of
//! [`ParsedFile`]s, each holding its hunks and classified lines with old/new
//! line numbers. Parsing is deterministic and never fails; see
//! [`parse_patch_with_diagnostics`] for the recoveries it performs.

mod helpers;
mod model;
mod parser;


// Re-export public API
pub use model::{
    DiffStats, LineKind, ParseDiagnostic, ParseOutcome, ParsedFile, ParsedHunk, ParsedLine,
};
pub use parser::{parse_patch, parse_patch_with_diagnostics};
