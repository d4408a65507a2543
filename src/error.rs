//! Error types for the patchview CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Parsing itself never fails; these errors come from the surrounding layers
//! (reading input, running git, loading config, writing output).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for patchview operations.
#[derive(Error, Debug)]
pub enum PatchviewError {
    /// User provided invalid arguments, config, or input.
    #[error("{0}")]
    UserError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Writing output (file, pager) failed.
    #[error("I/O failure: {0}")]
    IoError(String),
}

impl PatchviewError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PatchviewError::UserError(_) => exit_codes::USER_ERROR,
            PatchviewError::GitError(_) => exit_codes::GIT_FAILURE,
            PatchviewError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for patchview operations.
pub type Result<T> = std::result::Result<T, PatchviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PatchviewError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn git_error_has_correct_exit_code() {
        let err = PatchviewError::GitError("unknown revision".to_string());
        assert_eq!(err.exit_code(), exit_codes::GIT_FAILURE);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = PatchviewError::IoError("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = PatchviewError::GitError("bad range".to_string());
        assert_eq!(err.to_string(), "Git operation failed: bad range");

        let err = PatchviewError::IoError("cannot write changes.patch".to_string());
        assert_eq!(err.to_string(), "I/O failure: cannot write changes.patch");
    }
}
