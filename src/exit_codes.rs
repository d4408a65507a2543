//! Exit code constants for the patchview CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, unreadable input)
//! - 3: Git operation failure
//! - 4: Failure writing output (download, init, pager)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or unreadable patch input.
pub const USER_ERROR: i32 = 1;

/// Git operation failure: `git diff` could not be run or exited non-zero.
pub const GIT_FAILURE: i32 = 3;

/// Output failure: a file or pager could not be written.
pub const IO_FAILURE: i32 = 4;
