//! Process exit codes

/// The harness ran to completion, whatever the hooks reported
pub const EXIT_SUCCESS: i32 = 0;

/// A prerequisite was missing or setup failed
pub const EXIT_ERROR: i32 = 1;
