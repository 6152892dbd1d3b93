//! Exit code definitions for the s3 CLI
//!
//! Scripts rely on these values. Every failure, whatever its cause, exits
//! with the same non-zero code.

/// Exit codes for the s3 CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every requested operation completed
    Success = 0,

    /// Usage, configuration, local I/O or remote failure
    GeneralError = 1,
}

impl ExitCode {
    /// Convert exit code to i32 for use with std::process::exit
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}
