//! Shared CLI error types and exit codes.

use std::fmt;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Command ran but the result is a failure (e.g. off-series value in strict mode)
    ValidationFailed = 1,
    /// The user's input could not be understood (parse or range failure)
    InvalidInput = 2,
    /// Filesystem or serialization problem
    IoError = 3,
}

/// User-facing CLI error with an associated exit code.
///
/// These are always reported as messages on stderr, never as panics.
#[derive(Debug)]
pub struct CliError {
    message: String,
    exit_code: ExitCode,
}

impl CliError {
    /// Validation failure: the command ran and the answer is "no".
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::ValidationFailed,
        }
    }

    /// Invalid user input (the ParseFailure / RangeFailure kinds).
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::InvalidInput,
        }
    }

    /// I/O or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::IoError,
        }
    }

    /// Exit code to terminate the process with.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.exit_code as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}
