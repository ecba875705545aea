// src/errors.rs

//! Crate-wide error type and the exit codes each failure maps to.

use thiserror::Error;

/// Exit code for malformed invocations (no command, bad `LAUNCH_*` value).
pub const EXIT_USAGE: i32 = 2;
/// Exit code for failures of the launcher itself before anything was started.
pub const EXIT_INTERNAL: i32 = 125;
/// Exit code when the command exists but cannot be executed.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;
/// Exit code when the command cannot be found on the search path.
pub const EXIT_NOT_FOUND: i32 = 127;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("no command supplied")]
    NoCommand,

    #[error("invalid invocation: {0}")]
    Invocation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("cannot determine working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    #[error("{program}: command not found")]
    CommandNotFound { program: String },

    #[error("{program}: {source}")]
    CommandInvocation {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LaunchError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::NoCommand | LaunchError::Invocation(_) | LaunchError::ConfigError(_) => {
                EXIT_USAGE
            }
            LaunchError::WorkingDirectory(_) | LaunchError::Other(_) => EXIT_INTERNAL,
            LaunchError::CommandNotFound { .. } => EXIT_NOT_FOUND,
            LaunchError::CommandInvocation { .. } => EXIT_NOT_EXECUTABLE,
        }
    }

    /// True for errors raised before any command was looked up.
    pub fn is_invocation_error(&self) -> bool {
        self.exit_code() == EXIT_USAGE
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, LaunchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_shell_conventions() {
        assert_eq!(LaunchError::NoCommand.exit_code(), 2);
        assert_eq!(
            LaunchError::CommandNotFound {
                program: "nope".into()
            }
            .exit_code(),
            127
        );
        let denied = LaunchError::CommandInvocation {
            program: "./x".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(denied.exit_code(), 126);
        let cwd = LaunchError::WorkingDirectory(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(cwd.exit_code(), 125);
    }

    #[test]
    fn not_found_message_reads_like_a_shell() {
        let err = LaunchError::CommandNotFound {
            program: "frobnicate".into(),
        };
        assert_eq!(err.to_string(), "frobnicate: command not found");
    }

    #[test]
    fn only_usage_failures_are_invocation_errors() {
        assert!(LaunchError::NoCommand.is_invocation_error());
        assert!(LaunchError::ConfigError("bad".into()).is_invocation_error());
        assert!(
            !LaunchError::CommandNotFound {
                program: "x".into()
            }
            .is_invocation_error()
        );
    }
}
