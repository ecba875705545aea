// src/exec/status.rs

//! Exit status conventions shared by both launch paths.

use std::io;
use std::process::ExitStatus;

use crate::errors::LaunchError;

/// Offset added to a signal number when a child is killed by a signal.
pub const SIGNAL_EXIT_BASE: i32 = 128;

/// Translate a child's exit status into the launcher's own exit code.
///
/// Normal exits are mirrored exactly; signal deaths become
/// `128 + signal`. A status with neither (not expected in practice) is
/// reported as 1.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return SIGNAL_EXIT_BASE + signal;
        }
    }

    1
}

/// Classify a failure to start `program`.
///
/// `NotFound` means the search path had no match; every other failure
/// (permission denied, not an executable image, a directory, ...) means the
/// program was located but could not be started.
pub fn classify_launch_error(program: &str, err: io::Error) -> LaunchError {
    match err.kind() {
        io::ErrorKind::NotFound => LaunchError::CommandNotFound {
            program: program.to_string(),
        },
        _ => LaunchError::CommandInvocation {
            program: program.to_string(),
            source: err,
        },
    }
}
