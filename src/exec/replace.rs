// src/exec/replace.rs

//! Process replacement via `execvp`.

use std::os::unix::process::CommandExt;
use std::process::Command;

use tracing::debug;

use crate::config::LaunchConfig;
use crate::errors::LaunchError;
use crate::exec::command::CommandLine;
use crate::exec::status::classify_launch_error;

/// Replace the current process image with `command`.
///
/// Only returns on failure. The program is resolved against the `PATH` in
/// `config`, so helpers under `scripts/` are found by bare name. Stdio,
/// PID and signal dispositions carry over to the new image unchanged.
pub fn replace_process(command: &CommandLine, config: &LaunchConfig) -> LaunchError {
    debug!(program = %command.display_name(), "replacing process image");

    let err = Command::new(command.program())
        .args(command.args())
        .envs(config.vars())
        .exec();

    classify_launch_error(&command.display_name(), err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::path::Path;

    #[test]
    fn missing_binary_returns_not_found() {
        let command =
            CommandLine::try_from(vec![OsString::from("/nonexistent/launch-test-binary")]).unwrap();
        let config = LaunchConfig::new(Path::new("/"), None);

        let err = replace_process(&command, &config);
        assert!(matches!(err, LaunchError::CommandNotFound { .. }));
    }
}
