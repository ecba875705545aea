// src/exec/spawn.rs

//! Spawn-and-wait fallback for hosts (or callers) without process
//! replacement.

use std::process::{ExitStatus, Stdio};

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::LaunchConfig;
use crate::errors::Result;
use crate::exec::command::CommandLine;
use crate::exec::status::{classify_launch_error, exit_code_of};

/// Run `command` as a child with the launch environment and wait for it.
///
/// Stdio is inherited so the child's streams reach the caller untouched.
/// No signal handlers are installed: a terminal interrupt reaches the
/// child through the foreground process group.
pub async fn spawn_and_wait(command: &CommandLine, config: &LaunchConfig) -> Result<ExitStatus> {
    let name = command.display_name();
    debug!(program = %name, "spawning child process");

    let mut cmd = Command::new(command.program());
    cmd.args(command.args())
        .envs(config.vars())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut child = cmd
        .spawn()
        .map_err(|err| classify_launch_error(&name, err))?;

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for process of command '{name}'"))?;

    info!(
        program = %name,
        exit_code = exit_code_of(status),
        success = status.success(),
        "child process exited"
    );

    Ok(status)
}
