// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod types;

use tracing::{debug, trace};

use crate::cli::CliArgs;
use crate::config::{LaunchConfig, Settings, launch_config_from_process, load_settings};
use crate::errors::Result;
use crate::exec::{CommandLine, exit_code_of};
use crate::types::LaunchMode;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the command line (must name a program)
/// - launcher settings from `LAUNCH_*`
/// - the launch configuration (working directory + inherited `PATH`)
/// - process replacement or spawn-and-wait
///
/// Returns the exit code to report. In replace mode a successful launch
/// never returns.
pub async fn run(args: CliArgs) -> Result<i32> {
    let command = CommandLine::try_from(args.command)?;
    let settings = load_settings()?;
    let config = launch_config_from_process()?;
    launch(&command, &config, settings).await
}

/// Launch `command` with an already resolved configuration.
pub async fn launch(command: &CommandLine, config: &LaunchConfig, settings: Settings) -> Result<i32> {
    let mode = settings.mode.effective();
    if mode != settings.mode {
        debug!(requested = %settings.mode, used = %mode, "process replacement unavailable; spawning instead");
    }

    debug!(program = %command.display_name(), %mode, "launch configuration resolved");
    for (name, value) in config.vars() {
        trace!(var = name, value = %value.to_string_lossy(), "child environment");
    }

    if settings.dry_run {
        print_dry_run(command, config, mode);
        return Ok(0);
    }

    #[cfg(unix)]
    {
        if mode == LaunchMode::Replace {
            return Err(exec::replace_process(command, config));
        }
    }

    let status = exec::spawn_and_wait(command, config).await?;
    Ok(exit_code_of(status))
}

/// Dry-run output: the variables that would be set and the command line.
fn print_dry_run(command: &CommandLine, config: &LaunchConfig, mode: LaunchMode) {
    println!("launch dry-run");
    println!("  mode = {mode}");
    println!();

    println!("env:");
    for (name, value) in config.vars() {
        println!("  {name}={}", value.to_string_lossy());
    }
    println!();

    println!("command:");
    println!("  program: {}", command.display_name());
    if !command.args().is_empty() {
        println!("  args: {:?}", command.args());
    }

    debug!("dry-run complete (no execution)");
}
