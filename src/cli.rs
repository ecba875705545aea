// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! `launch` has no flags of its own. Help and version flags are disabled and
//! the single positional accepts hyphen values, so everything after the
//! program name (including `--help`, `-x` or `--`) is forwarded verbatim.

use std::ffi::OsString;

use clap::Parser;

use crate::errors::{LaunchError, Result};

pub const USAGE: &str = "usage: launch <command> [args...]";

/// Command-line arguments for `launch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "launch",
    about = "Run a command with PYTHONPATH, PYTHONDONTWRITEBYTECODE and PATH prepared.",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Command to run, followed by its arguments.
    #[arg(
        value_name = "COMMAND",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<OsString>,
}

/// Parse the process arguments.
pub fn parse() -> Result<CliArgs> {
    parse_from(std::env::args_os())
}

/// Parse an explicit argv (first item is the binary name).
pub fn parse_from<I, T>(argv: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(argv).map_err(|e| LaunchError::Invocation(e.to_string()))
}
