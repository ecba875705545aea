// tests/common/mod.rs

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::Path;
use std::process::{Command, Output};

pub use launch_test_utils::{Workspace, init_tracing};

/// `PATH` handed to the launcher in tests; enough to find `sh` and `env`.
pub const BASE_PATH: &str = "/usr/bin:/bin";

/// A `launch` invocation from `cwd` with a minimal, predictable environment.
pub fn launch_in(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_launch"));
    cmd.current_dir(cwd)
        .env_clear()
        .env("PATH", BASE_PATH);
    cmd
}

/// Parse `env` output into a map.
pub fn parse_env_output(output: &Output) -> BTreeMap<String, String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
