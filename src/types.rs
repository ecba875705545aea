// src/types.rs

use std::fmt;
use std::str::FromStr;

/// How control is handed to the target command.
///
/// - `Replace`: the launcher process image is replaced by the command
///   (unix `exec`). Same PID, no wait step.
/// - `Spawn`: the command runs as a child with inherited stdio; the launcher
///   waits and mirrors its exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    Replace,
    Spawn,
}

impl LaunchMode {
    /// Whether this host can replace the current process image.
    pub const fn replacement_supported() -> bool {
        cfg!(unix)
    }

    /// The mode actually used on this host. `Replace` degrades to `Spawn`
    /// where process replacement does not exist.
    pub fn effective(self) -> Self {
        match self {
            LaunchMode::Replace if !Self::replacement_supported() => LaunchMode::Spawn,
            other => other,
        }
    }
}

impl Default for LaunchMode {
    fn default() -> Self {
        if Self::replacement_supported() {
            LaunchMode::Replace
        } else {
            LaunchMode::Spawn
        }
    }
}

impl FromStr for LaunchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exec" | "replace" => Ok(LaunchMode::Replace),
            "spawn" => Ok(LaunchMode::Spawn),
            other => Err(format!(
                "invalid LAUNCH_MODE: {other} (expected \"exec\" or \"spawn\")"
            )),
        }
    }
}

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchMode::Replace => f.write_str("exec"),
            LaunchMode::Spawn => f.write_str("spawn"),
        }
    }
}
