// src/config/model.rs

use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::types::LaunchMode;

/// Interpreter module search path, set to the working directory.
pub const MODULE_PATH_VAR: &str = "PYTHONPATH";
/// Bytecode-cache suppression flag.
pub const NO_BYTECODE_VAR: &str = "PYTHONDONTWRITEBYTECODE";
/// Executable search path, extended with [`SCRIPTS_DIR`].
pub const SEARCH_PATH_VAR: &str = "PATH";

/// Relative directory appended to the executable search path.
pub const SCRIPTS_DIR: &str = "scripts";

#[cfg(windows)]
pub const SEARCH_PATH_SEPARATOR: &str = ";";
#[cfg(not(windows))]
pub const SEARCH_PATH_SEPARATOR: &str = ":";

/// The fixed set of variables handed to the launched command.
///
/// Built once per invocation, before anything is started, and never mutated
/// afterwards. Every field is an `OsString` so non-UTF-8 working directories
/// and search paths pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    module_path: OsString,
    search_path: OsString,
}

impl LaunchConfig {
    /// Build the configuration for a launch from `cwd` with the given
    /// inherited `PATH` value (`None` when the variable is unset).
    pub fn new(cwd: &Path, inherited_path: Option<&OsStr>) -> Self {
        Self {
            module_path: cwd.as_os_str().to_os_string(),
            search_path: augment_search_path(inherited_path),
        }
    }

    pub fn module_path(&self) -> &OsStr {
        &self.module_path
    }

    pub fn search_path(&self) -> &OsStr {
        &self.search_path
    }

    /// Variables in the order they are applied.
    ///
    /// Suitable for `Command::envs` on both `std::process` and
    /// `tokio::process` builders.
    pub fn vars(&self) -> [(&'static str, &OsStr); 3] {
        [
            (MODULE_PATH_VAR, self.module_path.as_os_str()),
            (NO_BYTECODE_VAR, OsStr::new("1")),
            (SEARCH_PATH_VAR, self.search_path.as_os_str()),
        ]
    }
}

/// Append [`SCRIPTS_DIR`] to an inherited search path.
///
/// Existing entries keep their order. An unset or empty inherited value
/// yields just `scripts`: a leading separator would add an implicit
/// current-directory entry on POSIX hosts.
pub fn augment_search_path(inherited: Option<&OsStr>) -> OsString {
    let mut path = OsString::new();
    if let Some(existing) = inherited.filter(|p| !p.is_empty()) {
        path.push(existing);
        path.push(SEARCH_PATH_SEPARATOR);
    }
    path.push(SCRIPTS_DIR);
    path
}

/// Launcher knobs read from `LAUNCH_*` variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub mode: LaunchMode,
    pub dry_run: bool,
}
