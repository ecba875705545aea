// crates/test-utils/src/builders.rs

#![allow(dead_code)]

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use launch::config::LaunchConfig;
use launch::config::model::SCRIPTS_DIR;
use tempfile::TempDir;

/// A throwaway working directory for launching commands from.
///
/// Files are laid out relative to the root; helpers added with
/// [`Workspace::with_helper`] land in `scripts/` so they are reachable by
/// bare name once the launcher has extended `PATH`.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp workspace"),
        }
    }

    /// Root of the workspace, canonicalized so it compares equal to what a
    /// child sees from `getcwd`.
    pub fn path(&self) -> PathBuf {
        self.dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp workspace")
    }

    /// Executable shell script at `rel` (relative to the root).
    pub fn with_script(self, rel: &str, body: &str) -> Self {
        let path = self.dir.path().join(rel);
        write_file(&path, &format!("#!/bin/sh\n{body}\n"));
        set_mode(&path, 0o755);
        self
    }

    /// Executable shell script `scripts/<name>`.
    pub fn with_helper(self, name: &str, body: &str) -> Self {
        let rel = format!("{SCRIPTS_DIR}/{name}");
        self.with_script(&rel, body)
    }

    /// Regular file without any execute bits.
    pub fn with_plain_file(self, rel: &str, contents: &str) -> Self {
        let path = self.dir.path().join(rel);
        write_file(&path, contents);
        set_mode(&path, 0o644);
        self
    }

    /// The configuration a launch from this workspace would produce with
    /// the given inherited `PATH`.
    pub fn launch_config(&self, inherited_path: Option<&str>) -> LaunchConfig {
        LaunchConfig::new(&self.path(), inherited_path.map(OsStr::new))
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    fs::write(path, contents).expect("Failed to write fixture file");
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .expect("Failed to set fixture permissions");
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) {}
