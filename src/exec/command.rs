// src/exec/command.rs

use std::ffi::{OsStr, OsString};

use crate::errors::LaunchError;

/// The command to hand control to: a program plus its arguments, kept
/// exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandLine {
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Program name for diagnostics (lossy for non-UTF-8 names).
    pub fn display_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl TryFrom<Vec<OsString>> for CommandLine {
    type Error = LaunchError;

    fn try_from(mut argv: Vec<OsString>) -> Result<Self, Self::Error> {
        if argv.is_empty() {
            return Err(LaunchError::NoCommand);
        }
        let program = argv.remove(0);
        Ok(Self {
            program,
            args: argv,
        })
    }
}
