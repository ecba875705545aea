// src/exec/mod.rs

//! Handing control to the target command.
//!
//! - [`command`] holds the verbatim command line.
//! - [`replace`] replaces the launcher's process image (unix only).
//! - [`spawn`] runs the command as a child on `tokio::process` and waits.
//! - [`status`] maps child statuses and start failures to exit codes.

pub mod command;
#[cfg(unix)]
pub mod replace;
pub mod spawn;
pub mod status;

pub use command::CommandLine;
#[cfg(unix)]
pub use replace::replace_process;
pub use spawn::spawn_and_wait;
pub use status::{classify_launch_error, exit_code_of};
