// src/config/loader.rs

use std::env;
use std::ffi::OsString;

use crate::config::model::{LaunchConfig, SEARCH_PATH_VAR, Settings};
use crate::errors::{LaunchError, Result};
use crate::types::LaunchMode;

/// Selects process replacement (`exec`) or spawn-and-wait (`spawn`).
pub const MODE_VAR: &str = "LAUNCH_MODE";
/// When truthy, print what would be launched and exit without launching.
pub const DRY_RUN_VAR: &str = "LAUNCH_DRY_RUN";

/// Build the launch configuration from the current process: the working
/// directory at this moment and the inherited `PATH`.
pub fn launch_config_from_process() -> Result<LaunchConfig> {
    let cwd = env::current_dir().map_err(LaunchError::WorkingDirectory)?;
    let inherited = env::var_os(SEARCH_PATH_VAR);
    Ok(LaunchConfig::new(&cwd, inherited.as_deref()))
}

/// Read [`Settings`] from the process environment.
pub fn load_settings() -> Result<Settings> {
    load_settings_from(|key| env::var_os(key))
}

/// Read [`Settings`] through an arbitrary variable lookup.
///
/// Unset variables fall back to defaults; set but unrecognised values
/// (including non-UTF-8 ones) are a `ConfigError`.
pub fn load_settings_from<F>(lookup: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<OsString>,
{
    let mut settings = Settings::default();

    if let Some(raw) = utf8_value(MODE_VAR, lookup(MODE_VAR))? {
        settings.mode = raw.parse::<LaunchMode>().map_err(LaunchError::ConfigError)?;
    }

    if let Some(raw) = utf8_value(DRY_RUN_VAR, lookup(DRY_RUN_VAR))? {
        settings.dry_run = parse_flag(DRY_RUN_VAR, &raw)?;
    }

    Ok(settings)
}

fn utf8_value(var: &str, raw: Option<OsString>) -> Result<Option<String>> {
    raw.map(|value| {
        value
            .into_string()
            .map_err(|_| LaunchError::ConfigError(format!("invalid {var}: not valid UTF-8")))
    })
    .transpose()
}

fn parse_flag(var: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(LaunchError::ConfigError(format!(
            "invalid {var}: {other} (expected a boolean such as \"1\" or \"0\")"
        ))),
    }
}
