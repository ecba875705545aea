// src/config/mod.rs

//! Launch configuration and launcher settings.
//!
//! - [`model`] holds the fixed variable set handed to the child
//!   ([`LaunchConfig`]) and the launcher's own knobs ([`Settings`]).
//! - [`loader`] builds both from the invoking process.

pub mod loader;
pub mod model;

pub use loader::{launch_config_from_process, load_settings, load_settings_from};
pub use model::{LaunchConfig, Settings, augment_search_path};
