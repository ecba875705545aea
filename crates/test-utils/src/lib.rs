// crates/test-utils/src/lib.rs

pub mod builders;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

pub use builders::Workspace;

static INIT: Once = Once::new();

/// Capture `launch` logs in tests that call the library in-process.
///
/// Defaults to `launch=debug`; override with `RUST_LOG`. Output goes through
/// the test writer, so it only shows for failing tests.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("launch=debug"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}
