// src/main.rs

use launch::errors::LaunchError;
use launch::{cli, logging, run};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = match run_main().await {
        Ok(code) => code,
        Err(err) => {
            report(&err);
            err.exit_code()
        }
    };
    std::process::exit(code);
}

async fn run_main() -> Result<i32, LaunchError> {
    let args = cli::parse()?;
    logging::init_logging()?;
    run(args).await
}

/// One line on stderr, shell style. Only reached when no child ever ran.
fn report(err: &LaunchError) {
    eprintln!("launch: {err}");
    if err.is_invocation_error() {
        eprintln!("{}", cli::USAGE);
    }
}
