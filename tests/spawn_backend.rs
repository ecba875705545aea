// tests/spawn_backend.rs
#![cfg(unix)]

mod common;
use crate::common::{BASE_PATH, Workspace, init_tracing};

use std::error::Error;
use std::ffi::OsString;

use launch::config::Settings;
use launch::errors::LaunchError;
use launch::exec::{CommandLine, exit_code_of, spawn_and_wait};
use launch::types::LaunchMode;

type TestResult = Result<(), Box<dyn Error>>;

fn command(argv: &[&str]) -> CommandLine {
    let argv: Vec<OsString> = argv.iter().map(OsString::from).collect();
    CommandLine::try_from(argv).expect("non-empty argv")
}

#[tokio::test]
async fn child_sees_the_launch_configuration() -> TestResult {
    init_tracing();
    let ws = Workspace::new();
    let config = ws.launch_config(Some(BASE_PATH));
    let expected_module_path = ws.path().to_string_lossy().into_owned();

    let cmd = command(&[
        "sh",
        "-c",
        "test \"$PYTHONPATH\" = \"$1\" || exit 10; \
         test \"$PYTHONDONTWRITEBYTECODE\" = 1 || exit 11; \
         test \"$PATH\" = \"$2\" || exit 12; \
         exit 3",
        "sh",
        &expected_module_path,
        &format!("{BASE_PATH}:scripts"),
    ]);

    let status = spawn_and_wait(&cmd, &config).await?;
    assert_eq!(exit_code_of(status), 3);
    Ok(())
}

#[tokio::test]
async fn unknown_program_is_command_not_found() -> TestResult {
    init_tracing();
    let ws = Workspace::new();
    let config = ws.launch_config(Some(BASE_PATH));

    match spawn_and_wait(&command(&["definitely-not-a-real-command-4821"]), &config).await {
        Err(LaunchError::CommandNotFound { program }) => {
            assert_eq!(program, "definitely-not-a-real-command-4821");
        }
        other => panic!("expected CommandNotFound, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn non_executable_is_command_invocation_error() -> TestResult {
    init_tracing();
    let ws = Workspace::new().with_plain_file("data.txt", "not a program\n");
    let config = ws.launch_config(Some(BASE_PATH));
    let target = ws.path().join("data.txt");

    let cmd = CommandLine::try_from(vec![target.into_os_string()])?;
    let err = spawn_and_wait(&cmd, &config)
        .await
        .expect_err("plain file must not launch");

    assert!(matches!(err, LaunchError::CommandInvocation { .. }), "got {err:?}");
    assert_eq!(err.exit_code(), 126);
    Ok(())
}

#[tokio::test]
async fn launch_in_spawn_mode_returns_the_child_code() -> TestResult {
    init_tracing();
    let ws = Workspace::new();
    let config = ws.launch_config(Some(BASE_PATH));
    let settings = Settings {
        mode: LaunchMode::Spawn,
        dry_run: false,
    };

    let code = launch::launch(&command(&["sh", "-c", "exit 42"]), &config, settings).await?;
    assert_eq!(code, 42);
    Ok(())
}

#[tokio::test]
async fn dry_run_launches_nothing() -> TestResult {
    init_tracing();
    let ws = Workspace::new();
    let config = ws.launch_config(Some(BASE_PATH));
    let settings = Settings {
        mode: LaunchMode::Spawn,
        dry_run: true,
    };

    let code = launch::launch(
        &command(&["definitely-not-a-real-command-4821"]),
        &config,
        settings,
    )
    .await?;
    assert_eq!(code, 0);
    Ok(())
}
