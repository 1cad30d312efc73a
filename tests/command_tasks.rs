// tests/command_tasks.rs
#![cfg(unix)]

mod common;
use crate::common::init_tracing;

use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use bootseq::cli::CliArgs;
use bootseq::errors::BootseqError;
use bootseq::exec::{CommandTask, StartupTask};
use bootseq::types::TaskId;

fn write_manifest(dir: &Path, contents: &str) -> String {
    let path = dir.join("Bootseq.toml");
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn command_task_succeeds_on_zero_exit() {
    let mut task = CommandTask::new(TaskId::from("ok"), "true");
    assert!(task.execute().is_ok());
}

#[test]
fn command_task_fails_with_exit_code() {
    let mut task = CommandTask::new(TaskId::from("broken"), "exit 3");

    let err = task.execute().unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("'broken'"));
    assert!(msg.contains("status 3"));
}

#[test]
fn manifest_tasks_run_in_dependency_order() {
    init_tracing();

    let dir = TempDir::new().unwrap();
    let log = dir.path().join("order.log");
    let config = write_manifest(
        dir.path(),
        &format!(
            r#"
[task.a_server]
cmd = "echo server >> {log}"
after = ["migrate"]

[task.migrate]
cmd = "echo migrate >> {log}"
after = ["config"]

[task.config]
cmd = "echo config >> {log}"
"#,
            log = log.display()
        ),
    );

    let args = CliArgs::try_parse_from(["bootseq", "--config", &config]).unwrap();
    bootseq::run(args).expect("run should succeed");

    let written = fs::read_to_string(&log).unwrap();
    assert_eq!(written, "config\nmigrate\nserver\n");
}

#[test]
fn failing_command_stops_later_tasks() {
    init_tracing();

    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("after.txt");
    let config = write_manifest(
        dir.path(),
        &format!(
            r#"
[task.first]
cmd = "exit 1"

[task.second]
cmd = "touch {marker}"
after = ["first"]
"#,
            marker = marker.display()
        ),
    );

    let args = CliArgs::try_parse_from(["bootseq", "--config", &config]).unwrap();
    let err = bootseq::run(args).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<BootseqError>(),
        Some(BootseqError::Task(_))
    ));
    assert!(!marker.exists());
}

#[test]
fn dry_run_executes_nothing() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("ran.txt");
    let config = write_manifest(
        dir.path(),
        &format!(
            r#"
[task.touch]
cmd = "touch {marker}"
"#,
            marker = marker.display()
        ),
    );

    let args = CliArgs::try_parse_from(["bootseq", "--config", &config, "--dry-run"]).unwrap();
    bootseq::run(args).expect("dry run should succeed");

    assert!(!marker.exists());
}

#[test]
fn strict_flag_rejects_cycles_before_running() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("ran.txt");
    let config = write_manifest(
        dir.path(),
        &format!(
            r#"
[task.a]
cmd = "touch {marker}"

[task.p]
cmd = "true"
after = ["q"]

[task.q]
cmd = "true"
after = ["p"]
"#,
            marker = marker.display()
        ),
    );

    let args = CliArgs::try_parse_from(["bootseq", "--config", &config, "--strict"]).unwrap();
    let err = bootseq::run(args).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<BootseqError>(),
        Some(BootseqError::CircularDependency { .. })
    ));
    assert!(!marker.exists());
}
