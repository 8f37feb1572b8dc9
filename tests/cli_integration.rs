//! Integration tests for the todo CLI

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the todo binary, pointed at a scratch task file
fn todo(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("todo"));
    cmd.arg("--file").arg(temp.path().join("tasks.json"));
    cmd
}

#[test]
fn test_help() {
    Command::new(cargo::cargo_bin!("todo"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("A simple to-do list manager"));
}

#[test]
fn test_add_and_list() {
    let temp = TempDir::new().unwrap();

    todo(&temp)
        .args(["add", "buy milk", "--priority", "high", "--due", "2025-09-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added (ID: 1)"));

    todo(&temp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buy milk"))
        .stdout(predicate::str::contains("High"))
        .stdout(predicate::str::contains("2025-09-01"))
        .stdout(predicate::str::contains("Pending"));
}

#[test]
fn test_add_rejects_empty_description() {
    let temp = TempDir::new().unwrap();

    todo(&temp)
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task description cannot be empty"));

    assert!(!temp.path().join("tasks.json").exists());
}

#[test]
fn test_complete_and_filter() {
    let temp = TempDir::new().unwrap();

    todo(&temp).args(["add", "first"]).assert().success();
    todo(&temp).args(["add", "second"]).assert().success();

    todo(&temp)
        .args(["complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 1 marked as completed"));

    todo(&temp)
        .args(["list", "--filter", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("first"))
        .stdout(predicate::str::contains("second").not());

    todo(&temp)
        .args(["list", "--filter", "pending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("second"))
        .stdout(predicate::str::contains("first").not());
}

#[test]
fn test_complete_unknown_id_fails() {
    let temp = TempDir::new().unwrap();

    todo(&temp).args(["add", "only task"]).assert().success();

    todo(&temp)
        .args(["complete", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No task with ID 9"));
}

#[test]
fn test_delete_unknown_id_is_silent() {
    let temp = TempDir::new().unwrap();

    todo(&temp).args(["add", "keep me"]).assert().success();

    todo(&temp)
        .args(["delete", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 9 deleted"));

    todo(&temp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keep me"));
}

#[test]
fn test_clear_completed() {
    let temp = TempDir::new().unwrap();

    todo(&temp).args(["add", "groceries"]).assert().success();
    todo(&temp).args(["add", "laundry"]).assert().success();
    todo(&temp).args(["complete", "2"]).assert().success();

    todo(&temp)
        .args(["clear-completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 completed task(s)"));

    todo(&temp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("groceries"))
        .stdout(predicate::str::contains("laundry").not());
}

#[test]
fn test_state_persists_across_invocations() {
    let temp = TempDir::new().unwrap();

    todo(&temp).args(["add", "durable"]).assert().success();

    // A fresh process sees the saved state
    todo(&temp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("durable"));
}

#[test]
fn test_corrupt_task_file_reports_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("tasks.json"), "{not json").unwrap();

    todo(&temp)
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse task file"));
}
