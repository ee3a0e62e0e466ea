//! CLI integration tests.
//!
//! Each test points HOME at a scratch directory so it never touches a real
//! `~/.repflow/`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn repflow(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("repflow").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn plan_shows_default_exercises() {
    let home = TempDir::new().unwrap();

    repflow(&home)
        .args(["plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jumping Jacks"))
        .stdout(predicate::str::contains("Exercise Plan"));
}

#[test]
fn plan_json_is_valid() {
    let home = TempDir::new().unwrap();

    let output = repflow(&home)
        .args(["plan", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["source"], "default");
    assert!(parsed["count"].as_u64().unwrap() > 0);
}

#[test]
fn plan_section_filter() {
    let home = TempDir::new().unwrap();

    repflow(&home)
        .args(["plan", "--section", "pull"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pull ups"))
        .stdout(predicate::str::contains("Jumping Jacks").not());
}

#[test]
fn plan_unknown_section_fails() {
    let home = TempDir::new().unwrap();

    repflow(&home)
        .args(["plan", "--section", "cardio"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown section"));
}

#[test]
fn reset_requires_force() {
    let home = TempDir::new().unwrap();

    repflow(&home)
        .args(["reset"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    repflow(&home)
        .args(["reset", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default plan"));
}

#[test]
fn completions_generate() {
    let home = TempDir::new().unwrap();

    repflow(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repflow"));
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();

    repflow(&home)
        .args(["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("plan"));
}
