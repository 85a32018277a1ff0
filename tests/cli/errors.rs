//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Usage");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "pgpeed");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_pgpeed"));
}

#[test]
fn test_completions_zsh() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#compdef pgpeed"));
}

#[test]
fn test_malformed_config_is_reported() {
    let t = Test::new();
    std::fs::create_dir_all(t.config_path().parent().unwrap()).unwrap();
    std::fs::write(t.config_path(), "[pgpeed\nversion =").unwrap();

    let output = t.encrypt("test");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}

#[test]
fn test_missing_input_file() {
    let t = Test::with_keys();

    let output = t.cmd().args(["encrypt", "--input", "nope.txt"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "nope.txt");
}
