//! Tests for `pgpeed encrypt`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_encrypt_with_active_key() {
    let t = Test::with_keys();

    t.cmd()
        .args(["encrypt", "Heyy"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(ARMORED_MESSAGE_HEADER))
        .stdout(predicate::str::contains("-----END PGP MESSAGE-----"));
}

#[test]
fn test_encrypt_blank_message() {
    let t = Test::with_keys();

    let output = t.encrypt("");
    assert_rejected(&output, "Message Blank");
}

#[test]
fn test_encrypt_blank_key_file() {
    let t = Test::new();
    let key = t.write("empty.key", "");

    let output = t.cmd().args(["encrypt", "test", "--key"]).arg(&key).output().unwrap();
    assert_rejected(&output, "Key blank - please enter a valid key");
}

#[test]
fn test_encrypt_garbage_key_file() {
    let t = Test::new();
    let key = t.write("garbage.key", NOT_A_KEY);

    let output = t.cmd().args(["encrypt", "test", "--key"]).arg(&key).output().unwrap();
    assert_rejected(&output, "Key invalid - please enter a valid key");
}

#[test]
fn test_encrypt_from_stdin_to_file() {
    let t = Test::with_keys();
    let out = t.dir.path().join("message.asc");

    let output = t
        .cmd()
        .args(["encrypt", "--output"])
        .arg(&out)
        .write_stdin("piped message\n")
        .output()
        .unwrap();
    assert_success(&output);
    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with(ARMORED_MESSAGE_HEADER));
}

#[test]
fn test_encrypt_from_input_file() {
    let t = Test::with_keys();
    let input = t.write("message.txt", "from a file");

    let output = t.cmd().args(["encrypt", "--input"]).arg(&input).output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).starts_with(ARMORED_MESSAGE_HEADER));
}

#[test]
fn test_encrypt_without_any_key() {
    let t = Test::new();

    let output = t.encrypt("test");
    assert_rejected(&output, "Key blank - please enter a valid key");
    assert_stderr_contains(&output, "pgpeed keys use");
}

#[test]
fn test_encrypt_blank_message_without_keys() {
    let t = Test::new();

    let output = t.encrypt("");
    assert_rejected(&output, "Message Blank");
}
