//! Tests for `pgpeed keys`.

use crate::support::*;

#[test]
fn test_use_root_fails() {
    let t = Test::new();

    let output = t.keys(&["use", "/"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "no key pair found");
    assert!(!t.config_path().exists());
}

#[test]
fn test_use_generated_directory() {
    let t = Test::new();
    let dir = t.dir.path().join("keys");
    assert_success(&t.generate_into(&BOB, &dir));

    let output = t.keys(&["use", dir.to_str().unwrap()]);
    assert_success(&output);

    // Operations now pick up Bob's keys without --key.
    let output = t.encrypt("hello bob");
    assert_success(&output);
    let ciphertext = stdout(&output);
    let output = t.decrypt(&ciphertext, BOB.passphrase);
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), "hello bob");
}

#[test]
fn test_show_public_key() {
    let t = Test::with_keys();

    let output = t.keys(&["show"]);
    assert_success(&output);
    assert!(stdout(&output).starts_with(PUBLIC_KEY_HEADER));
}

#[test]
fn test_show_private_key_json() {
    let t = Test::with_keys();

    let output = t.keys(&["show", "--private", "--json"]);
    assert_success(&output);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["kind"], "private");
    assert!(json["key"].as_str().unwrap().starts_with(PRIVATE_KEY_HEADER));
    assert!(json["modified"].is_string());
}

#[test]
fn test_path() {
    let t = Test::with_keys();

    let output = t.keys(&["path"]);
    assert_success(&output);
    assert!(stdout(&output).trim_end().ends_with("keys"));
}

#[test]
fn test_path_without_location() {
    let t = Test::new();

    let output = t.keys(&["path"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "no key location set");
}
