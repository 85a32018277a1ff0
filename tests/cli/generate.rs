//! Tests for `pgpeed generate`.

use crate::support::*;

#[test]
fn test_generate_default_location() {
    let t = Test::new();

    let output = t.generate(&ALICE);
    assert_success(&output);
    assert_stdout_contains(&output, "key pair generated");
    assert_stdout_contains(&output, "testuser1 <testuser1@test.com>");

    let keys = t.default_keys();
    let private = std::fs::read_to_string(keys.join("pri_key.key")).unwrap();
    let public = std::fs::read_to_string(keys.join("pub_key.key")).unwrap();
    assert!(private.starts_with(PRIVATE_KEY_HEADER));
    assert!(public.starts_with(PUBLIC_KEY_HEADER));

    // The new keys became the active location.
    let config = std::fs::read_to_string(t.config_path()).unwrap();
    assert!(config.contains("[keys]"));
    assert!(config.contains("location"));
}

#[test]
fn test_generate_no_activate() {
    let t = Test::new();
    let dir = t.dir.path().join("mykeys");

    let output = t.generate_into(&ALICE, &dir);
    assert_success(&output);
    assert!(dir.join("pri_key.key").is_file());
    assert!(dir.join("pub_key.key").is_file());
    assert!(!t.config_path().exists());
    assert_stderr_contains(&output, "pgpeed keys use");
}

#[test]
fn test_generate_short_passphrase() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["generate", "--name", "testuser1", "--email", "test@test.com"])
        .env("PGPEED_PASSPHRASE", "testp")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "passphrase must be at least 8 characters");
    assert!(!t.default_keys().exists());
}

#[test]
fn test_generate_bad_email() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["generate", "--name", "testuser1", "--email", "test.com"])
        .env("PGPEED_PASSPHRASE", ALICE.passphrase)
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "email");
}

#[test]
fn test_generate_without_passphrase_non_interactive() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["generate", "--name", "testuser1", "--email", "test@test.com"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "passphrase");
}

#[test]
fn test_generate_into_a_file_path() {
    let t = Test::new();
    let file = t.write("occupied", "x");

    let output = t.generate_into(&ALICE, &file.join("keys"));
    assert_failure(&output);
    assert_stderr_contains(&output, "not a writable directory");
}

#[test]
fn test_regenerate_archives_previous_keys() {
    let t = Test::new();
    assert_success(&t.generate(&ALICE));
    let first = std::fs::read_to_string(t.default_keys().join("pub_key.key")).unwrap();

    assert_success(&t.generate(&BOB));
    let second = std::fs::read_to_string(t.default_keys().join("pub_key.key")).unwrap();
    assert_ne!(first, second);

    let archived: Vec<_> = std::fs::read_dir(t.default_keys().join("archive"))
        .unwrap()
        .collect();
    assert_eq!(archived.len(), 1);
}
