//! Tests for `pgpeed decrypt`.

use crate::support::*;

fn encrypted(t: &Test, message: &str) -> String {
    let output = t.encrypt(message);
    assert_success(&output);
    stdout(&output)
}

#[test]
fn test_roundtrip() {
    let t = Test::with_keys();
    let ciphertext = encrypted(&t, "Heyy");

    let output = t.decrypt(&ciphertext, ALICE.passphrase);
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), "Heyy");
}

#[test]
fn test_roundtrip_through_stdin() {
    let t = Test::with_keys();
    let ciphertext = encrypted(&t, "over a pipe");

    let output = t
        .cmd()
        .arg("decrypt")
        .env("PGPEED_PASSPHRASE", ALICE.passphrase)
        .write_stdin(ciphertext)
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), "over a pipe");
}

#[test]
fn test_wrong_passphrase() {
    let t = Test::with_keys();
    let ciphertext = encrypted(&t, "Heyy");

    let output = t.decrypt(&ciphertext, BOB.passphrase);
    assert_rejected(&output, "Passphrase Error");
}

#[test]
fn test_missing_passphrase() {
    let t = Test::with_keys();
    let ciphertext = encrypted(&t, "Heyy");

    let output = t.cmd().args(["decrypt", &ciphertext]).output().unwrap();
    assert_rejected(&output, "You have not supplied a passphrase");
    assert_stderr_contains(&output, "PGPEED_PASSPHRASE");
}

#[test]
fn test_plain_text() {
    let t = Test::with_keys();

    let output = t.decrypt(PLAIN_TEXT, ALICE.passphrase);
    assert_rejected(&output, "Message not PGP error (possibly plain text)");
}

#[test]
fn test_decrypt_with_explicit_key_file() {
    let t = Test::new();
    let dir = t.dir.path().join("bob");
    assert_success(&t.generate_into(&BOB, &dir));

    let output = t
        .cmd()
        .args(["encrypt", "for bob", "--key"])
        .arg(dir.join("pub_key.key"))
        .output()
        .unwrap();
    assert_success(&output);
    let ciphertext = stdout(&output);

    let output = t
        .cmd()
        .args(["decrypt", &ciphertext, "--key"])
        .arg(dir.join("pri_key.key"))
        .env("PGPEED_PASSPHRASE", BOB.passphrase)
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), "for bob");
}

#[test]
fn test_decrypt_without_any_key() {
    let t = Test::new();

    let output = t.decrypt(PLAIN_TEXT, ALICE.passphrase);
    assert_rejected(&output, "Key blank - please enter a valid key");
}

#[test]
fn test_decrypt_to_file_is_byte_exact() {
    let t = Test::with_keys();
    let ciphertext = encrypted(&t, "no trailing newline");
    let file = t.dir.path().join("plain.txt");

    let output = t
        .cmd()
        .args(["decrypt", &ciphertext, "--output"])
        .arg(&file)
        .env("PGPEED_PASSPHRASE", ALICE.passphrase)
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "no trailing newline");
}
