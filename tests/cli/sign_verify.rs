//! Tests for `pgpeed sign` and `pgpeed verify`.

use crate::support::*;

#[test]
fn test_sign_then_verify() {
    let t = Test::with_keys();

    let output = t.sign("This is me", ALICE.passphrase);
    assert_success(&output);
    let signed = stdout(&output);
    assert!(signed.starts_with(SIGNED_MESSAGE_HEADER));

    let output = t.verify(&signed);
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), VERIFIED);
}

#[test]
fn test_sign_wrong_passphrase() {
    let t = Test::with_keys();

    let output = t.sign("This is me", BOB.passphrase);
    assert_rejected(&output, "Passphrase Error");
}

#[test]
fn test_verify_against_other_key() {
    let t = Test::with_keys();
    let bob_dir = t.dir.path().join("bob");
    assert_success(&t.generate_into(&BOB, &bob_dir));

    let output = t.sign("This is me", ALICE.passphrase);
    assert_success(&output);
    let signed = stdout(&output);

    let output = t
        .cmd()
        .args(["verify", &signed, "--key"])
        .arg(bob_dir.join("pub_key.key"))
        .output()
        .unwrap();
    assert_rejected(&output, NOT_VERIFIED);
}

#[test]
fn test_verify_plain_text() {
    let t = Test::with_keys();

    let output = t.verify(PLAIN_TEXT);
    assert_rejected(&output, "Message not PGP error (possibly plain text)");
}

#[test]
fn test_verify_blank() {
    let t = Test::with_keys();

    let output = t.verify("   ");
    assert_rejected(&output, "Message Blank");
}
