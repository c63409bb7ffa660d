#![cfg(feature = "cli")]

use std::process::Command;

fn bin() -> String {
    env!("CARGO_BIN_EXE_cifra").to_string()
}

fn stdout_of(args: &[&str]) -> String {
    let out = Command::new(bin()).args(args).output().unwrap();
    assert!(out.status.success(), "cifra {args:?} failed: {out:?}");
    String::from_utf8(out.stdout).unwrap().trim_end().to_string()
}

#[test]
fn caesar_encode_decode_roundtrip() {
    assert_eq!(stdout_of(&["caesar", "--key", "3", "HELLO"]), "KHOOR");
    assert_eq!(
        stdout_of(&["caesar", "--decode", "--key", "3", "KHOOR"]),
        "HELLO"
    );
}

#[test]
fn caesar_negative_key() {
    assert_eq!(stdout_of(&["caesar", "--key", "-3", "KHOOR"]), "HELLO");
}

#[test]
fn input_is_normalized_before_validation() {
    // Lowercase and acute accents are folded away before the gate.
    assert_eq!(stdout_of(&["caesar", "--key", "3", "héllo"]), "KHOOR");
}

#[test]
fn spanish_alphabet_accepts_enye() {
    assert_eq!(
        stdout_of(&["caesar", "--alphabet", "spanish", "--key", "1", "ñandú"]),
        "OBÑEV"
    );
}

#[test]
fn vigenere_encode_decode_roundtrip() {
    assert_eq!(stdout_of(&["vigenere", "--key", "KEY", "HELLO"]), "RIJVS");
    assert_eq!(
        stdout_of(&["vigenere", "--decode", "--key", "key", "RIJVS"]),
        "HELLO"
    );
}

#[test]
fn zero_key_is_rejected() {
    let out = Command::new(bin())
        .args(["caesar", "--key", "0", "HELLO"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("shift key"), "stderr: {stderr}");
}

#[test]
fn oversized_key_is_rejected() {
    let out = Command::new(bin())
        .args(["caesar", "--key", "26", "HELLO"])
        .output()
        .unwrap();
    assert!(!out.status.success());
}

#[test]
fn foreign_message_is_rejected() {
    // Ñ is valid Spanish but not Latin; spaces are valid nowhere.
    let out = Command::new(bin())
        .args(["caesar", "--key", "3", "ÑANDU"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("invalid message"), "stderr: {stderr}");

    let out = Command::new(bin())
        .args(["vigenere", "--key", "KEY", "HELLO WORLD"])
        .output()
        .unwrap();
    assert!(!out.status.success());
}

#[test]
fn empty_vigenere_key_is_rejected() {
    let out = Command::new(bin())
        .args(["vigenere", "--key", "", "HELLO"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("invalid key"), "stderr: {stderr}");
}

#[test]
fn info_prints_descriptions() {
    let text = stdout_of(&["info"]);
    assert!(text.contains("Caesar"));
    assert!(text.contains("Vigenère"));
}
