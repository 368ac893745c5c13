//! Tests that run the built binary.

use std::process::Command;

fn primes_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_primes"));
    cmd.env_remove("PRIMES_LOG");
    cmd
}

#[test]
fn test_no_arguments_prints_listing() {
    let output = primes_cmd().output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("2, 3, 5, "));
    assert!(stdout.ends_with("991, 997, \nFound 168 primes\nDone.\n"));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_help_succeeds() {
    let output = primes_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: primes"));
}

#[test]
fn test_unknown_argument_is_rejected() {
    let output = primes_cmd()
        .arg("--bound")
        .arg("2000")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
