//! End-to-end tests for the `calclex` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn calclex_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_calclex"))
}

fn calclex() -> Command {
    let mut cmd = Command::new(calclex_bin());
    cmd.env_remove("RUST_LOG")
        .env_remove("CALCLEX_LEGACY_COLUMNS")
        .env_remove("CALCLEX_EOF")
        .env_remove("CALCLEX_PLAIN")
        .env_remove("CALCLEX_NO_COLOR")
        .env_remove("CALCLEX_VERBOSE");
    cmd
}

/// Writes `source` into a fresh temp dir and returns both.
fn script(source: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("calc.txt");
    fs::write(&path, source).expect("Failed to write script");
    (dir, path)
}

#[test]
fn test_cli_help() {
    calclex()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_tokenizes_script() {
    let (_dir, path) = script("x = 10\ny = 20");

    calclex().arg(&path).assert().success().stdout(concat!(
        "[1:1 Identifier \"x\"]\n",
        "[1:3 Equal \"=\"]\n",
        "[1:5 Number \"10\"]\n",
        "[1:7 Newline \"\"]\n",
        "[2:1 Identifier \"y\"]\n",
        "[2:3 Equal \"=\"]\n",
        "[2:5 Number \"20\"]\n",
    ));
}

#[test]
fn test_cli_unknown_character_plain() {
    let (_dir, path) = script("3 @ 4");

    calclex()
        .arg("--plain")
        .arg(&path)
        .assert()
        .code(1)
        .stdout("[1:1 Number \"3\"]\n")
        .stderr(predicate::str::contains("[1:3] unknown character '@'"));
}

#[test]
fn test_cli_legacy_columns() {
    let (_dir, path) = script("3 @ 4");

    calclex()
        .args(["--plain", "--legacy-columns"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[1:2] unknown character '@'"));
}

#[test]
fn test_cli_source_report() {
    let (_dir, path) = script("x = 1\nabc @\n");

    calclex()
        .arg("--no-color")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("unknown character '@'")
                .and(predicate::str::contains("abc @"))
                .and(predicate::str::contains("calc.txt")),
        );
}

#[test]
fn test_cli_end_of_file_token() {
    let (_dir, path) = script("1+2");

    calclex()
        .arg("--eof")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("[1:4 EndOfFile \"\"]\n"));
}

#[test]
fn test_cli_missing_script() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    calclex()
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("script"));
}

#[test]
fn test_cli_interactive_lines() {
    calclex()
        .arg("--plain")
        .write_stdin("1 + 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1:3 Plus \"+\"]"));
}
