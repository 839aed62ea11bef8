//! Tests for the `es` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `es` with logs and user config isolated under `home`
fn es(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("es").expect("binary should build");
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_DATA_HOME", home.join("data"))
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_subcommand_prints_help() {
    let home = TempDir::new().unwrap();

    es(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("examples"));
}

#[test]
fn test_missing_gitignore_fails() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    fs::write(project.path().join(".env.example"), "A=1\n").unwrap();

    es(home.path())
        .args(["examples", "--root"])
        .arg(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Stopped at"))
        .stderr(predicate::str::contains(".gitignore"));

    assert!(!project.path().join(".env").exists());
}

#[test]
fn test_nothing_found_exits_cleanly() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    es(home.path())
        .args(["examples", "--no-gitignore", "--root"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No .env.example files found"));
}

#[test]
fn test_piped_answers_write_env_file() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    fs::write(project.path().join(".gitignore"), "target/\n").unwrap();
    fs::write(project.path().join(".env.example"), "# header\nA=1\n\nB=\n").unwrap();

    // Confirm the selection, then answer A and B
    es(home.path())
        .args(["examples", "--root"])
        .arg(project.path())
        .write_stdin("\n10\n20\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    assert_eq!(
        fs::read_to_string(project.path().join(".env")).unwrap(),
        "# header\nA=10\n\nB=20\n"
    );
}

#[test]
fn test_end_of_input_cancels_quietly() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    fs::write(project.path().join(".env.example"), "A=1\n").unwrap();

    es(home.path())
        .args(["examples", "--no-gitignore", "--root"])
        .arg(project.path())
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote").not());

    assert!(!project.path().join(".env").exists());
}
