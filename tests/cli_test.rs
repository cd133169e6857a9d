//! Integration tests for the statblock binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const ACID_BURROWER: &str = include_str!("fixtures/acid_burrower.txt");

fn statblock(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("statblock").unwrap();
    // keep the user's real config out of the picture
    cmd.args(["--config", config_dir.join("config.toml").to_str().unwrap()])
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("STATBLOCK_LOG_LEVEL")
        .env_remove("STATBLOCK_LOG_FORMAT");
    cmd
}

#[test]
fn test_parse_summary_from_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("burrower.txt");
    fs::write(&input, ACID_BURROWER).unwrap();

    statblock(dir.path())
        .args(["parse", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("ACID BURROWER"))
        .stdout(predicate::str::contains("Relentless (3) - passive"))
        .stdout(predicate::str::contains("Acid Bath - reaction"));
}

#[test]
fn test_parse_toml_from_stdin() {
    let dir = tempdir().unwrap();

    statblock(dir.path())
        .args(["parse", "--format", "toml"])
        .write_stdin(ACID_BURROWER)
        .assert()
        .success()
        .stdout(predicate::str::contains("name = \"ACID BURROWER\""))
        .stdout(predicate::str::contains("difficulty = 14"))
        .stdout(predicate::str::contains("type = \"reaction\""));
}

#[test]
fn test_parse_uses_config_output_format() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[output]\nformat = \"toml\"\n",
    )
    .unwrap();

    statblock(dir.path())
        .args(["parse", "-"])
        .write_stdin("GIANT RAT\nT1 Minion\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("subtype = \"minion\""));
}

#[test]
fn test_export_writes_toml() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("burrower.txt");
    let output = dir.path().join("out").join("burrower.toml");
    fs::write(&input, ACID_BURROWER).unwrap();

    statblock(dir.path())
        .args([
            "export",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 feature(s)"));

    let written = fs::read_to_string(&output).unwrap();
    let parsed: statblock::ParsedStatblock = toml::from_str(&written).unwrap();
    assert_eq!(parsed, statblock::parse_statblock(ACID_BURROWER).unwrap());
}

#[test]
fn test_check_lists_dropped_lines() {
    let dir = tempdir().unwrap();

    statblock(dir.path())
        .arg("check")
        .write_stdin("IMP\nTiny and mean.\nAlso very loud.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 line(s) dropped"))
        .stdout(predicate::str::contains("Also very loud."));
}

#[test]
fn test_check_clean_statblock() {
    let dir = tempdir().unwrap();

    statblock(dir.path())
        .arg("check")
        .write_stdin(ACID_BURROWER)
        .assert()
        .success()
        .stdout(predicate::str::contains("every line was recognized"));
}

#[test]
fn test_missing_name_fails() {
    let dir = tempdir().unwrap();

    statblock(dir.path())
        .arg("parse")
        .write_stdin("Difficulty: 14\nAttack: +3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no statblock name"));
}

#[test]
fn test_empty_input_fails() {
    let dir = tempdir().unwrap();

    statblock(dir.path())
        .arg("check")
        .write_stdin("\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("statblock text is empty"));
}
