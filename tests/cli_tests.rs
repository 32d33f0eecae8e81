//! Integration tests for the CLI interface
//!
//! Tests the main entry point and command parsing logic

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn monoidal() -> Command {
    Command::cargo_bin("monoidal").unwrap()
}

#[test]
fn test_cli_help_flag() {
    monoidal()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_cli_requires_subcommand() {
    monoidal().assert().failure();
}

#[test]
fn test_fold_sum_with_seed() {
    monoidal()
        .args(["fold", "sum", "1", "2", "3", "--seed", "0"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_fold_negative_values() {
    monoidal()
        .args(["fold", "sum", "-5", "2"])
        .assert()
        .success()
        .stdout("-3\n");
}

#[test]
fn test_fold_all_empty_returns_identity() {
    monoidal()
        .args(["fold", "all"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_fold_all_with_false() {
    monoidal()
        .args(["fold", "all", "true", "true", "false"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_fold_list_concatenation() {
    monoidal()
        .args(["fold", "list", "[1,2]", "[3]"])
        .assert()
        .success()
        .stdout("[1,2,3]\n");
}

#[test]
fn test_fold_json_output() {
    monoidal()
        .args(["fold", "concat", "ab", "cd", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"monoid\": \"concat\""))
        .stdout(predicate::str::contains("\"result\": \"abcd\""));
}

#[test]
fn test_fold_invalid_value_fails() {
    monoidal()
        .args(["fold", "sum", "1", "two"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Cannot parse \"two\" as integer"));
}

#[test]
fn test_pipeline_composition_order() {
    monoidal()
        .args(["pipeline", "--input", "3", "inc", "square"])
        .assert()
        .success()
        .stdout("16\n");

    monoidal()
        .args(["pipeline", "--input", "3", "square", "inc"])
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_pipeline_without_steps_is_identity() {
    monoidal()
        .args(["pipeline", "--input", "-4"])
        .assert()
        .success()
        .stdout("-4\n");
}

#[test]
fn test_pipeline_with_many_steps() {
    let steps = vec!["inc"; 5000];
    monoidal()
        .args(["pipeline", "--input", "0"])
        .args(&steps)
        .assert()
        .success()
        .stdout("5000\n");
}

#[test]
fn test_malformed_config_only_affects_laws() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[laws]\nmax_triples = \"many\"\n").unwrap();

    monoidal()
        .args(["fold", "sum", "1", "2"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout("3\n");

    monoidal()
        .args(["pipeline", "--input", "3", "inc"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout("4\n");

    monoidal()
        .args(["laws", "sum"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(2);
}

#[test]
fn test_laws_default_samples() {
    monoidal()
        .args(["laws", "product"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 violations"));
}

#[test]
fn test_laws_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("monoidal.toml");
    fs::write(&config_path, "[laws]\nmax_triples = 3\n").unwrap();

    monoidal()
        .args(["laws", "any", "true", "false"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("any: 3 associativity checks, 2 identity checks"));
}

#[test]
fn test_laws_missing_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    monoidal()
        .args(["laws", "sum"])
        .arg("--config")
        .arg(temp_dir.path().join("missing.toml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration file not found"));
}
