use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn floatscout() -> Command {
    Command::cargo_bin("floatscout").unwrap()
}

#[test]
fn help_lists_commands() {
    floatscout()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("auctions"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn config_init_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    floatscout()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[filter]"));
    assert!(written.contains("min_discount = 24.0"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "keep me").unwrap();

    floatscout()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
}

#[test]
fn config_validate_accepts_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    floatscout().args(["config", "init"]).arg(&path).assert().success();

    floatscout()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_reports_bad_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[logging]\nlevel = \"info\"\nformat = \"pretty\"\n\n[filter]\nmin_price = 90000\n",
    )
    .unwrap();

    floatscout()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("filter.min_price"));
}

#[test]
fn run_fails_cleanly_without_config() {
    let dir = tempfile::tempdir().unwrap();

    floatscout()
        .args(["run", "--no-exit-prompt", "--config"])
        .arg(dir.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}
