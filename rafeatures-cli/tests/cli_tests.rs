//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build command for the rafeatures-cli binary.
fn rafeatures_cli() -> Command {
    cargo_bin_cmd!("rafeatures-cli")
}

/// Path to rafeatures library test fixtures (relative to workspace).
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("rafeatures")
        .join("tests")
        .join("fixtures")
}

/// Sketchbook with the cached rule table in place.
fn sketchbook() -> TempDir {
    let dir = TempDir::new().unwrap();
    let update = dir.path().join("update");
    std::fs::create_dir_all(&update).unwrap();
    std::fs::copy(fixtures_dir().join("feature.txt"), update.join("feature.txt")).unwrap();
    dir
}

fn features_header(root: &Path) -> PathBuf {
    root.join("libraries")
        .join("ReefAngel_Features")
        .join("ReefAngel_Features.h")
}

fn labels_header(root: &Path) -> PathBuf {
    root.join("libraries")
        .join("RA_CustomLabels")
        .join("RA_CustomLabels.h")
}

#[test]
fn test_cli_help() {
    let mut cmd = rafeatures_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Reef Angel"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = rafeatures_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_process_writes_headers() {
    let dir = sketchbook();
    let mut cmd = rafeatures_cli();

    cmd.arg("process")
        .arg(fixtures_dir().join("Reef.ino"))
        .arg("--sketchbook")
        .arg(dir.path())
        .arg("--offline");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CUSTOM_MENU_ENTRIES 3"))
        .stdout(predicate::str::contains("LABEL_AQUARIUM"));

    let features = std::fs::read_to_string(features_header(dir.path())).unwrap();
    assert!(features.contains("#define InstalledRelayExpansionModules 2\n"));
    let labels = std::fs::read_to_string(labels_header(dir.path())).unwrap();
    assert!(labels.contains("const char LABEL_PORT1[] PROGMEM = \"Return Pump\";"));
}

#[test]
fn test_cli_process_json_output() {
    let dir = sketchbook();
    let mut cmd = rafeatures_cli();

    cmd.arg("process")
        .arg(fixtures_dir().join("Standard.ino"))
        .arg("--sketchbook")
        .arg(dir.path())
        .arg("--offline")
        .arg("--format")
        .arg("json");

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["features"][2]["symbol"], "ENABLE_ATO_LOGGING");
    assert_eq!(report["written"], true);
}

#[test]
fn test_cli_process_dry_run() {
    let dir = sketchbook();
    let mut cmd = rafeatures_cli();

    cmd.arg("process")
        .arg(fixtures_dir().join("Reef.ino"))
        .arg("--sketchbook")
        .arg(dir.path())
        .arg("--offline")
        .arg("--dry-run");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));
    assert!(!features_header(dir.path()).exists());
}

#[test]
fn test_cli_process_explicit_rules() {
    let dir = TempDir::new().unwrap();
    let mut cmd = rafeatures_cli();

    cmd.arg("process")
        .arg(fixtures_dir().join("Reef.ino"))
        .arg("--sketchbook")
        .arg(dir.path())
        .arg("--rules")
        .arg(fixtures_dir().join("feature.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PHEXPANSION"));
}

#[test]
fn test_cli_process_missing_rules_offline() {
    let dir = TempDir::new().unwrap();
    let mut cmd = rafeatures_cli();

    cmd.arg("process")
        .arg(fixtures_dir().join("Reef.ino"))
        .arg("--sketchbook")
        .arg(dir.path())
        .arg("--offline");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("feature.txt"));
    assert!(!labels_header(dir.path()).exists());
}

#[test]
fn test_cli_process_nonexistent_sketch() {
    let dir = sketchbook();
    let mut cmd = rafeatures_cli();

    cmd.arg("process")
        .arg("does_not_exist.ino")
        .arg("--sketchbook")
        .arg(dir.path())
        .arg("--offline");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_cli_rules_command() {
    let mut cmd = rafeatures_cli();

    cmd.arg("rules")
        .arg("--rules")
        .arg(fixtures_dir().join("feature.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SALINITYEXPANSION"))
        .stdout(predicate::str::contains("17 rules"));
}

#[test]
fn test_cli_rules_verbose() {
    let mut cmd = rafeatures_cli();

    cmd.arg("rules")
        .arg("--rules")
        .arg(fixtures_dir().join("feature.txt"))
        .arg("--verbose");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ReefAngel.Params.Salinity"));
}

#[test]
fn test_cli_rules_missing_file() {
    let dir = TempDir::new().unwrap();
    let mut cmd = rafeatures_cli();

    cmd.arg("rules").arg("--sketchbook").arg(dir.path());

    cmd.assert().code(1);
}

#[test]
fn test_cli_labels_command() {
    let mut cmd = rafeatures_cli();

    cmd.arg("labels").arg("--verbose");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("LABEL_PORT88"))
        .stdout(predicate::str::contains("\"Water Leak\""));
}

#[test]
fn test_cli_version_command() {
    let dir = TempDir::new().unwrap();
    let lib = dir.path().join("libraries").join("ReefAngel");
    std::fs::create_dir_all(&lib).unwrap();
    std::fs::copy(fixtures_dir().join("ReefAngel.h"), lib.join("ReefAngel.h")).unwrap();

    let mut cmd = rafeatures_cli();
    cmd.arg("version")
        .arg(fixtures_dir().join("Reef.ino"))
        .arg("--sketchbook")
        .arg(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Reef Angel Libraries Version: 1.1.4"))
        .stdout(predicate::str::contains("User Code Version: 3.1.2"));
}

#[test]
fn test_cli_quiet_suppresses_logs() {
    let dir = sketchbook();
    let mut cmd = rafeatures_cli();

    cmd.arg("--quiet")
        .arg("process")
        .arg(fixtures_dir().join("Reef.ino"))
        .arg("--sketchbook")
        .arg(dir.path())
        .arg("--offline");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Unknown Label").not());
}
