//! Command-line tests for the `regelrecht-registry` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn registry_cmd() -> Command {
    Command::cargo_bin("regelrecht-registry").unwrap()
}

#[test]
fn test_dump_prints_every_node() {
    registry_cmd()
        .arg("dump")
        .arg(fixture_path("settings.xml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("root\nroot.settings\n"))
        .stdout(predicate::str::contains(
            "root.settings.database.host value = db.internal\n",
        ))
        .stdout(predicate::str::contains(
            "root.settings.feature\nroot.settings.feature.name value = export\n",
        ));
}

#[test]
fn test_get_text_output() {
    registry_cmd()
        .arg("get")
        .arg(fixture_path("settings.xml"))
        .arg("root.settings.feature.name")
        .assert()
        .success()
        .stdout(
            "root.settings.feature.name = audit\n\
             root.settings.feature.name = export\n\
             root.settings.feature.name = import\n",
        );
}

#[test]
fn test_get_yaml_output() {
    registry_cmd()
        .arg("get")
        .arg(fixture_path("settings.xml"))
        .arg("root.settings.database.pool")
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("key: root.settings.database.pool"))
        .stdout(predicate::str::contains("key: root.settings.database.pool.min"));
}

#[test]
fn test_get_without_matches_fails() {
    registry_cmd()
        .arg("get")
        .arg(fixture_path("settings.xml"))
        .arg("root.missing")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("No nodes found for"));
}

#[test]
fn test_malformed_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.xml");
    fs::write(&path, "<a><b></a>").unwrap();

    registry_cmd()
        .arg("dump")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to load registry from"));
}

#[test]
fn test_max_size_flag() {
    registry_cmd()
        .arg("dump")
        .arg(fixture_path("settings.xml"))
        .args(["--max-size", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit is 10 bytes"));
}
