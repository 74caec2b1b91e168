use std::path::Path;

use assert_cmd::{assert::Assert, Command};
use predicates::prelude::*;
use serde_json::{json, Value};

mod stubs;

fn cmd_assert(data_dir: &Path, subcommand: &str) -> Assert {
    let mut cmd = Command::cargo_bin("netatmo-display").unwrap();
    cmd.env("ND_DATA_DIR", data_dir)
        .env("ND_EPD_PATH", data_dir.join("no-epd"))
        .arg(subcommand)
        .assert()
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn missing_config_writes_placeholder_and_fails() {
    let tempdir = tempfile::tempdir().unwrap();

    cmd_assert(tempdir.path(), "fetch")
        .failure()
        .stderr(predicate::str::contains("config.json"));

    assert_eq!(
        read_json(&tempdir.path().join("config.json")),
        json!({"client_id": "xx", "client_secret": "xx", "device_id": "xx"})
    );
    assert!(!tempdir.path().join("token.json").exists());

    // Still failing until the placeholder is edited
    cmd_assert(tempdir.path(), "fetch")
        .failure()
        .stderr(predicate::str::contains("placeholder"));
}

#[test]
fn missing_token_writes_placeholder_and_explains() {
    let tempdir = tempfile::tempdir().unwrap();
    // Nothing listens here; startup must fail before any request
    std::fs::write(
        tempdir.path().join("config.json"),
        stubs::station::config("http://127.0.0.1:9"),
    )
    .unwrap();

    cmd_assert(tempdir.path(), "run")
        .failure()
        .stderr(predicate::str::contains("read_station"))
        .stderr(predicate::str::contains("Generate Token"));

    assert_eq!(
        read_json(&tempdir.path().join("token.json")),
        json!({"access_token": "xx", "refresh_token": "xx"})
    );
    assert!(!tempdir.path().join("data.json").exists());
}

#[test]
fn unknown_subcommand_fails() {
    let tempdir = tempfile::tempdir().unwrap();
    cmd_assert(tempdir.path(), "frobnicate")
        .failure()
        .stderr(predicate::str::contains("Unknown subcommand"));
}
