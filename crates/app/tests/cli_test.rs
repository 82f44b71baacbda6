//! End-to-end tests for the `vellum` binary.
#![allow(deprecated)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin;
use predicates::prelude::*;
use tempfile::TempDir;

const PING: &str = "meta {\n  name: Ping\n  type: http\n  seq: 1\n}\n\nget {\n  url: https://example.com/ping\n  body: none\n  auth: none\n}\n";

fn vellum_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("vellum"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, relative: &str, text: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

#[test]
fn test_parse_prints_json() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "ping.vlm", PING);

    vellum_cmd(temp.path())
        .args(["parse", "ping.vlm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Ping\""))
        .stdout(predicate::str::contains("\"method\": \"GET\""));
}

#[test]
fn test_parse_error_reports_position() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "bad.vlm", "headers {\n  broken\n}\n");

    vellum_cmd(temp.path())
        .args(["parse", "bad.vlm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_fmt_canonicalizes_and_writes() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "ping.vlm",
        "get {\n url:https://example.com/ping\n}\nmeta {\n  name: Ping\n}\n",
    );

    vellum_cmd(temp.path())
        .args(["fmt", "ping.vlm", "--write"])
        .assert()
        .success();

    let text = fs::read_to_string(temp.path().join("ping.vlm")).unwrap();
    assert_eq!(text, PING);

    vellum_cmd(temp.path())
        .args(["fmt", "ping.vlm"])
        .assert()
        .success()
        .stdout(PING);
}

#[test]
fn test_serialize_reads_json() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "dev.json",
        r#"{"variables": [{"name": "host", "value": "localhost"}, {"name": "token", "value": "x", "enabled": false}]}"#,
    );

    vellum_cmd(temp.path())
        .args(["serialize", "dev.json", "--kind", "environment"])
        .assert()
        .success()
        .stdout("vars {\n  host: localhost\n}\n\nvars:disabled {\n  token: x\n}\n");
}

#[test]
fn test_check_reports_every_failure() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "ping.vlm", PING);
    write(temp.path(), "bad.vlm", "nonsense {\n}\n");
    write(temp.path(), "environments/dev.vlm", "vars {\n  host: localhost\n}\n");

    vellum_cmd(temp.path())
        .args(["check", "ping.vlm", "bad.vlm", "environments/dev.vlm"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ok      ping.vlm"))
        .stdout(predicate::str::contains("failed  bad.vlm"))
        .stdout(predicate::str::contains("ok      environments/dev.vlm"))
        .stderr(predicate::str::contains("1 of 3 files failed"));

    vellum_cmd(temp.path())
        .args(["check", "ping.vlm"])
        .assert()
        .success();
}

#[test]
fn test_scan_summarizes_collection() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "api/collection.vlm", "docs {\nShared\n}\n");
    write(temp.path(), "api/environments/dev.vlm", "vars {\n  host: localhost\n}\n");
    write(temp.path(), "api/users/folder.vlm", "meta {\n  name: Users\n}\n");
    write(temp.path(), "api/ping.vlm", PING);

    vellum_cmd(temp.path())
        .args(["scan", "api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("root:         yes"))
        .stdout(predicate::str::contains("folders:      1"))
        .stdout(predicate::str::contains("environments: 1"))
        .stdout(predicate::str::contains("requests:     1"))
        .stdout(predicate::str::contains("GET     Ping"));
}

#[test]
fn test_config_file_must_exist_when_given() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "ping.vlm", PING);

    vellum_cmd(temp.path())
        .args(["parse", "ping.vlm", "--config", "missing.toml"])
        .assert()
        .failure();
}

#[test]
fn test_threshold_from_environment_variable() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "ping.vlm", PING);

    vellum_cmd(temp.path())
        .env("VELLUM_LANE_THRESHOLD_BYTES", "16")
        .args(["parse", "ping.vlm", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("lane_threshold_bytes=16"))
        .stderr(predicate::str::contains("lane=\"large\"").or(predicate::str::contains("lane=large")));
}
