// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

fn gjgf(config: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gjgf").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(config.path());
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn normalizes_json_text_argument() {
    let config = tempfile::tempdir().unwrap();
    let value = stdout_json(
        gjgf(&config)
            .arg("normalize")
            .arg(r#"{"graph":{"nodes":[{"id":0},{"id":1}],"edges":[{"source":0,"target":1}]}}"#),
    );
    assert_eq!(
        value,
        json!({"graphs": [{"nodes": [{"id": 0}, {"id": 1}], "edges": [{"source": 0, "target": 1}]}]})
    );
}

#[test]
fn normalizes_files_and_stdin_together_in_order() {
    let config = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let file = work.path().join("g.json");
    std::fs::write(&file, json!({"graph": {"label": "file"}}).to_string()).unwrap();

    let value = stdout_json(
        gjgf(&config)
            .arg("normalize")
            .arg(&file)
            .arg("-")
            .write_stdin(json!({"graph": {"label": "stdin"}}).to_string()),
    );
    assert_eq!(
        value,
        json!({"graphs": [{"label": "file"}, {"label": "stdin"}]})
    );
}

#[test]
fn no_inputs_reads_stdin() {
    let config = tempfile::tempdir().unwrap();
    let value = stdout_json(
        gjgf(&config)
            .arg("normalize")
            .write_stdin(json!({"graphs": [{"a": 1}, {"b": 2}]}).to_string()),
    );
    assert_eq!(value, json!({"graphs": [{"a": 1}, {"b": 2}]}));
}

#[test]
fn pretty_output_spans_lines() {
    let config = tempfile::tempdir().unwrap();
    gjgf(&config)
        .args(["normalize", "--pretty", r#"{"graph": {"directed": true}}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"graphs\": ["));
}

#[test]
fn invalid_input_fails_with_message() {
    let config = tempfile::tempdir().unwrap();
    gjgf(&config)
        .args(["normalize", "not json, not a file"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "neither a filepath nor a valid JSON string",
        ));
}

#[test]
fn bad_sequence_item_names_its_position() {
    let config = tempfile::tempdir().unwrap();
    gjgf(&config)
        .args(["normalize", r#"{"graph": {}}"#, "still not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid item at position 1"));
}

#[test]
fn no_file_paths_treats_paths_as_text() {
    let config = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let file = work.path().join("g.json");
    std::fs::write(&file, r#"{"graph": {}}"#).unwrap();
    gjgf(&config)
        .arg("normalize")
        .arg("--no-file-paths")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "neither a filepath nor a valid JSON string",
        ));
}

#[test]
fn max_file_bytes_rejects_large_files() {
    let config = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let file = work.path().join("g.json");
    std::fs::write(&file, json!({"graph": {"label": "too big"}}).to_string()).unwrap();
    gjgf(&config)
        .args(["normalize", "--max-file-bytes", "8"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("above the 8 byte limit"));
}

#[test]
fn normalize_does_not_create_the_config_dir() {
    let work = tempfile::tempdir().unwrap();
    let missing = work.path().join("cfg");
    let mut cmd = Command::cargo_bin("gjgf").unwrap();
    let value = stdout_json(
        cmd.env_remove("RUST_LOG")
            .arg("--config-dir")
            .arg(&missing)
            .args(["normalize", r#"{"graph": {"directed": true}}"#]),
    );
    assert_eq!(value, json!({"graphs": [{"directed": true}]}));
    assert!(!missing.exists());
}

#[cfg(target_os = "linux")]
#[test]
fn normalize_leaves_the_platform_config_dir_alone() {
    let work = tempfile::tempdir().unwrap();
    let xdg = work.path().join("cfg");
    let mut cmd = Command::cargo_bin("gjgf").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", &xdg)
        .args(["normalize", r#"{"graph": {}}"#])
        .assert()
        .success();
    assert!(!xdg.exists());
}

#[test]
fn unusable_config_dir_falls_back_to_defaults() {
    let work = tempfile::tempdir().unwrap();
    let not_a_dir = work.path().join("plain-file");
    std::fs::write(&not_a_dir, "x").unwrap();
    let mut cmd = Command::cargo_bin("gjgf").unwrap();
    let value = stdout_json(
        cmd.env_remove("RUST_LOG")
            .arg("--config-dir")
            .arg(&not_a_dir)
            .args(["normalize", r#"{"graph": {"directed": true}}"#]),
    );
    assert_eq!(value, json!({"graphs": [{"directed": true}]}));
}

#[test]
fn corrupt_prefs_fall_back_to_defaults() {
    let config = tempfile::tempdir().unwrap();
    std::fs::write(config.path().join("convert.json"), "{not json").unwrap();
    gjgf(&config)
        .args(["normalize", r#"{"graph": {}}"#])
        .assert()
        .success()
        .stdout("{\"graphs\":[{}]}\n")
        .stderr(predicate::str::contains("using defaults"));
}

#[test]
fn prefs_init_persists_defaults_and_normalize_honors_them() {
    let config = tempfile::tempdir().unwrap();
    gjgf(&config)
        .args(["prefs", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"resolve_file_paths\": true"));
    let saved = config.path().join("convert.json");
    assert!(saved.is_file());

    std::fs::write(&saved, json!({"pretty": true}).to_string()).unwrap();
    gjgf(&config)
        .args(["normalize", r#"{"graph": {}}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"graphs\""));
}

#[test]
fn prefs_without_init_does_not_write() {
    let config = tempfile::tempdir().unwrap();
    gjgf(&config)
        .arg("prefs")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"pretty\": false"));
    assert!(!config.path().join("convert.json").exists());
}
