//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Build command for the icdesigner-cli binary.
fn icdesigner_cli() -> Command {
    cargo_bin_cmd!("icdesigner-cli")
}

/// Path to icdesigner library test fixtures (relative to workspace).
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("icdesigner")
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_cli_help() {
    let mut cmd = icdesigner_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Integrated circuit"));
}

#[test]
fn test_cli_version() {
    let mut cmd = icdesigner_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_check_valid_circuit() {
    let mut cmd = icdesigner_cli();

    cmd.arg("check").arg(fixture("half_adder.json"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Valid IC"));
}

#[test]
fn test_cli_check_disconnected_fails() {
    let mut cmd = icdesigner_cli();

    cmd.arg("check").arg(fixture("disconnected.json"));
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("not connected"));
}

#[test]
fn test_cli_check_selection_with_external_wire() {
    let mut cmd = icdesigner_cli();

    cmd.arg("check")
        .arg(fixture("half_adder.json"))
        .args(["-s", "a", "-s", "b", "-s", "x", "-s", "n", "-s", "s"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("outside the group"));
}

#[test]
fn test_cli_check_json() {
    let mut cmd = icdesigner_cli();

    cmd.arg("check")
        .arg(fixture("with_display.json"))
        .arg("--format")
        .arg("json");
    let output = cmd.assert().failure().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["reason"]["reason"], "blacklisted");
    assert_eq!(json["reason"]["kind"], "SegmentDisplay");
}

#[test]
fn test_cli_check_unknown_reference() {
    let mut cmd = icdesigner_cli();

    cmd.arg("check")
        .arg(fixture("half_adder.json"))
        .args(["--select", "nope"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_cli_check_missing_file() {
    let mut cmd = icdesigner_cli();

    cmd.arg("check").arg(fixture("does_not_exist.json"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_cli_create_human() {
    let mut cmd = icdesigner_cli();

    cmd.arg("create").arg(fixture("half_adder.json"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("IC: 150 x 50"))
        .stdout(predicate::str::contains("Carry"));
}

#[test]
fn test_cli_create_json_with_size_override() {
    let mut cmd = icdesigner_cli();

    cmd.arg("create")
        .arg(fixture("switch_constant.json"))
        .args(["--width", "200", "--height", "100", "--format", "json"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["width"], 200.0);
    assert_eq!(json["height"], 100.0);
    assert_eq!(json["inputs"], 1);
    assert_eq!(json["outputs"], 1);
    assert_eq!(json["ports"][0]["name"], "EN");
    assert_eq!(json["ports"][0]["side"], "input");
    assert_eq!(json["ports"][0]["origin"]["x"], -100.0);
    assert_eq!(json["ports"][1]["origin"]["x"], 100.0);
}

#[test]
fn test_cli_create_rejects_negative_width() {
    let mut cmd = icdesigner_cli();

    cmd.arg("create")
        .arg(fixture("switch_constant.json"))
        .args(["--width=-100", "--height", "50"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--width must be a positive number"));
}

#[test]
fn test_cli_create_rejects_zero_height() {
    let mut cmd = icdesigner_cli();

    cmd.arg("create")
        .arg(fixture("switch_constant.json"))
        .args(["--height", "0"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--height must be a positive number"));
}

#[test]
fn test_cli_create_layout_options() {
    let mut cmd = icdesigner_cli();

    cmd.arg("create")
        .arg(fixture("switch_constant.json"))
        .args(["--base-size", "100", "--format", "json"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    // "OUT" is the longest port name
    assert_eq!(json["width"], 160.0);
    assert_eq!(json["height"], 50.0);
}

#[test]
fn test_cli_create_invalid_fails() {
    let mut cmd = icdesigner_cli();

    cmd.arg("create").arg(fixture("with_display.json"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be placed inside an IC"));
}

#[test]
fn test_cli_create_from_saved_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pair.json");
    std::fs::write(
        &path,
        r#"{
            "components": [
                { "ref": "in", "kind": "Button", "name": "GO" },
                { "ref": "out", "kind": "LED", "name": "LIT", "x": 100 }
            ],
            "wires": [ { "from": { "component": "in" }, "to": { "component": "out" } } ]
        }"#,
    )
    .unwrap();

    let mut cmd = icdesigner_cli();
    cmd.arg("create").arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("GO"))
        .stdout(predicate::str::contains("LIT"));
}

#[test]
fn test_cli_info_gate() {
    let mut cmd = icdesigner_cli();

    cmd.arg("info").arg("and");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("AND Gate"))
        .stdout(predicate::str::contains("group 0 can change"))
        .stdout(predicate::str::contains("angle"));
}

#[test]
fn test_cli_info_json() {
    let mut cmd = icdesigner_cli();

    cmd.arg("info").arg("wire").arg("--format").arg("json");
    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["baseKind"], "Wire");
    assert_eq!(json["propInfo"]["color"]["initial"], "#ffffff");
}

#[test]
fn test_cli_info_unknown_kind() {
    let mut cmd = icdesigner_cli();

    cmd.arg("info").arg("flux-capacitor");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown component kind"));
}

#[test]
fn test_cli_kinds() {
    let mut cmd = icdesigner_cli();

    cmd.arg("kinds").arg("--verbose");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SegmentDisplay"))
        .stdout(predicate::str::contains("changeable"));
}
