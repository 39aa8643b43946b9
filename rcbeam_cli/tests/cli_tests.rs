//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn rcbeam() -> Command {
    cargo_bin_cmd!("rcbeam")
}

fn json_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const BEAM_JSON: &str = r#"{
    "label": "B-1",
    "material": { "fc_kgcm2": 240.0, "fy_kgcm2": 4000.0 },
    "section": { "b_cm": 30.0, "h_cm": 50.0, "cover_cm": 4.0, "d_cm": 46.0 },
    "demand": { "mu_kgm": 5500.0, "vu_kg": 3257.0 },
    "tension": { "size": "DB16", "count": 3 },
    "stirrups": { "size": "RB6", "legs": 2, "spacing_cm": 15.0 }
}"#;

#[test]
fn test_cli_help() {
    rcbeam()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ACI 318"));
}

#[test]
fn test_cli_version() {
    rcbeam()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_check_defaults_pass() {
    rcbeam()
        .arg("check")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("RESULT: DESIGN OK"))
        .stdout(predicate::str::contains("=== Design Summary ==="))
        .stdout(predicate::str::contains("--- Shear Check ---"));
}

#[test]
fn test_check_single_bar_fails() {
    rcbeam()
        .args(["check", "--tension-count", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("DESIGN NOT OK"))
        .stdout(predicate::str::contains("Increase tension steel to 3 bars DB16"));
}

#[test]
fn test_check_wide_stirrups_fail() {
    rcbeam()
        .args(["check", "--spacing", "40"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("governs: Stirrup spacing"));
}

#[test]
fn test_check_compression_steel_logged() {
    rcbeam()
        .args(["check", "--compression", "--compression-count", "2"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("--- Compression Steel ---"))
        .stdout(predicate::str::contains("Mn,compression"));
}

#[test]
fn test_check_json_output() {
    let output = rcbeam()
        .args(["check", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["design_ok"], true);
    assert!(json["generated_at"].is_string());
    assert_eq!(json["result"]["ratio_status"], "ClampedToMin");
    assert!(json["log"].as_array().unwrap().len() > 10);
}

#[test]
fn test_check_zero_width_is_error() {
    let output = rcbeam()
        .args(["check", "-b", "0", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["design_ok"], false);
    assert_eq!(json["error"]["type"], "NonFiniteValue");
    assert!(json.get("result").is_none());
}

#[test]
fn test_check_unknown_bar_rejected() {
    rcbeam()
        .args(["check", "--tension-bar", "DB14"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("DB14"));
}

#[test]
fn test_check_from_input_file() {
    let file = json_file(BEAM_JSON);
    rcbeam()
        .arg("check")
        .arg("--input")
        .arg(file.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("RC BEAM DESIGN REPORT - B-1"));
}

#[test]
fn test_check_bad_input_file() {
    let file = json_file(&BEAM_JSON.replace("RB6", "RB8"));
    rcbeam()
        .arg("check")
        .arg("--input")
        .arg(file.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("RB8"));
}

#[test]
fn test_check_missing_input_file() {
    rcbeam()
        .args(["check", "--input", "does-not-exist.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_check_settings_file_and_phi_flag() {
    let settings = json_file(r#"{ "code": "Test edition", "phi_b": 0.8 }"#);
    let output = rcbeam()
        .arg("check")
        .arg("--settings")
        .arg(settings.path())
        .args(["--phi-s", "0.6", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let result = &json["result"];
    let mn = result["mn_kgm"].as_f64().unwrap();
    let phi_mn = result["phi_mn_kgm"].as_f64().unwrap();
    let vc = result["vc_kg"].as_f64().unwrap();
    let phi_vc = result["phi_vc_kg"].as_f64().unwrap();
    assert!((phi_mn - 0.8 * mn).abs() < 1e-6);
    assert!((phi_vc - 0.6 * vc).abs() < 1e-6);
}

#[test]
fn test_check_invalid_phi() {
    rcbeam()
        .args(["check", "--phi-b", "1.5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("phi_b"));
}

#[test]
fn test_catalog() {
    rcbeam()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("DB32"))
        .stdout(predicate::str::contains("RB9"));
}

#[test]
fn test_catalog_json() {
    let output = rcbeam().args(["catalog", "--format", "json"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["main_bars"].as_array().unwrap().len(), 5);
    assert_eq!(json["stirrups"].as_array().unwrap().len(), 3);
    assert_eq!(json["main_bars"][1]["area_cm2"], 2.01);
}

#[test]
fn test_equations_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("EQUATIONS.md");
    rcbeam()
        .arg("equations")
        .arg("--output")
        .arg(&path)
        .assert()
        .success();

    let markdown = std::fs::read_to_string(&path).unwrap();
    assert!(markdown.contains("Concrete Shear Capacity"));
}
