use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const LEGACY: &str = r#"{"ranges": {"spawn": {"m_Min": 9, "m_Max": 2}, "loot": {"_min": 0, "_max": 1}}}"#;

#[test]
fn migrates_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranges.json");
    fs::write(&path, LEGACY).unwrap();

    Command::new(env!("CARGO_BIN_EXE_rangekit"))
        .arg("migrate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("migrated 2 range(s) from schema 0 to 2"));

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["ranges"]["spawn"], serde_json::json!({ "min": 2, "max": 9 }));
    assert_eq!(value["ranges"]["loot"], serde_json::json!({ "min": 0, "max": 1 }));
}

#[test]
fn migrates_json_to_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ranges.json");
    let output = dir.path().join("ranges.yaml");
    fs::write(&input, LEGACY).unwrap();

    Command::new(env!("CARGO_BIN_EXE_rangekit"))
        .arg("migrate")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let yaml = fs::read_to_string(&output).unwrap();
    assert!(yaml.contains("schema_version: 2"), "{yaml}");
    assert!(!yaml.contains("m_Min"));
    assert_eq!(fs::read_to_string(&input).unwrap(), LEGACY);
}

#[test]
fn migrate_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranges.json");
    fs::write(&path, LEGACY).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_rangekit"))
        .args(["--format", "json", "migrate"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["from_schema"], 0);
    assert_eq!(value["to_schema"], 2);
    assert_eq!(value["ranges"], 2);
    assert!(value["output"].as_str().unwrap().ends_with("ranges.json"));
}

#[test]
fn missing_input_fails_with_path() {
    let dir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_rangekit"))
        .arg("migrate")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.json"));
}
