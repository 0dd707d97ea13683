// crates/infra/tests/document_store.rs
use std::fs;

use rangekit_domain::{CURRENT_SCHEMA_VERSION, IntRange, RangeDocument};
use rangekit_infra::RangeDocumentStore;
use rangekit_shared_kernel::{InfrastructureError, RangeKitError};

const LEGACY_JSON: &str = r#"{
  "ranges": {
    "spawn_count": { "m_Min": 4, "m_Max": 1 },
    "wave_size": { "_min": 10, "_max": 20 }
  }
}"#;

#[test]
fn loads_legacy_json_and_marks_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranges.json");
    fs::write(&path, LEGACY_JSON).unwrap();

    let doc = RangeDocumentStore::load(&path).unwrap();
    assert!(doc.migrated());
    assert_eq!(doc.get("spawn_count"), Some(IntRange::new(1, 4)));
    assert_eq!(doc.get("wave_size"), Some(IntRange::new(10, 20)));
}

#[test]
fn save_writes_current_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranges.json");
    fs::write(&path, LEGACY_JSON).unwrap();

    let doc = RangeDocumentStore::load(&path).unwrap();
    RangeDocumentStore::save(&path, &doc).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("m_Min"));
    assert!(!text.contains("_max"));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["schema_version"], CURRENT_SCHEMA_VERSION);
    assert_eq!(value["ranges"]["spawn_count"], serde_json::json!({ "min": 1, "max": 4 }));

    let reloaded = RangeDocumentStore::load(&path).unwrap();
    assert!(!reloaded.migrated());
    assert_eq!(reloaded.get("spawn_count"), doc.get("spawn_count"));
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranges.yml");
    let mut doc = RangeDocument::new();
    doc.insert("loot", IntRange::new(3, -3));

    RangeDocumentStore::save(&path, &doc).unwrap();
    let reloaded = RangeDocumentStore::load(&path).unwrap();
    assert_eq!(reloaded, doc);
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranges.toml");
    fs::write(&path, "").unwrap();

    let err = RangeDocumentStore::load(&path).unwrap_err();
    assert!(matches!(
        err,
        RangeKitError::Infrastructure(InfrastructureError::UnsupportedFormat { .. })
    ));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = RangeDocumentStore::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.json"), "{err}");
}

#[test]
fn malformed_document_carries_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"ranges": {"x": {"min": 1}}}"#).unwrap();

    let err = RangeDocumentStore::load(&path).unwrap_err();
    let display = err.to_string();
    assert!(display.contains("loading range document"), "{display}");
    assert!(display.contains("missing field"), "{display}");
}
