// crates/infra/tests/settings_reader.rs
use std::{fs, path::PathBuf};

use row_index_filter_domain::ParseTiming;
use row_index_filter_infra::SettingsReader;
use row_index_filter_shared_kernel::InfrastructureError;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_json_settings() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "filter.json", r#"{ "indexes": "2,4-6", "parse_timing": "eager" }"#);

    let settings = SettingsReader::load(&path).unwrap();
    assert_eq!(settings.indexes.as_deref(), Some("2,4-6"));
    assert_eq!(settings.parse_timing, ParseTiming::Eager);
}

#[cfg(feature = "yaml")]
#[test]
fn loads_yaml_settings() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "filter.yml", "indexes: \"1-3\"\n");

    let settings = SettingsReader::load(&path).unwrap();
    assert_eq!(settings.indexes.as_deref(), Some("1-3"));
    assert_eq!(settings.parse_timing, ParseTiming::Lazy);
}

#[test]
fn unknown_extension_is_rejected_before_reading() {
    let err = SettingsReader::load(&PathBuf::from("does/not/exist.ini")).unwrap_err();
    assert!(matches!(err, InfrastructureError::UnsupportedSettingsFormat { .. }));
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let err = SettingsReader::load(&path).unwrap_err();
    match err {
        InfrastructureError::FileRead { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn invalid_json_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "filter.json", r#"{ "indexes": 5 }"#);
    let err = SettingsReader::load(&path).unwrap_err();
    assert!(matches!(err, InfrastructureError::SerializationError { ref format, .. } if format == "JSON"));
}
