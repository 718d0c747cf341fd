//! Settings persistence.

use pointer_agent::settings::default_settings_path;
use pointer_agent::{PointerError, PointerSettings, ThresholdProbe};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("pointer.json");
    let settings = PointerSettings::default()
        .with_drag_threshold(5.5)
        .with_threshold_probe(ThresholdProbe::LastPosition);

    settings.save(&path).unwrap();
    let loaded = PointerSettings::load(&path).unwrap();

    assert_eq!(loaded, settings);
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let loaded = PointerSettings::load(&dir.path().join("absent.json")).unwrap();
    assert_eq!(loaded, PointerSettings::default());
}

#[test]
fn test_load_invalid_threshold_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pointer.json");
    fs::write(&path, r#"{"drag_threshold": -2.0}"#).unwrap();

    let err = PointerSettings::load(&path).unwrap_err();
    assert!(matches!(err, PointerError::InvalidThreshold(_)));
}

#[test]
fn test_save_rejects_invalid_settings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pointer.json");
    let err = PointerSettings::default()
        .with_drag_threshold(f64::NAN)
        .save(&path)
        .unwrap_err();

    assert!(matches!(err, PointerError::InvalidThreshold(_)));
    assert!(!path.exists());
}

#[test]
fn test_default_path() {
    // Returns Some on platforms with a config dir
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with("pointer-agent/pointer.json"));
    }
}
