//! Settings file loading.

use diagram_gestures::{GestureSettings, Platform};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "markers": {{ "interactive": "data-hit" }}, "suppress_default_shortcuts": false }}"#
    )
    .unwrap();

    let settings = GestureSettings::load(file.path()).unwrap();
    assert_eq!(settings.markers.interactive, "data-hit");
    assert_eq!(settings.markers.draggable, "data-draggable");
    assert!(!settings.suppress_default_shortcuts);
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = GestureSettings::load_or_default(dir.path().join("gestures.json")).unwrap();
    assert_eq!(settings, GestureSettings::default());
}

#[test]
fn test_load_reports_path_on_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let err = GestureSettings::load(file.path()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("parsing gesture settings"));
    assert!(message.contains(&file.path().display().to_string()));
}

#[test]
fn test_load_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(GestureSettings::load(dir.path().join("missing.json")).is_err());
}

#[test]
fn test_platform_override_round_trips() {
    let settings = GestureSettings {
        platform: Some(Platform::Apple),
        ..Default::default()
    };
    let json = serde_json::to_string(&settings).unwrap();
    assert!(json.contains(r#""platform":"apple""#));
    assert_eq!(GestureSettings::from_json(&json).unwrap(), settings);
}
