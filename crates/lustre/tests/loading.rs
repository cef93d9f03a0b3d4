//! File loading tests.

use std::fs;

use lustre::{Customization, Field, LustreError};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "ocean.yaml",
        "primaryColor: \"#0ea5e9\"\nglassOpacity: 25\nhoverScale: 1.1\n",
    );

    let c = Customization::from_file(&path).unwrap();
    let r = c.resolver();
    assert_eq!(r.color(Field::PrimaryColor), "#0ea5e9");
    assert_eq!(r.glass_fill(), "#0ea5e940");
    assert_eq!(r.number(Field::HoverScale), 1.1);
}

#[test]
fn loads_yml_and_json_files() {
    let dir = TempDir::new().unwrap();
    let yml = write(&dir, "a.yml", "borderRadius: 4\n");
    let json = write(&dir, "b.JSON", r#"{"borderRadius": "6"}"#);

    assert_eq!(Customization::from_file(yml).unwrap().get("borderRadius"), Some("4"));
    assert_eq!(Customization::from_file(json).unwrap().get("borderRadius"), Some("6"));
}

#[test]
fn missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = Customization::from_file(dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, LustreError::Read { .. }));
}

#[test]
fn malformed_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.json", "{ not json");
    let err = Customization::from_file(&path).unwrap_err();
    match err {
        LustreError::Parse { path: Some(p), .. } => assert_eq!(p, path),
        other => panic!("expected parse error with path, got {:?}", other),
    }
}

#[test]
fn nested_yaml_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "nested.yaml", "colors:\n  primary: \"#fff\"\n");
    assert!(matches!(
        Customization::from_file(&path),
        Err(LustreError::Parse { .. })
    ));
}

#[test]
fn saved_customization_reloads() {
    let dir = TempDir::new().unwrap();
    let original = Customization::defaults().with_preset("forest").unwrap();
    let path = dir.path().join("saved.json");
    fs::write(&path, serde_json::to_string_pretty(&original).unwrap()).unwrap();

    let reloaded = Customization::from_file(&path).unwrap();
    assert_eq!(reloaded, original);
    assert_eq!(reloaded.active_preset().map(|p| p.name), Some("Forest"));
}
