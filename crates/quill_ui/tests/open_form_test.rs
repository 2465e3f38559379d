use quill_editor::EditorError;
use quill_forms::{save_form, Form, Property, PropertyType};
use quill_ui::{open_form, LaunchError};
use tempfile::TempDir;

#[test]
fn test_open_form_accepts_builtin_types() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("survey.json");
    let form = Form::sample();
    save_form(&form, &path).expect("save");

    let loaded = open_form(&path).expect("open");

    assert_eq!(loaded.controls.len(), form.controls.len());
}

#[test]
fn test_open_form_rejects_type_without_editor() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("survey.json");
    let mut form = Form::sample();
    let color = PropertyType::Custom("color".to_string());
    form.controls[0]
        .properties
        .insert(Property::new("tint", "Tint", color.clone()).with_value("#ff0000"));
    save_form(&form, &path).expect("save");

    let err = open_form(&path).expect_err("unknown type");

    match err {
        LaunchError::Unsupported(EditorError::UnknownPropertyType(found)) => assert_eq!(found, color),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_open_form_reports_missing_file() {
    let dir = TempDir::new().expect("temp dir");

    let err = open_form(&dir.path().join("missing.json")).expect_err("missing file");

    assert!(matches!(err, LaunchError::Load(_)));
}
