use pretty_assertions::assert_eq;
use quill_editor::{BindingState, Editor, EditorError, Language, NodeId, StaticLanguages, Target};
use quill_forms::{
    Control, ControlKind, LocalizedText, Property, PropertyId, PropertyType, PropertyValue, RangeValue,
    ValidationResult,
};

fn editor_for(kind: ControlKind, edit: impl FnOnce(&mut Control)) -> Editor {
    let mut control = Control::new(kind, "field1");
    edit(&mut control);
    let mut editor = Editor::new(control);
    editor.render_panel();
    editor
}

fn set(control: &mut Control, id: &str, value: PropertyValue) {
    control
        .property_mut(&PropertyId::from(id))
        .unwrap_or_else(|| panic!("no property {}", id))
        .value = value;
}

fn host(editor: &Editor, id: &str) -> NodeId {
    editor
        .panel_host(id)
        .unwrap_or_else(|| panic!("no editor for {}", id))
}

fn part(editor: &Editor, host: NodeId, class: &str) -> NodeId {
    editor
        .document()
        .find_by_class(host, class)
        .unwrap_or_else(|| panic!("no .{} element", class))
}

fn value(editor: &Editor, id: &str) -> PropertyValue {
    editor.property(&PropertyId::from(id)).expect("property").value.clone()
}

#[test]
fn test_every_default_property_gets_one_editor() {
    for kind in ControlKind::all_kinds() {
        let editor = editor_for(kind.clone(), |_| {});
        let panel = editor.panel().expect("panel");
        let hosts = editor.document().children(panel);
        assert_eq!(hosts.len(), editor.control().properties.len(), "{}", kind.as_str());
        for host in hosts {
            assert!(editor.document().find_by_class(host, "editor").is_some());
            assert!(matches!(editor.binding_state(host), BindingState::Bound { .. }));
        }
    }
}

#[test]
fn test_text_editor_shows_value() {
    let editor = editor_for(ControlKind::InputText, |_| {});
    let host = host(&editor, "name");
    let field = part(&editor, host, "editorTextfield");

    assert_eq!(editor.document().value(field), "field1");
    assert_eq!(editor.document().attr(field, "id").as_deref(), Some("property_Data Name"));
    let fragment = part(&editor, host, "property-name");
    assert_eq!(editor.document().attr(fragment, "data-name").as_deref(), Some("name"));
}

#[test]
fn test_boolean_editor_shows_value() {
    let editor = editor_for(ControlKind::InputText, |c| set(c, "required", PropertyValue::Boolean(true)));
    let required = part(&editor, host(&editor, "required"), "editorCheckbox");
    let read_only = part(&editor, host(&editor, "readOnly"), "editorCheckbox");

    assert!(editor.document().is_checked(required));
    assert!(!editor.document().is_checked(read_only));
}

#[test]
fn test_rich_text_editor_shows_each_language() {
    let mut label = LocalizedText::new();
    label.insert("_".to_string(), "First name".to_string());
    let editor = editor_for(ControlKind::InputText, |c| set(c, "label", PropertyValue::Localized(label)));
    let host = host(&editor, "label");

    let fields = editor.document().find_all_by_class(host, "editorTextfield");
    assert_eq!(fields.len(), 1);
    assert_eq!(editor.document().value(fields[0]), "First name");
    assert_eq!(editor.document().attr(fields[0], "lang").as_deref(), Some("_"));
}

#[test]
fn test_rich_text_editor_writes_each_language_key() {
    let mut editor = Editor::new(Control::new(ControlKind::InputText, "field1")).with_languages(
        StaticLanguages::new(vec![Language::new("en", "English"), Language::new("fr", "French")]),
    );
    editor.render_panel();
    let host = host(&editor, "label");
    let fields = editor.document().find_all_by_class(host, "editorTextfield");
    assert_eq!(fields.len(), 2);

    editor.type_text(fields[1], "Prénom");
    editor.type_text(fields[0], "First name");

    let mut expected = LocalizedText::new();
    expected.insert("en".to_string(), "First name".to_string());
    expected.insert("fr".to_string(), "Prénom".to_string());
    assert_eq!(value(&editor, "label"), PropertyValue::Localized(expected));
}

#[test]
fn test_rich_text_rejects_plain_string_value() {
    let mut control = Control::new(ControlKind::InputText, "field1");
    set(&mut control, "hint", PropertyValue::String("typed by hand".to_string()));
    let mut editor = Editor::new(control);
    let host = editor.document_mut().create("li", "");

    let err = editor
        .bind_property(host, &PropertyId::from("hint"))
        .expect_err("string is not localized text");

    assert!(matches!(err, EditorError::UnexpectedValue { .. }));
    assert!(editor.document().children(host).is_empty());
    assert_eq!(
        value(&editor, "hint"),
        PropertyValue::String("typed by hand".to_string())
    );
}

#[test]
fn test_enum_editor_defaults_to_first_option() {
    let editor = editor_for(ControlKind::InputNumeric, |_| {});
    let select = part(&editor, host(&editor, "kind"), "editorSelect");

    assert_eq!(editor.document().select_value(select).as_deref(), Some("Integer"));
    assert_eq!(value(&editor, "kind"), PropertyValue::String("Integer".to_string()));
}

#[test]
fn test_enum_editor_keeps_valid_value() {
    let editor = editor_for(ControlKind::InputNumeric, |c| set(c, "kind", "Decimal".into()));
    let select = part(&editor, host(&editor, "kind"), "editorSelect");
    assert_eq!(editor.document().select_value(select).as_deref(), Some("Decimal"));
}

#[test]
fn test_range_editor_shows_record() {
    let range = RangeValue {
        min: "1".to_string(),
        max: "10".to_string(),
        min_inclusive: true,
        max_inclusive: false,
    };
    let editor = editor_for(ControlKind::InputNumeric, |c| set(c, "range", range.into()));
    let host = host(&editor, "range");
    let doc = editor.document();

    assert!(doc.is_checked(part(&editor, host, "editorEnabled")));
    assert_eq!(doc.value(part(&editor, host, "min")), "1");
    assert_eq!(doc.value(part(&editor, host, "max")), "10");
    assert!(doc.is_checked(part(&editor, host, "minInclusive")));
    assert!(!doc.is_checked(part(&editor, host, "maxInclusive")));
    assert!(!doc.is_disabled(part(&editor, host, "min")));
}

#[test]
fn test_unset_range_shows_disabled() {
    let editor = editor_for(ControlKind::InputNumeric, |c| set(c, "range", PropertyValue::Unset));
    let host = host(&editor, "range");

    assert!(!editor.document().is_checked(part(&editor, host, "editorEnabled")));
    assert!(editor.document().is_disabled(part(&editor, host, "min")));
    assert!(editor.document().is_disabled(part(&editor, host, "maxInclusive")));
}

#[test]
fn test_range_disable_then_enable_restores_record() {
    let range = RangeValue {
        min: "3".to_string(),
        max: "7".to_string(),
        min_inclusive: false,
        max_inclusive: true,
    };
    let mut editor = editor_for(ControlKind::InputNumeric, |c| set(c, "range", range.clone().into()));
    let enabled = part(&editor, host(&editor, "range"), "editorEnabled");

    editor.click(enabled);
    assert_eq!(value(&editor, "range"), PropertyValue::Boolean(false));
    assert!(editor.document().is_disabled(part(&editor, host(&editor, "range"), "max")));

    editor.click(enabled);
    assert_eq!(value(&editor, "range"), PropertyValue::Range(range));
}

#[test]
fn test_date_range_disable_then_enable_restores_record() {
    let range = RangeValue {
        min: "2024-01-01".to_string(),
        max: "2024-12-31".to_string(),
        min_inclusive: true,
        max_inclusive: false,
    };
    let mut editor = editor_for(ControlKind::InputDate, |c| set(c, "range", range.clone().into()));
    let enabled = part(&editor, host(&editor, "range"), "editorEnabled");

    editor.click(enabled);
    assert_eq!(value(&editor, "range"), PropertyValue::Boolean(false));
    assert!(editor.document().is_disabled(part(&editor, host(&editor, "range"), "min")));
    assert!(editor.document().is_hidden(host(&editor, "invalidText")));

    editor.click(enabled);
    assert_eq!(value(&editor, "range"), PropertyValue::Range(range));
    assert!(!editor.document().is_hidden(host(&editor, "invalidText")));
}

#[test]
fn test_typing_into_range_keeps_text_verbatim() {
    let mut editor = editor_for(ControlKind::InputNumeric, |c| set(c, "range", RangeValue::default().into()));
    let min = part(&editor, host(&editor, "range"), "min");

    editor.type_text(min, "-");
    let stored = value(&editor, "range");
    assert_eq!(stored.as_range().map(|r| r.min.as_str()), Some("-"));
}

#[test]
fn test_only_strict_false_hides_dependent_editor() {
    let mut editor = editor_for(ControlKind::InputNumeric, |_| {});
    let invalid = host(&editor, "invalidText");
    assert_eq!(editor.binding_state(invalid), BindingState::Bound { visible: false });

    let range = PropertyId::from("range");
    let shown = [
        PropertyValue::Integer(0),
        PropertyValue::String(String::new()),
        PropertyValue::Unset,
        PropertyValue::Boolean(true),
        PropertyValue::Range(RangeValue::default()),
    ];
    for value in shown {
        editor.set_value(&range, value.clone()).expect("set range");
        assert_eq!(
            editor.binding_state(invalid),
            BindingState::Bound { visible: true },
            "{:?} should not hide",
            value
        );
    }

    editor.set_value(&range, PropertyValue::Boolean(false)).expect("set range");
    assert!(editor.document().is_hidden(invalid));
}

#[test]
fn test_validation_results_toggle_error_list() {
    let mut editor = editor_for(ControlKind::InputText, |_| {});
    let name = PropertyId::from("name");
    let host = host(&editor, "name");

    editor
        .set_validations(
            &name,
            vec![
                ValidationResult::failed("Data Name must be unique"),
                ValidationResult::passed("not empty"),
            ],
        )
        .expect("validations");
    assert!(editor.document().has_class(host, "error"));
    let list = part(&editor, host, "errorList");
    assert_eq!(editor.document().text_content(list), "Data Name must be unique");

    editor
        .set_validations(&name, vec![ValidationResult::passed("not empty")])
        .expect("validations");
    assert!(!editor.document().has_class(host, "error"));
    assert!(editor.document().find_by_class(host, "errorList").is_none());
}

#[test]
fn test_failing_validations_show_at_bind() {
    let editor = editor_for(ControlKind::InputText, |c| {
        c.property_mut(&PropertyId::from("constraint"))
            .expect("constraint")
            .validations = vec![ValidationResult::failed("Constraint is not a valid expression")];
    });
    let host = host(&editor, "constraint");

    assert!(editor.document().has_class(host, "error"));
    let list = part(&editor, host, "errorList");
    assert_eq!(
        editor.document().text_content(list),
        "Constraint is not a valid expression"
    );
}

#[test]
fn test_validation_change_for_other_property_leaves_host_alone() {
    let mut editor = editor_for(ControlKind::InputText, |_| {});
    let name_host = host(&editor, "name");
    editor
        .property_mut(&PropertyId::from("name"))
        .expect("name")
        .validations = vec![ValidationResult::failed("Data Name must be unique")];

    editor
        .set_validations(
            &PropertyId::from("hint"),
            vec![ValidationResult::failed("Hint is too long")],
        )
        .expect("validations");

    assert!(!editor.document().has_class(name_host, "error"));
    assert!(editor.document().find_by_class(name_host, "errorList").is_none());
    assert!(editor.document().has_class(host(&editor, "hint"), "error"));
}

#[test]
fn test_unknown_type_leaves_host_empty() {
    let mut control = Control::new(ControlKind::InputText, "field1");
    control
        .properties
        .insert(Property::new("mystery", "Mystery", PropertyType::Custom("mystery".to_string())));
    let mut editor = Editor::new(control);
    let host = editor.document_mut().create("li", "");

    let result = editor.bind_property(host, &PropertyId::from("mystery"));

    assert_eq!(
        result,
        Err(EditorError::UnknownPropertyType(PropertyType::Custom("mystery".to_string())))
    );
    assert!(editor.document().children(host).is_empty());
    assert_eq!(editor.binding_state(host), BindingState::Unbound);
}

#[test]
fn test_panel_skips_broken_properties() {
    let mut control = Control::new(ControlKind::InputText, "field1");
    control
        .properties
        .insert(Property::new("orphan", "Orphan", PropertyType::Text).display_if("nowhere"));
    control
        .properties
        .insert(Property::new("loose", "Loose", PropertyType::DependentOption));
    let count = control.properties.len();
    let mut editor = Editor::new(control);
    let panel = editor.render_panel();

    assert_eq!(editor.document().children(panel).len(), count - 2);
    assert!(editor.panel_host("orphan").is_none());

    let host = editor.document_mut().create("li", "");
    assert_eq!(
        editor.bind_property(host, &PropertyId::from("orphan")),
        Err(EditorError::MissingSibling {
            property: PropertyId::from("orphan"),
            sibling: PropertyId::from("nowhere"),
        })
    );
    assert_eq!(
        editor.bind_property(host, &PropertyId::from("loose")),
        Err(EditorError::MissingBinding(PropertyId::from("loose")))
    );
}

#[test]
fn test_rebind_replaces_host_and_releases_listeners() {
    let mut editor = editor_for(ControlKind::InputText, |_| {});
    let old = host(&editor, "name");
    let old_field = part(&editor, old, "editorTextfield");
    assert_eq!(editor.listener_count(old_field), 1);

    let fresh = editor.rebind(old).expect("rebind");

    assert_eq!(editor.binding_state(old), BindingState::Destroyed);
    assert_eq!(editor.binding_state(fresh), BindingState::Bound { visible: true });
    assert_eq!(editor.listener_count(old_field), 0);
    assert_eq!(editor.panel_host("name"), Some(fresh));
    assert_eq!(
        editor.binding_target(fresh),
        Some(&Target::Property(PropertyId::from("name")))
    );
    assert_eq!(editor.rebind(old), Err(EditorError::NotBound(old)));
}

#[test]
fn test_removed_host_ignores_events() {
    let mut editor = editor_for(ControlKind::InputText, |_| {});
    let host = host(&editor, "name");
    let field = part(&editor, host, "editorTextfield");

    editor.remove_node(host);

    assert!(!editor.type_text(field, "changed"));
    assert_eq!(value(&editor, "name"), PropertyValue::String("field1".to_string()));
}
