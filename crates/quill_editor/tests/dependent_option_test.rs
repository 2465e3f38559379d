use pretty_assertions::assert_eq;
use quill_editor::{Editor, NodeId};
use quill_forms::{Control, ControlKind, OptionRow, PropertyId, PropertyValue};

fn select_editor(rows: Vec<OptionRow>, other: PropertyValue) -> Editor {
    let mut control = Control::new(ControlKind::InputSelectOne, "select_one1");
    control
        .property_mut(&PropertyId::from("options"))
        .expect("options")
        .value = PropertyValue::Options(rows);
    control.property_mut(&PropertyId::from("other")).expect("other").value = other;
    let mut editor = Editor::new(control);
    editor.render_panel();
    editor
}

fn abc() -> Vec<OptionRow> {
    vec![OptionRow::new("a"), OptionRow::new("b"), OptionRow::new("c")]
}

fn selected(values: &[&str]) -> PropertyValue {
    PropertyValue::Selection(values.iter().map(|v| v.to_string()).collect())
}

fn other(editor: &Editor) -> PropertyValue {
    editor.property(&PropertyId::from("other")).expect("other").value.clone()
}

fn part(editor: &Editor, id: &str, class: &str) -> NodeId {
    let host = editor.panel_host(id).expect("editor host");
    editor.document().find_by_class(host, class).expect("part")
}

fn option_items(editor: &Editor) -> Vec<NodeId> {
    let list = part(editor, "options", "optionsList");
    editor.document().children(list)
}

fn choices(editor: &Editor) -> Vec<String> {
    let select = part(editor, "other", "editorSelect");
    editor
        .document()
        .children(select)
        .into_iter()
        .map(|o| editor.document().value(o))
        .collect()
}

#[test]
fn test_disabled_dependent_shows_choices_without_selection() {
    let editor = select_editor(abc(), PropertyValue::Boolean(false));
    let select = part(&editor, "other", "editorSelect");

    assert!(!editor.document().is_checked(part(&editor, "other", "editorEnabled")));
    assert!(editor.document().is_disabled(select));
    assert_eq!(choices(&editor), vec!["a", "b", "c"]);
    assert_eq!(editor.document().select_value(select), None);
    assert_eq!(other(&editor), PropertyValue::Boolean(false));
}

#[test]
fn test_stored_value_selects_matching_row() {
    let editor = select_editor(abc(), selected(&["b"]));
    let select = part(&editor, "other", "editorSelect");

    assert!(editor.document().is_checked(part(&editor, "other", "editorEnabled")));
    assert_eq!(editor.document().select_value(select).as_deref(), Some("b"));
}

#[test]
fn test_enabling_resolves_first_row() {
    let mut editor = select_editor(abc(), PropertyValue::Boolean(false));
    let enable = part(&editor, "other", "editorEnabled");

    editor.click(enable);

    assert_eq!(other(&editor), selected(&["a"]));
    assert!(!editor.document().is_disabled(part(&editor, "other", "editorSelect")));

    editor.click(enable);
    assert_eq!(other(&editor), PropertyValue::Boolean(false));
}

#[test]
fn test_removing_selected_row_picks_valid_value() {
    let mut editor = select_editor(abc(), selected(&["b"]));
    let second = option_items(&editor)[1];
    let remove = editor.document().find_by_class(second, "removeOption").expect("remove link");

    editor.click(remove);

    assert_eq!(other(&editor), selected(&["a"]));
    assert_eq!(choices(&editor), vec!["a", "c"]);
    let select = part(&editor, "other", "editorSelect");
    assert_eq!(editor.document().select_value(select).as_deref(), Some("a"));
}

#[test]
fn test_renamed_row_stays_selected() {
    let mut editor = select_editor(abc(), selected(&["c"]));
    let third = option_items(&editor)[2];
    let value_field = *editor
        .document()
        .find_all_by_class(third, "editorTextfield")
        .last()
        .expect("value field");

    editor.type_text(value_field, "cherry");

    assert_eq!(other(&editor), selected(&["cherry"]));
    assert_eq!(choices(&editor), vec!["a", "b", "cherry"]);
}

#[test]
fn test_picked_row_is_remembered_across_duplicate_values() {
    let rows = vec![OptionRow::new("same"), OptionRow::new("same"), OptionRow::new("x")];
    let mut editor = select_editor(rows, selected(&["same"]));
    let select = part(&editor, "other", "editorSelect");
    let second_choice = editor.document().children(select)[1];

    assert!(editor.select_option(select, second_choice));
    let second = option_items(&editor)[1];
    let value_field = *editor
        .document()
        .find_all_by_class(second, "editorTextfield")
        .last()
        .expect("value field");
    editor.type_text(value_field, "moved");

    assert_eq!(other(&editor), selected(&["moved"]));
    let choices = editor.document().children(select);
    assert_eq!(editor.document().selected_option(select), Some(choices[1]));
}

#[test]
fn test_empty_source_leaves_selection_unresolved() {
    let mut editor = select_editor(vec![OptionRow::new("only")], selected(&["only"]));
    let only = option_items(&editor)[0];
    let remove = editor.document().find_by_class(only, "removeOption").expect("remove link");

    editor.click(remove);

    assert_eq!(other(&editor), PropertyValue::Selection(Vec::new()));
    assert!(choices(&editor).is_empty());

    let host = editor.panel_host("options").expect("options editor");
    let add = editor.document().find_by_class(host, "addOption").expect("add link");
    editor.click(add);
    assert_eq!(other(&editor), selected(&["untitled"]));
}

#[test]
fn test_stale_stored_value_falls_back_to_first_row() {
    let editor = select_editor(abc(), selected(&["zzz"]));
    assert_eq!(other(&editor), selected(&["a"]));
}

#[test]
fn test_typing_into_source_rows_reuses_choice_nodes() {
    let rows: Vec<OptionRow> = (0..10).map(|i| OptionRow::new(format!("v{}", i))).collect();
    let mut editor = select_editor(rows, selected(&["v0"]));
    let select = part(&editor, "other", "editorSelect");
    let before = editor.document().children(select);
    let slots = editor.document().capacity();
    let value_field = *editor
        .document()
        .find_all_by_class(option_items(&editor)[1], "editorTextfield")
        .last()
        .expect("value field");

    for i in 0..200 {
        editor.type_text(value_field, format!("typed{}", i));
    }

    assert_eq!(editor.document().children(select), before);
    assert_eq!(editor.document().capacity(), slots);
    assert_eq!(choices(&editor)[1], "typed199");
    assert_eq!(other(&editor), selected(&["v0"]));
}

#[test]
fn test_removed_source_row_drops_only_its_choice() {
    let mut editor = select_editor(abc(), selected(&["a"]));
    let select = part(&editor, "other", "editorSelect");
    let before = editor.document().children(select);
    let remove = editor
        .document()
        .find_by_class(option_items(&editor)[1], "removeOption")
        .expect("remove link");

    editor.click(remove);

    assert_eq!(editor.document().children(select), vec![before[0], before[2]]);
    assert_eq!(choices(&editor), vec!["a", "c"]);
}
