use quill_editor::{Editor, NodeId, Notification, NotificationKind};
use quill_forms::{Control, ControlKind, OptionRow, PropertyId, PropertyValue, RangeValue};
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

fn recorded(control: Control) -> (Editor, Log) {
    let mut editor = Editor::new(control);
    editor.render_panel();
    let log: Log = Rc::default();
    let sink = Rc::clone(&log);
    editor.subscribe(
        None,
        NotificationKind::PropertiesUpdated,
        Rc::new(move |_: &mut Editor, id: &PropertyId| sink.borrow_mut().push(id.to_string())),
    );
    (editor, log)
}

fn take(log: &Log) -> Vec<String> {
    log.borrow_mut().drain(..).collect()
}

fn part(editor: &Editor, id: &str, class: &str) -> NodeId {
    let host = editor.panel_host(id).expect("editor host");
    editor.document().find_by_class(host, class).expect("part")
}

fn select_control() -> Control {
    let mut control = Control::new(ControlKind::InputSelectOne, "select_one1");
    control
        .property_mut(&PropertyId::from("options"))
        .expect("options")
        .value = PropertyValue::Options(vec![OptionRow::new("a"), OptionRow::new("b")]);
    control
}

#[test]
fn test_text_boolean_and_enum_publish_once() {
    let (mut editor, log) = recorded(Control::new(ControlKind::InputNumeric, "numeric1"));

    editor.type_text(part(&editor, "name", "editorTextfield"), "age");
    assert_eq!(take(&log), vec!["name"]);

    editor.click(part(&editor, "required", "editorCheckbox"));
    assert_eq!(take(&log), vec!["required"]);

    editor.select(part(&editor, "kind", "editorSelect"), "Decimal");
    assert_eq!(take(&log), vec!["kind"]);

    editor.type_text(part(&editor, "label", "editorTextfield"), "Age");
    assert_eq!(take(&log), vec!["label"]);
}

#[test]
fn test_range_interactions_publish_once() {
    let mut control = Control::new(ControlKind::InputNumeric, "numeric1");
    control.property_mut(&PropertyId::from("range")).expect("range").value =
        PropertyValue::Range(RangeValue::default());
    let (mut editor, log) = recorded(control);

    editor.type_text(part(&editor, "range", "min"), "0");
    assert_eq!(take(&log), vec!["range"]);

    editor.click(part(&editor, "range", "maxInclusive"));
    assert_eq!(take(&log), vec!["range"]);

    editor.click(part(&editor, "range", "editorEnabled"));
    assert_eq!(take(&log), vec!["range"]);
}

#[test]
fn test_option_list_interactions_publish_once_for_the_list() {
    let (mut editor, log) = recorded(select_control());
    let list = part(&editor, "options", "optionsList");
    let first = editor.document().children(list)[0];
    let fields = editor.document().find_all_by_class(first, "editorTextfield");

    editor.type_text(fields[0], "Apple");
    assert_eq!(take(&log), vec!["options"]);

    editor.type_text(fields[1], "apple");
    assert_eq!(take(&log), vec!["options"]);

    editor.click(part(&editor, "options", "addOption"));
    assert_eq!(take(&log), vec!["options"]);

    let last = *editor.document().children(list).last().expect("row");
    let remove = editor.document().find_by_class(last, "removeOption").expect("remove link");
    editor.click(remove);
    assert_eq!(take(&log), vec!["options"]);
}

#[test]
fn test_dependent_interactions_publish_once() {
    let (mut editor, log) = recorded(select_control());

    editor.click(part(&editor, "other", "editorEnabled"));
    assert_eq!(take(&log), vec!["other"]);

    editor.select(part(&editor, "other", "editorSelect"), "b");
    assert_eq!(take(&log), vec!["other"]);
}

#[test]
fn test_source_change_republishes_dependent_only_when_it_moves() {
    let (mut editor, log) = recorded(select_control());
    editor.click(part(&editor, "other", "editorEnabled"));
    take(&log);

    let list = part(&editor, "options", "optionsList");
    let second = editor.document().children(list)[1];
    let fields = editor.document().find_all_by_class(second, "editorTextfield");
    editor.type_text(fields[0], "Bee");
    assert_eq!(take(&log), vec!["options"]);

    let first = editor.document().children(list)[0];
    let remove = editor.document().find_by_class(first, "removeOption").expect("remove link");
    editor.click(remove);
    let mut published = take(&log);
    published.sort();
    assert_eq!(published, vec!["options", "other"]);
}

#[test]
fn test_handlers_may_publish_while_delivering() {
    let (mut editor, log) = recorded(Control::new(ControlKind::InputText, "text1"));
    editor.subscribe(
        None,
        NotificationKind::ValidationChanged,
        Rc::new(|editor: &mut Editor, id: &PropertyId| {
            editor.publish(Notification::properties_updated(id.clone()));
        }),
    );

    editor
        .set_validations(&PropertyId::from("constraint"), Vec::new())
        .expect("validations");

    assert_eq!(take(&log), vec!["constraint"]);
}

#[test]
fn test_unsubscribed_handler_stops_receiving() {
    let mut editor = Editor::new(Control::new(ControlKind::InputText, "text1"));
    editor.render_panel();
    let log: Log = Rc::default();
    let sink = Rc::clone(&log);
    let subscription = editor.subscribe(
        None,
        NotificationKind::PropertiesUpdated,
        Rc::new(move |_: &mut Editor, id: &PropertyId| sink.borrow_mut().push(id.to_string())),
    );
    let name = part(&editor, "name", "editorTextfield");

    editor.type_text(name, "first");
    assert!(editor.unsubscribe(subscription));
    editor.type_text(name, "second");

    assert_eq!(take(&log), vec!["name"]);
    assert!(!editor.unsubscribe(subscription));
}
