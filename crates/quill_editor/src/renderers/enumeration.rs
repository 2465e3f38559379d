use crate::editor::{DomEventKind, Editor};
use crate::error::EditorResult;
use crate::registry::RenderContext;
use quill_forms::PropertyValue;

/// Fixed option set shown as a select.
///
/// A value that is not one of the options is replaced, without notifying, by the select's
/// default selection: the first option.
pub fn render(editor: &mut Editor, cx: &RenderContext) -> EditorResult<()> {
    let id = cx.property_id()?.clone();
    let property = editor.require_property(&id)?;
    let name = property.name.clone();
    let options = property.options.clone();
    let current = property.value.as_string().map(str::to_string);

    let heading = cx.part_by_tag(editor, "h4")?;
    let select = cx.part(editor, "editorSelect")?;
    let doc = editor.document_mut();
    doc.set_text(heading, name);
    for option in &options {
        doc.add_select_option(select, option);
    }
    let matched = current.is_some_and(|value| doc.set_select_value(select, &value));
    if !matched {
        let first = doc.children(select).first().copied();
        doc.set_selected_option(select, first);
    }
    let initial = doc
        .select_value(select)
        .map(PropertyValue::String)
        .unwrap_or(PropertyValue::Unset);
    editor.require_property_mut(&id)?.value = initial;

    editor.on(select, DomEventKind::Change, move |editor, node| {
        let Some(selected) = editor.document().select_value(node) else {
            return;
        };
        if let Some(property) = editor.property_mut(&id) {
            property.value = PropertyValue::String(selected);
            editor.notify_updated(&id);
        }
    });
    Ok(())
}
