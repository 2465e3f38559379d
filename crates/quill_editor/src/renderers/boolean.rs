use crate::editor::{DomEventKind, Editor};
use crate::error::EditorResult;
use crate::registry::RenderContext;
use quill_forms::PropertyValue;

pub fn render(editor: &mut Editor, cx: &RenderContext) -> EditorResult<()> {
    let id = cx.property_id()?.clone();
    let property = editor.require_property(&id)?;
    let name = property.name.clone();
    let checked = property.value.as_bool() == Some(true);

    let checkbox = cx.part(editor, "editorCheckbox")?;
    let caption = cx.part_by_tag(editor, "span")?;
    let doc = editor.document_mut();
    doc.set_checked(checkbox, checked);
    doc.set_text(caption, name);

    editor.on(checkbox, DomEventKind::Click, move |editor, node| {
        let checked = editor.document().is_checked(node);
        if let Some(property) = editor.property_mut(&id) {
            property.value = PropertyValue::Boolean(checked);
            editor.notify_updated(&id);
        }
    });
    Ok(())
}
