use crate::editor::{DomEventKind, Editor};
use crate::error::EditorResult;
use crate::registry::RenderContext;
use quill_forms::PropertyValue;

/// Single-line string. Every keystroke writes the value and notifies.
pub fn render(editor: &mut Editor, cx: &RenderContext) -> EditorResult<()> {
    let id = cx.property_id()?.clone();
    let property = editor.require_property(&id)?;
    let name = property.name.clone();
    let value = property.value.as_string().unwrap_or_default().to_string();

    let heading = cx.part_by_tag(editor, "h4")?;
    let field = cx.part(editor, "editorTextfield")?;
    let doc = editor.document_mut();
    doc.set_text(heading, name.as_str());
    doc.set_attr(field, "id", format!("property_{}", name));
    doc.set_value(field, value);

    editor.on(field, DomEventKind::Input, move |editor, node| {
        let text = editor.document().value(node);
        if let Some(property) = editor.property_mut(&id) {
            property.value = PropertyValue::String(text);
            editor.notify_updated(&id);
        }
    });
    Ok(())
}
