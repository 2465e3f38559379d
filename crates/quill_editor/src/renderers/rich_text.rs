use crate::editor::{DomEventKind, Editor};
use crate::error::{EditorError, EditorResult};
use crate::registry::RenderContext;
use crate::target::Target;
use quill_forms::{PropertyType, PropertyValue};

/// One row per active language; each row writes its own language key on every keystroke.
///
/// Also edits option row labels, in which case the owning option list is notified.
pub fn render(editor: &mut Editor, cx: &RenderContext) -> EditorResult<()> {
    if let Target::Property(id) = &cx.target {
        let value = &editor.require_property(id)?.value;
        if !matches!(value, PropertyValue::Unset | PropertyValue::Localized(_)) {
            return Err(EditorError::UnexpectedValue {
                property: id.clone(),
                expected: PropertyType::RichText,
            });
        }
    }
    let title = editor.target_title(&cx.target)?;
    let text = editor.localized_text(&cx.target).unwrap_or_default();

    let heading = cx.part_by_tag(editor, "h4")?;
    let translations = cx.part(editor, "translations")?;
    editor.document_mut().set_text(heading, title);

    let languages = editor.languages().active_languages();
    for language in languages {
        let row = editor.clone_template("uiText-translation")?;
        let parts = {
            let doc = editor.document();
            (doc.find_by_tag(row, "h5"), doc.find_by_class(row, "editorTextfield"))
        };
        let (Some(caption), Some(field)) = parts else {
            editor.remove_node(row);
            return Err(EditorError::MissingTemplatePart {
                template: "uiText-translation".to_string(),
                part: "editorTextfield".to_string(),
            });
        };
        let doc = editor.document_mut();
        doc.set_text(caption, language.name.as_str());
        doc.set_attr(field, "lang", language.code.as_str());
        doc.set_value(field, text.get(&language.code).cloned().unwrap_or_default());
        doc.append_child(translations, row);

        let target = cx.target.clone();
        let code = language.code.clone();
        editor.on(field, DomEventKind::Input, move |editor, node| {
            let typed = editor.document().value(node);
            if let Some(text) = editor.localized_text_mut(&target) {
                text.insert(code.clone(), typed);
                editor.notify_updated(target.owner());
            }
        });
    }
    Ok(())
}
