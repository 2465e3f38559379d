//! Option list editor: one row per option, each with a rich text label sub-editor and a raw
//! value field.

use crate::document::NodeId;
use crate::editor::{DomEventKind, Editor};
use crate::error::{EditorError, EditorResult};
use crate::registry::RenderContext;
use crate::target::Target;
use quill_forms::{OptionRow, PropertyId, PropertyType, PropertyValue, RowId};
use std::rc::Rc;
use tracing::warn;

pub fn render(editor: &mut Editor, cx: &RenderContext) -> EditorResult<()> {
    let id = cx.property_id()?.clone();
    let property = editor.require_property_mut(&id)?;
    if property.value.is_unset() {
        property.value = PropertyValue::Options(Vec::new());
    }
    let Some(rows) = property.value.as_options() else {
        return Err(EditorError::UnexpectedValue {
            property: id,
            expected: PropertyType::OptionList,
        });
    };
    let row_ids: Vec<RowId> = rows.iter().map(|r| r.id).collect();
    let name = property.name.clone();

    let heading = cx.part_by_tag(editor, "h4")?;
    let list = cx.part(editor, "optionsList")?;
    let add = cx.part(editor, "addOption")?;
    let link = cx.part(editor, "optionsEditorLink")?;
    editor.document_mut().set_text(heading, name);

    for (index, row) in row_ids.into_iter().enumerate() {
        let item = new_option_row(editor, &id, row, index)?;
        editor.document_mut().append_child(list, item);
    }

    let add_id = id.clone();
    editor.on(add, DomEventKind::Click, move |editor, _| {
        if let Err(err) = append_row(editor, &add_id, list) {
            warn!(property = %add_id, error = %err, "could not add option row");
        }
    });

    let host = cx.host;
    editor.on(link, DomEventKind::Click, move |editor, _| {
        open_overlay(editor, &id, host);
    });
    Ok(())
}

/// Builds the list item for one row. The row's index decides its stripe.
fn new_option_row(editor: &mut Editor, property: &PropertyId, row: RowId, index: usize) -> EditorResult<NodeId> {
    let raw_value = editor
        .require_property(property)?
        .value
        .as_options()
        .and_then(|rows| rows.iter().find(|r| r.id == row))
        .map(|r| r.value.clone())
        .ok_or_else(|| EditorError::MissingRow {
            property: property.clone(),
            row,
        })?;

    let item = editor.document_mut().create("li", "");
    editor.document_mut().toggle_class(item, "even", index % 2 == 0);
    let host = editor.document_mut().append_new(item, "div", "optionRow");
    let bound = editor.bind(
        host,
        Target::RowLabel {
            property: property.clone(),
            row,
        },
        None,
    );
    if let Err(err) = bound {
        editor.remove_node(item);
        return Err(err);
    }

    let remove = editor.document_mut().create("a", "icon removeOption");
    editor.document_mut().set_text(remove, "Remove Option");
    editor.document_mut().prepend_child(host, remove);
    let remove_property = property.clone();
    editor.on(remove, DomEventKind::Click, move |editor, _| {
        remove_row(editor, &remove_property, row, item);
    });

    let value_field = match editor.clone_template("optionsEditorValueField") {
        Ok(node) => node,
        Err(err) => {
            editor.remove_node(item);
            return Err(err);
        }
    };
    let Some(input) = editor.document().find_by_class(value_field, "editorTextfield") else {
        editor.remove_node(value_field);
        editor.remove_node(item);
        return Err(EditorError::MissingTemplatePart {
            template: "optionsEditorValueField".to_string(),
            part: "editorTextfield".to_string(),
        });
    };
    editor.document_mut().set_value(input, raw_value);
    editor.document_mut().append_child(host, value_field);

    let value_property = property.clone();
    editor.on(input, DomEventKind::Input, move |editor, node| {
        let typed = editor.document().value(node);
        let row = editor
            .property_mut(&value_property)
            .and_then(|p| p.value.as_options_mut())
            .and_then(|rows| rows.iter_mut().find(|r| r.id == row));
        if let Some(row) = row {
            row.value = typed;
            editor.notify_updated(&value_property);
        }
    });

    Ok(item)
}

fn append_row(editor: &mut Editor, property: &PropertyId, list: NodeId) -> EditorResult<()> {
    let row = OptionRow::new(editor.config().untitled_option_value.clone());
    let row_id = row.id;
    editor
        .require_property_mut(property)?
        .value
        .as_options_mut()
        .ok_or_else(|| EditorError::UnexpectedValue {
            property: property.clone(),
            expected: PropertyType::OptionList,
        })?
        .push(row);

    let index = editor.document().children(list).len();
    let item = new_option_row(editor, property, row_id, index)?;
    editor.document_mut().append_child(list, item);
    editor.notify_updated(property);
    Ok(())
}

/// Drops the row, then renumbers and re-stripes the rows that remain.
fn remove_row(editor: &mut Editor, property: &PropertyId, row: RowId, item: NodeId) {
    let Some(rows) = editor.property_mut(property).and_then(|p| p.value.as_options_mut()) else {
        return;
    };
    rows.retain(|r| r.id != row);

    let list = editor.document().parent(item);
    editor.remove_node(item);
    if let Some(list) = list {
        let remaining = editor.document().children(list);
        for (index, child) in remaining.into_iter().enumerate() {
            let title = editor.config().option_title(index);
            let heading = editor.document().find_by_tag(child, "h4");
            let doc = editor.document_mut();
            doc.toggle_class(child, "even", index % 2 == 0);
            if let Some(heading) = heading {
                doc.set_text(heading, title);
            }
        }
    }
    editor.notify_updated(property);
}

/// Hands the current rows to the options overlay. Committing replaces the whole list and
/// rebinds this editor.
fn open_overlay(editor: &mut Editor, property: &PropertyId, host: NodeId) {
    let rows = editor
        .property(property)
        .and_then(|p| p.value.as_options())
        .cloned()
        .unwrap_or_default();
    let property = property.clone();
    let overlay = editor.overlay_mut();
    overlay.set_current_selection(rows);
    overlay.set_on_commit(Rc::new(move |editor: &mut Editor, rows: Vec<OptionRow>| {
        let Some(target) = editor.property_mut(&property) else {
            return;
        };
        target.value = PropertyValue::Options(rows);
        editor.notify_updated(&property);
        if let Err(err) = editor.rebind(host) {
            warn!(property = %property, error = %err, "could not rebuild option list editor");
        }
    }));
}
