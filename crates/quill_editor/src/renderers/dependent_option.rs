//! Dependent option editor: picks one row of the option list named by `bindTo`.
//!
//! The selection is tracked by row id, so renaming a row's raw value keeps it selected and
//! removing it falls back to another row. The stored value is `false` while disabled and a
//! one-element selection otherwise; an empty selection means no row could be resolved.

use crate::bus::NotificationKind;
use crate::document::NodeId;
use crate::editor::{DomEventKind, Editor};
use crate::error::{EditorError, EditorResult};
use crate::registry::RenderContext;
use quill_forms::{OptionRow, PropertyId, PropertyValue, RowId};
use std::cell::Cell;
use std::rc::Rc;
use std::str::FromStr;

pub const ROW_ATTR: &str = "data-row";

struct DependentState {
    property: PropertyId,
    source: PropertyId,
    enable: NodeId,
    select: NodeId,
    remembered: Cell<Option<RowId>>,
}

pub fn render(editor: &mut Editor, cx: &RenderContext) -> EditorResult<()> {
    let id = cx.property_id()?.clone();
    let property = editor.require_property(&id)?;
    let name = property.name.clone();
    let source = property
        .bind_to
        .clone()
        .ok_or_else(|| EditorError::MissingBinding(id.clone()))?;

    let caption = cx.part_by_tag(editor, "span")?;
    let enable = cx.part(editor, "editorEnabled")?;
    let select = cx.part(editor, "editorSelect")?;
    editor.document_mut().set_text(caption, name);

    let state = Rc::new(DependentState {
        property: id.clone(),
        source: source.clone(),
        enable,
        select,
        remembered: Cell::new(None),
    });

    let watching = Rc::clone(&state);
    editor.subscribe(
        Some(cx.fragment),
        NotificationKind::PropertiesUpdated,
        Rc::new(move |editor: &mut Editor, changed: &PropertyId| {
            if *changed == watching.source {
                watching.refresh_options(editor, true);
            }
        }),
    );

    let picking = Rc::clone(&state);
    editor.on(select, DomEventKind::Change, move |editor, node| {
        picking.pick(editor, node);
    });

    let toggling = Rc::clone(&state);
    editor.on(enable, DomEventKind::Change, move |editor, node| {
        let value = if editor.document().is_checked(node) {
            PropertyValue::Selection(Vec::new())
        } else {
            PropertyValue::Boolean(false)
        };
        let Some(property) = editor.property_mut(&toggling.property) else {
            return;
        };
        property.value = value;
        toggling.update(editor);
        editor.notify_updated(&toggling.property);
    });

    let before = current_value(editor, &state.property);
    state.update(editor);
    if current_value(editor, &state.property) != before {
        editor.notify_updated(&state.property);
    }
    Ok(())
}

fn current_value(editor: &Editor, id: &PropertyId) -> PropertyValue {
    editor
        .property(id)
        .map(|p| p.value.clone())
        .unwrap_or_default()
}

impl DependentState {
    fn is_enabled(&self, editor: &Editor) -> bool {
        editor
            .property(&self.property)
            .is_some_and(|p| matches!(p.value, PropertyValue::Selection(_)))
    }

    fn source_rows(&self, editor: &Editor) -> Vec<OptionRow> {
        editor
            .property(&self.source)
            .and_then(|p| p.value.as_options())
            .cloned()
            .unwrap_or_default()
    }

    /// Syncs the toggle and the select with the stored value, without publishing.
    fn update(&self, editor: &mut Editor) {
        let enabled = self.is_enabled(editor);
        let doc = editor.document_mut();
        doc.set_checked(self.enable, enabled);
        doc.set_disabled(self.select, !enabled);
        self.refresh_options(editor, false);
    }

    /// Syncs the choices with the source list, reusing each row's option, and resolves the
    /// selected row.
    fn refresh_options(&self, editor: &mut Editor, publish: bool) {
        let rows = self.source_rows(editor);
        let mut existing = editor.document().children(self.select);
        let mut nodes = Vec::with_capacity(rows.len());
        for row in &rows {
            let key = row.id.to_string();
            let reused = existing
                .iter()
                .position(|option| editor.document().attr(*option, ROW_ATTR).as_deref() == Some(key.as_str()))
                .map(|position| existing.remove(position));
            let doc = editor.document_mut();
            let option = match reused {
                Some(option) => {
                    doc.set_value(option, row.value.as_str());
                    doc.set_text(option, row.value.as_str());
                    doc.append_child(self.select, option);
                    option
                }
                None => {
                    let option = doc.add_select_option(self.select, &row.value);
                    doc.set_attr(option, ROW_ATTR, key);
                    option
                }
            };
            nodes.push(option);
        }
        for stale in existing {
            editor.remove_node(stale);
        }

        if !self.is_enabled(editor) {
            editor.document_mut().set_selected_option(self.select, None);
            return;
        }

        let stored = editor
            .property(&self.property)
            .and_then(|p| p.value.as_selection())
            .and_then(|values| values.first().cloned());
        let position = self
            .remembered
            .get()
            .and_then(|remembered| rows.iter().position(|r| r.id == remembered))
            .or_else(|| {
                stored
                    .as_deref()
                    .and_then(|raw| rows.iter().position(|r| r.value == raw))
            })
            .or(if rows.is_empty() { None } else { Some(0) });

        let value = match position {
            Some(index) => {
                self.remembered.set(Some(rows[index].id));
                editor
                    .document_mut()
                    .set_selected_option(self.select, Some(nodes[index]));
                PropertyValue::Selection(vec![rows[index].value.clone()])
            }
            None => {
                self.remembered.set(None);
                editor.document_mut().set_selected_option(self.select, None);
                PropertyValue::Selection(Vec::new())
            }
        };

        let Some(property) = editor.property_mut(&self.property) else {
            return;
        };
        if property.value == value {
            return;
        }
        property.value = value;
        if publish {
            editor.notify_updated(&self.property);
        }
    }

    fn pick(&self, editor: &mut Editor, select: NodeId) {
        let Some(option) = editor.document().selected_option(select) else {
            return;
        };
        let Some(row) = editor
            .document()
            .attr(option, ROW_ATTR)
            .and_then(|raw| RowId::from_str(&raw).ok())
        else {
            return;
        };
        let Some(value) = self
            .source_rows(editor)
            .into_iter()
            .find(|r| r.id == row)
            .map(|r| r.value)
        else {
            return;
        };
        self.remembered.set(Some(row));
        if let Some(property) = editor.property_mut(&self.property) {
            property.value = PropertyValue::Selection(vec![value]);
            editor.notify_updated(&self.property);
        }
    }
}
