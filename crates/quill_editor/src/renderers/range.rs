//! Numeric range editor. The date range editor reuses this wiring.

use crate::document::NodeId;
use crate::editor::{DomEventKind, Editor};
use crate::error::EditorResult;
use crate::registry::RenderContext;
use quill_forms::{PropertyId, PropertyValue, RangeValue};

#[derive(Debug, Clone, Copy)]
pub(crate) struct RangeFields {
    pub enabled: NodeId,
    pub min: NodeId,
    pub max: NodeId,
    pub min_inclusive: NodeId,
    pub max_inclusive: NodeId,
}

impl RangeFields {
    fn inputs(&self) -> [NodeId; 4] {
        [self.min, self.max, self.min_inclusive, self.max_inclusive]
    }

    /// Composite value from whatever the sub-fields currently show.
    fn read(&self, editor: &Editor) -> RangeValue {
        let doc = editor.document();
        RangeValue {
            min: doc.value(self.min),
            max: doc.value(self.max),
            min_inclusive: doc.is_checked(self.min_inclusive),
            max_inclusive: doc.is_checked(self.max_inclusive),
        }
    }

    fn set_disabled(&self, editor: &mut Editor, disabled: bool) {
        for input in self.inputs() {
            editor.document_mut().set_disabled(input, disabled);
        }
    }
}

pub fn render(editor: &mut Editor, cx: &RenderContext) -> EditorResult<()> {
    render_range(editor, cx).map(|_| ())
}

pub(crate) fn render_range(editor: &mut Editor, cx: &RenderContext) -> EditorResult<RangeFields> {
    let id = cx.property_id()?.clone();
    let property = editor.require_property(&id)?;
    let name = property.name.clone();
    let current = property.value.as_range().cloned();

    let fields = RangeFields {
        enabled: cx.part(editor, "editorEnabled")?,
        min: cx.part(editor, "min")?,
        max: cx.part(editor, "max")?,
        min_inclusive: cx.part(editor, "minInclusive")?,
        max_inclusive: cx.part(editor, "maxInclusive")?,
    };
    let caption = cx.part_by_tag(editor, "span")?;
    editor.document_mut().set_text(caption, name);

    // Unset shows as disabled, like an explicit `false`.
    match &current {
        Some(range) => {
            let doc = editor.document_mut();
            doc.set_value(fields.min, range.min.as_str());
            doc.set_value(fields.max, range.max.as_str());
            doc.set_checked(fields.min_inclusive, range.min_inclusive);
            doc.set_checked(fields.max_inclusive, range.max_inclusive);
            doc.set_checked(fields.enabled, true);
        }
        None => {
            fields.set_disabled(editor, true);
            editor.document_mut().set_checked(fields.enabled, false);
        }
    }

    for text_field in [fields.min, fields.max] {
        let id = id.clone();
        editor.on(text_field, DomEventKind::Input, move |editor, _| store(editor, &id, &fields));
    }
    for checkbox in [fields.min_inclusive, fields.max_inclusive] {
        let id = id.clone();
        editor.on(checkbox, DomEventKind::Change, move |editor, _| store(editor, &id, &fields));
    }

    editor.on(fields.enabled, DomEventKind::Click, move |editor, node| {
        let enabled = editor.document().is_checked(node);
        fields.set_disabled(editor, !enabled);
        let value = if enabled {
            PropertyValue::Range(fields.read(editor))
        } else {
            PropertyValue::Boolean(false)
        };
        if let Some(property) = editor.property_mut(&id) {
            property.value = value;
            editor.notify_updated(&id);
        }
    });

    Ok(fields)
}

fn store(editor: &mut Editor, id: &PropertyId, fields: &RangeFields) {
    let value = PropertyValue::Range(fields.read(editor));
    if let Some(property) = editor.property_mut(id) {
        property.value = value;
        editor.notify_updated(id);
    }
}
