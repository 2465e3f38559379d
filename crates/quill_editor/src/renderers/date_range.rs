//! Date range editor: the numeric range wiring plus a date picker on both bounds.

use crate::document::NodeId;
use crate::editor::Editor;
use crate::error::EditorResult;
use crate::registry::RenderContext;
use chrono::NaiveDate;
use std::fmt::Write;
use tracing::warn;

use super::range::render_range;

pub const DATE_PICKER_ATTR: &str = "datepicker";

pub fn render(editor: &mut Editor, cx: &RenderContext) -> EditorResult<()> {
    let fields = render_range(editor, cx)?;
    let format = editor.config().date_format.clone();
    for field in [fields.min, fields.max] {
        editor.document_mut().set_attr(field, DATE_PICKER_ATTR, format.as_str());
    }
    Ok(())
}

impl Editor {
    /// Commits a date chosen in the picker attached to `field`.
    ///
    /// The date is formatted with the field's picker format and goes through the same input
    /// path as typing. Returns false when the field has no picker or does not accept input.
    pub fn pick_date(&mut self, field: NodeId, date: NaiveDate) -> bool {
        let Some(format) = self.document().attr(field, DATE_PICKER_ATTR) else {
            return false;
        };
        let mut text = String::new();
        if write!(text, "{}", date.format(&format)).is_err() {
            warn!(format = %format, "date picker format could not render a date");
            return false;
        }
        self.type_text(field, text)
    }

    /// Date currently shown in a picker field, if it parses with the picker format.
    pub fn picked_date(&self, field: NodeId) -> Option<NaiveDate> {
        let format = self.document().attr(field, DATE_PICKER_ATTR)?;
        NaiveDate::parse_from_str(&self.document().value(field), &format).ok()
    }
}
