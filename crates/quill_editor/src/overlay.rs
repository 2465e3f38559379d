use crate::editor::Editor;
use crate::error::{EditorError, EditorResult};
use quill_forms::OptionRow;
use std::rc::Rc;

pub type CommitHandler = Rc<dyn Fn(&mut Editor, Vec<OptionRow>)>;

/// Full-screen option list editor. The option-list renderer opens it by setting the rows
/// to edit and a commit callback; the shell commits or cancels.
#[derive(Default)]
pub struct OptionsOverlay {
    current_selection: Option<Vec<OptionRow>>,
    on_commit: Option<CommitHandler>,
}

impl OptionsOverlay {
    pub fn is_open(&self) -> bool {
        self.current_selection.is_some()
    }

    pub fn current_selection(&self) -> Option<&[OptionRow]> {
        self.current_selection.as_deref()
    }

    pub fn set_current_selection(&mut self, rows: Vec<OptionRow>) {
        self.current_selection = Some(rows);
    }

    pub fn set_on_commit(&mut self, handler: CommitHandler) {
        self.on_commit = Some(handler);
    }

    fn close(&mut self) -> Option<CommitHandler> {
        self.current_selection = None;
        self.on_commit.take()
    }
}

impl Editor {
    /// Closes the overlay and hands `rows` to the commit callback.
    pub fn commit_options_overlay(&mut self, rows: Vec<OptionRow>) -> EditorResult<()> {
        if !self.overlay().is_open() {
            return Err(EditorError::OverlayClosed);
        }
        let handler = self.overlay_mut().close().ok_or(EditorError::OverlayClosed)?;
        handler(self, rows);
        Ok(())
    }

    pub fn cancel_options_overlay(&mut self) {
        self.overlay_mut().close();
    }
}
