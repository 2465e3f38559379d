// App state management using Dioxus signals
use dioxus::prelude::*;
use quill_editor::{Editor, EditorConfig};
use quill_forms::{save_form, ControlKind, Form};
use rfd::FileDialog;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::option_lines;

#[derive(Clone, Copy)]
pub struct AppState {
    pub form: Signal<Form>,
    pub form_path: Signal<Option<PathBuf>>,
    pub config: Signal<EditorConfig>,
    pub selected_control: Signal<Option<Uuid>>,
    /// Editor session of the selected control. Its control is written back into `form`
    /// after every interaction.
    pub editor: Signal<Option<Editor>>,
    pub status: Signal<String>,
}

impl AppState {
    /// State opened on the first control of `form`.
    pub fn new(form: Form, path: Option<PathBuf>, config: EditorConfig) -> Self {
        let first = form.controls.first().cloned();
        let selected = first.as_ref().map(|c| c.id);
        let editor = first.map(|control| {
            let mut editor = Editor::with_config(control, config.clone());
            editor.render_panel();
            editor
        });
        Self {
            form: Signal::new(form),
            form_path: Signal::new(path),
            config: Signal::new(config),
            selected_control: Signal::new(selected),
            editor: Signal::new(editor),
            status: Signal::new(String::new()),
        }
    }

    /// Code of the first configured language; labels in lists use it.
    pub fn display_language(&self) -> String {
        self.config
            .read()
            .languages
            .first()
            .map(|l| l.code.clone())
            .unwrap_or_default()
    }

    pub fn select_first_control(&self) {
        let first = self.form.read().controls.first().map(|c| c.id);
        match first {
            Some(id) => self.select_control(id),
            None => self.clear_selection(),
        }
    }

    pub fn select_control(&self, id: Uuid) {
        self.commit_editor();
        let Some(control) = self.form.read().get_control(id).cloned() else {
            warn!(%id, "selected control is not in the form");
            return;
        };
        let config = self.config.read().clone();
        let mut editor = Editor::with_config(control, config);
        editor.render_panel();
        debug!(control = %editor.control().name, "opened property editor");

        let mut editor_signal = self.editor;
        let mut selected = self.selected_control;
        editor_signal.set(Some(editor));
        selected.set(Some(id));
    }

    fn clear_selection(&self) {
        let mut editor_signal = self.editor;
        let mut selected = self.selected_control;
        editor_signal.set(None);
        selected.set(None);
    }

    /// Writes the edited control back into the form.
    pub fn commit_editor(&self) {
        let control = self.editor.read().as_ref().map(|e| e.control().clone());
        let Some(mut control) = control else {
            return;
        };
        control.apply_data_name();
        let mut form = self.form;
        form.write().replace_control(control);
    }

    /// Runs a user interaction against the editor and syncs the form when it was handled.
    pub fn interact(&self, action: impl FnOnce(&mut Editor) -> bool) {
        let mut editor = self.editor;
        let handled = editor.write().as_mut().is_some_and(action);
        if handled {
            self.commit_editor();
        }
    }

    /// Rows of the options dialog, if the editor opened it.
    pub fn overlay_text(&self) -> Option<String> {
        let language = self.display_language();
        let editor = self.editor.read();
        let rows = editor.as_ref()?.overlay().current_selection()?;
        Some(option_lines::format_rows(rows, &language))
    }

    pub fn commit_overlay_text(&self, text: &str) {
        let language = self.display_language();
        self.interact(|editor| {
            let previous = editor.overlay().current_selection().unwrap_or_default().to_vec();
            let rows = option_lines::parse_rows(text, &previous, &language);
            match editor.commit_options_overlay(rows) {
                Ok(()) => true,
                Err(err) => {
                    warn!(error = %err, "options dialog commit failed");
                    false
                }
            }
        });
    }

    pub fn cancel_overlay(&self) {
        let mut editor = self.editor;
        if let Some(editor) = editor.write().as_mut() {
            editor.cancel_options_overlay();
        }
    }

    pub fn add_control(&self, kind: ControlKind) {
        self.commit_editor();
        let mut form = self.form;
        let id = form.write().add_new_control(kind);
        self.select_control(id);
    }

    pub fn remove_selected_control(&self) {
        let Some(id) = *self.selected_control.read() else {
            return;
        };
        self.clear_selection();
        let mut form = self.form;
        form.write().remove_control(id);
        self.select_first_control();
    }

    pub fn open_form_dialog(&self) {
        let Some(path) = FileDialog::new()
            .add_filter("Quill Form", &["json"])
            .pick_file()
        else {
            return;
        };
        match crate::open_form(&path) {
            Ok(loaded) => {
                info!(path = %path.display(), controls = loaded.controls.len(), "form loaded");
                self.clear_selection();
                let mut form = self.form;
                let mut form_path = self.form_path;
                form.set(loaded);
                form_path.set(Some(path));
                self.select_first_control();
                self.set_status("Form loaded");
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not load form");
                self.set_status(format!("Could not load form: {}", err));
            }
        }
    }

    pub fn save_form(&self) {
        let path = self.form_path.read().clone();
        match path {
            Some(path) => self.save_to(path),
            None => self.save_form_as_dialog(),
        }
    }

    pub fn save_form_as_dialog(&self) {
        let file_name = format!("{}.json", self.form.read().name);
        if let Some(path) = FileDialog::new()
            .add_filter("Quill Form", &["json"])
            .set_file_name(&file_name)
            .save_file()
        {
            self.save_to(path);
        }
    }

    fn save_to(&self, path: PathBuf) {
        self.commit_editor();
        let result = save_form(&self.form.read(), &path);
        match result {
            Ok(()) => {
                info!(path = %path.display(), "form saved");
                let mut form_path = self.form_path;
                form_path.set(Some(path));
                self.set_status("Form saved");
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not save form");
                self.set_status(format!("Could not save form: {}", err));
            }
        }
    }

    fn set_status(&self, message: impl Into<String>) {
        let mut status = self.status;
        status.set(message.into());
    }
}
