//! Desktop shell for the property editor: a control list, the property panel of the selected
//! control and the options dialog.

mod app_state;
mod components;
pub mod error;
pub mod option_lines;

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use quill_editor::{EditorConfig, RendererRegistry};
use quill_forms::{load_form, Form};
use tracing::info;

pub use error::{LaunchError, LaunchResult};

use app_state::AppState;
use components::*;

thread_local! {
    static LAUNCH_FORM: RefCell<Option<(Form, Option<PathBuf>)>> = const { RefCell::new(None) };
    static LAUNCH_CONFIG: RefCell<Option<EditorConfig>> = const { RefCell::new(None) };
}

const STYLE: &str = r#"
.propertyList { list-style: none; margin: 0; padding: 0; }
.propertyList > li { padding: 6px 0; border-bottom: 1px solid #e4e4e4; }
.propertyList > li.error { background: #fdecea; }
.errorList { color: #b3261e; margin: 4px 0 0 16px; padding: 0; }
.optionsList { list-style: none; padding: 0; }
.optionsList > li { padding: 4px; }
.optionsList > li.even { background: #f3f6fa; }
.editorTextfield { width: 100%; box-sizing: border-box; padding: 3px; }
.translations { list-style: none; padding: 0; margin: 0; }
h4 { margin: 0 0 4px 0; font-size: 13px; }
h5 { margin: 2px 0; font-size: 11px; color: #555; }
a { color: #0078d4; cursor: pointer; margin-right: 8px; }
"#;

/// Loads a form and checks that every property type in it has an editor.
pub fn open_form(path: &Path) -> LaunchResult<Form> {
    let form = load_form(path)?;
    RendererRegistry::with_builtins().ensure_covers_form(&form)?;
    Ok(form)
}

/// Opens the editor window on the form at `path`, or on a sample form.
///
/// A form that cannot be loaded or edited is reported before any window opens.
pub fn run(path: Option<&Path>, config: EditorConfig) -> LaunchResult<()> {
    let form = match path {
        Some(path) => open_form(path)?,
        None => Form::sample(),
    };
    let title = format!("Quill - {}", form.title);
    info!(form = %form.name, controls = form.controls.len(), "opening form");

    LAUNCH_FORM.with(|cell| *cell.borrow_mut() = Some((form, path.map(Path::to_path_buf))));
    LAUNCH_CONFIG.with(|cell| *cell.borrow_mut() = Some(config));

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_resizable(true),
    );
    LaunchBuilder::desktop().with_cfg(window).launch(App);
    Ok(())
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let (form, path) = LAUNCH_FORM
            .with(|cell| cell.borrow_mut().take())
            .unwrap_or_else(|| (Form::sample(), None));
        let config = LAUNCH_CONFIG
            .with(|cell| cell.borrow_mut().take())
            .unwrap_or_default();
        AppState::new(form, path, config)
    });

    let state = use_context::<AppState>();
    let overlay_rows = state.overlay_text();

    rsx! {
        style { "{STYLE}" }
        div {
            style: "width: 100vw; height: 100vh; display: flex; flex-direction: column; font-family: 'Segoe UI', Arial, sans-serif; font-size: 13px;",

            Toolbar {}

            div {
                style: "flex: 1; display: flex; overflow: hidden;",
                ControlList {}
                PropertyPanel {}
            }

            if let Some(initial) = overlay_rows {
                OptionsDialog { initial }
            }
        }
    }
}
