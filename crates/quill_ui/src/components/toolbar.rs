use dioxus::prelude::*;
use crate::app_state::AppState;

#[component]
pub fn Toolbar() -> Element {
    let state = use_context::<AppState>();
    let title = state.form.read().title.clone();
    let path = state
        .form_path
        .read()
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "unsaved".to_string());
    let status = state.status.read().clone();

    rsx! {
        div {
            class: "toolbar",
            style: "display: flex; align-items: center; gap: 6px; padding: 4px 8px; background: #f0f0f0; border-bottom: 1px solid #ccc;",

            button { onclick: move |_| state.open_form_dialog(), "Open..." }
            button { onclick: move |_| state.save_form(), "Save" }
            button { onclick: move |_| state.save_form_as_dialog(), "Save As..." }

            span { style: "margin-left: 12px; font-weight: bold;", "{title}" }
            span { style: "color: #666;", "({path})" }
            span { style: "margin-left: auto; color: #444;", "{status}" }
        }
    }
}
