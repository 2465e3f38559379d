use dioxus::prelude::*;
use crate::app_state::AppState;
use quill_forms::ControlKind;

#[component]
pub fn ControlList() -> Element {
    let state = use_context::<AppState>();
    let selected = *state.selected_control.read();
    let language = state.display_language();
    let controls: Vec<_> = state
        .form
        .read()
        .controls
        .iter()
        .map(|c| (c.id, c.display_label(&language), c.kind.display_name().to_string()))
        .collect();

    rsx! {
        div {
            class: "control-list",
            style: "width: 220px; background: #fafafa; border-right: 1px solid #ccc; padding: 8px; display: flex; flex-direction: column; overflow-y: auto;",

            h3 { style: "margin: 0 0 8px 0; font-size: 14px;", "Controls" }

            for (id, label, kind) in controls {
                {
                    let is_selected = selected == Some(id);
                    let bg_color = if is_selected { "#0078d4" } else { "transparent" };
                    let text_color = if is_selected { "white" } else { "black" };

                    rsx! {
                        div {
                            key: "{id}",
                            style: "padding: 6px 8px; cursor: pointer; background: {bg_color}; color: {text_color}; border-radius: 3px; margin-bottom: 2px;",
                            onclick: move |_| state.select_control(id),
                            div { "{label}" }
                            div { style: "font-size: 11px; opacity: 0.7;", "{kind}" }
                        }
                    }
                }
            }

            h3 { style: "margin: 12px 0 8px 0; font-size: 14px; border-top: 1px solid #ccc; padding-top: 8px;", "Add" }

            for kind in ControlKind::all_kinds() {
                {
                    let name = kind.display_name().to_string();
                    rsx! {
                        div {
                            key: "{name}",
                            style: "padding: 4px 8px; cursor: pointer; border-radius: 3px;",
                            onclick: move |_| state.add_control(kind.clone()),
                            "+ {name}"
                        }
                    }
                }
            }

            if selected.is_some() {
                button {
                    style: "margin-top: 12px;",
                    onclick: move |_| state.remove_selected_control(),
                    "Remove Control"
                }
            }
        }
    }
}
