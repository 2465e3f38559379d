use dioxus::prelude::*;
use crate::app_state::AppState;

/// Bulk editor for an option list, mounted while the editor's options overlay is open.
#[component]
pub fn OptionsDialog(initial: String) -> Element {
    let state = use_context::<AppState>();
    let mut draft = use_signal(|| initial.clone());

    rsx! {
        div {
            class: "modal-overlay",
            style: "
                position: fixed;
                top: 0;
                left: 0;
                width: 100vw;
                height: 100vh;
                background: rgba(0, 0, 0, 0.5);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 1000;
            ",

            div {
                class: "modal-content",
                style: "background: white; width: 480px; border: 1px solid #999; box-shadow: 0 4px 12px rgba(0,0,0,0.2); display: flex; flex-direction: column;",

                div {
                    style: "background: linear-gradient(to bottom, #0078d4, #005a9e); color: white; padding: 6px 10px; font-weight: bold;",
                    "Edit Options"
                }

                div {
                    style: "padding: 12px;",
                    p { style: "margin: 0 0 8px 0; color: #555;", "One option per line: value | label" }
                    textarea {
                        style: "width: 100%; height: 240px; font-family: monospace; box-sizing: border-box;",
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px; padding: 8px 12px; border-top: 1px solid #ddd;",
                    button { onclick: move |_| state.cancel_overlay(), "Cancel" }
                    button { onclick: move |_| state.commit_overlay_text(&draft.read()), "Apply" }
                }
            }
        }
    }
}
