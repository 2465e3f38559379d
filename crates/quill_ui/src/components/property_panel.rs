use dioxus::prelude::*;
use crate::app_state::AppState;
use crate::components::node_view::render_node;

#[component]
pub fn PropertyPanel() -> Element {
    let state = use_context::<AppState>();
    let editor = state.editor.read();

    let Some(editor) = editor.as_ref() else {
        return rsx! {
            div {
                style: "flex: 1; padding: 16px; color: #666;",
                "Select a control to edit its properties."
            }
        };
    };
    let heading = format!("{} ({})", editor.control().name, editor.control().kind.display_name());
    let body = match editor.panel() {
        Some(panel) => render_node(state, editor.document(), panel),
        None => rsx! {},
    };

    rsx! {
        div {
            class: "property-panel",
            style: "flex: 1; padding: 8px 16px; overflow-y: auto;",
            h3 { style: "margin: 0 0 8px 0; font-size: 14px;", "{heading}" }
            {body}
        }
    }
}
