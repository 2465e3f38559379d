//! Renders the editor's view tree as Dioxus elements and forwards user events back to it.

use chrono::NaiveDate;
use dioxus::prelude::*;
use quill_editor::{Document, NodeId, DATE_PICKER_ATTR};

use crate::app_state::AppState;

/// Value format of `<input type="date">`, independent of the picker's display format.
const HTML_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn render_node(state: AppState, doc: &Document, id: NodeId) -> Element {
    let Some(node) = doc.node(id) else {
        return rsx! {};
    };
    let key = id.to_string();
    let class = node.classes.join(" ");
    let style = if node.hidden { "display: none;" } else { "" };
    let text = node.text.clone();
    let disabled = node.disabled;
    let children = doc.children(id);

    match node.tag.as_str() {
        "input" if node.is_checkbox() => {
            let checked = node.checked;
            rsx! {
                input {
                    key: "{key}",
                    r#type: "checkbox",
                    class: "{class}",
                    checked,
                    disabled,
                    onclick: move |_| state.interact(|editor| editor.click(id)),
                }
            }
        }
        "input" => {
            let value = node.value.clone();
            let placeholder = node.attr("placeholder").unwrap_or_default().to_string();
            let picker = node.attr(DATE_PICKER_ATTR).is_some();
            let picked = NaiveDate::parse_from_str(&value, node.attr(DATE_PICKER_ATTR).unwrap_or(HTML_DATE_FORMAT))
                .map(|d| d.format(HTML_DATE_FORMAT).to_string())
                .unwrap_or_default();
            rsx! {
                span {
                    key: "{key}",
                    input {
                        class: "{class}",
                        value: "{value}",
                        placeholder: "{placeholder}",
                        disabled,
                        oninput: move |evt| state.interact(|editor| editor.type_text(id, evt.value())),
                    }
                    if picker {
                        input {
                            r#type: "date",
                            value: "{picked}",
                            disabled,
                            onchange: move |evt| {
                                if let Ok(date) = NaiveDate::parse_from_str(&evt.value(), HTML_DATE_FORMAT) {
                                    state.interact(|editor| editor.pick_date(id, date));
                                }
                            },
                        }
                    }
                }
            }
        }
        "select" => {
            let options: Vec<(usize, String, bool)> = children
                .iter()
                .enumerate()
                .filter_map(|(position, option)| {
                    doc.node(*option).map(|o| (position, o.text.clone(), o.selected))
                })
                .collect();
            let nothing_selected = !options.iter().any(|(_, _, selected)| *selected);
            rsx! {
                select {
                    key: "{key}",
                    class: "{class}",
                    disabled,
                    onchange: move |evt| {
                        let Ok(position) = evt.value().parse::<usize>() else {
                            return;
                        };
                        if let Some(option) = children.get(position).copied() {
                            state.interact(|editor| editor.select_option(id, option));
                        }
                    },
                    if nothing_selected {
                        option { value: "", selected: true, disabled: true, "" }
                    }
                    for (position, label, selected) in options {
                        option { key: "{position}", value: "{position}", selected, "{label}" }
                    }
                }
            }
        }
        "a" => rsx! {
            a {
                key: "{key}",
                class: "{class}",
                style: "{style}",
                onclick: move |_| state.interact(|editor| editor.click(id)),
                "{text}"
            }
        },
        "h4" => rsx! { h4 { key: "{key}", class: "{class}", style: "{style}", "{text}" } },
        "h5" => rsx! { h5 { key: "{key}", class: "{class}", style: "{style}", "{text}" } },
        "span" => rsx! { span { key: "{key}", class: "{class}", style: "{style}", "{text}" } },
        "ul" => rsx! {
            ul {
                key: "{key}",
                class: "{class}",
                style: "{style}",
                {children.iter().map(|child| render_node(state, doc, *child))}
            }
        },
        "li" => rsx! {
            li {
                key: "{key}",
                class: "{class}",
                style: "{style}",
                "{text}"
                {children.iter().map(|child| render_node(state, doc, *child))}
            }
        },
        "label" => rsx! {
            label {
                key: "{key}",
                class: "{class}",
                style: "{style}",
                {children.iter().map(|child| render_node(state, doc, *child))}
            }
        },
        _ => rsx! {
            div {
                key: "{key}",
                class: "{class}",
                style: "{style}",
                "{text}"
                {children.iter().map(|child| render_node(state, doc, *child))}
            }
        },
    }
}
