use crate::document::{Document, NodeId};

/// Produces fresh editor skeletons. Every call returns a new, detached subtree.
pub trait TemplateProvider {
    fn clone_template(&self, doc: &mut Document, name: &str) -> Option<NodeId>;
}

/// Skeletons for the built-in property types and the option row helpers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    fn range(doc: &mut Document, class: &str) -> NodeId {
        let root = doc.create("div", &format!("editor {}", class));
        let label = doc.append_new(root, "label", "");
        let enabled = doc.create_checkbox("editorEnabled");
        doc.append_child(label, enabled);
        doc.append_new(label, "span", "");

        let min = doc.append_new(root, "input", "editorTextfield min");
        doc.set_attr(min, "placeholder", "minimum");
        let min_inclusive = doc.create_checkbox("inclusive minInclusive");
        doc.append_child(root, min_inclusive);

        let max = doc.append_new(root, "input", "editorTextfield max");
        doc.set_attr(max, "placeholder", "maximum");
        let max_inclusive = doc.create_checkbox("inclusive maxInclusive");
        doc.append_child(root, max_inclusive);
        root
    }
}

impl TemplateProvider for BuiltinTemplates {
    fn clone_template(&self, doc: &mut Document, name: &str) -> Option<NodeId> {
        let root = match name {
            "text" => {
                let root = doc.create("div", "editor text");
                doc.append_new(root, "h4", "");
                doc.append_new(root, "input", "editorTextfield");
                root
            }
            "uiText" => {
                let root = doc.create("div", "editor uiText");
                doc.append_new(root, "h4", "");
                doc.append_new(root, "ul", "translations");
                root
            }
            "uiText-translation" => {
                let root = doc.create("li", "uiText-translation");
                doc.append_new(root, "h5", "");
                doc.append_new(root, "input", "editorTextfield");
                root
            }
            "bool" => {
                let root = doc.create("div", "editor bool");
                let label = doc.append_new(root, "label", "");
                let checkbox = doc.create_checkbox("editorCheckbox");
                doc.append_child(label, checkbox);
                doc.append_new(label, "span", "");
                root
            }
            "numericRange" => Self::range(doc, "numericRange"),
            "dateRange" => Self::range(doc, "dateRange"),
            "enum" => {
                let root = doc.create("div", "editor enum");
                doc.append_new(root, "h4", "");
                doc.append_new(root, "select", "editorSelect");
                root
            }
            "optionsEditor" => {
                let root = doc.create("div", "editor optionsEditor");
                doc.append_new(root, "h4", "");
                doc.append_new(root, "ul", "optionsList");
                let add = doc.append_new(root, "a", "addOption");
                doc.set_text(add, "Add Option");
                let link = doc.append_new(root, "a", "optionsEditorLink");
                doc.set_text(link, "Edit Options");
                root
            }
            "optionsEditorValueField" => {
                let root = doc.create("div", "optionsEditorValueField");
                let title = doc.append_new(root, "h5", "");
                doc.set_text(title, "Underlying Value");
                doc.append_new(root, "input", "editorTextfield");
                root
            }
            "otherEditor" => {
                let root = doc.create("div", "editor otherEditor");
                let label = doc.append_new(root, "label", "");
                let enable = doc.create_checkbox("editorEnabled");
                doc.append_child(label, enable);
                doc.append_new(label, "span", "");
                doc.append_new(root, "select", "editorSelect");
                root
            }
            _ => return None,
        };
        Some(root)
    }
}
