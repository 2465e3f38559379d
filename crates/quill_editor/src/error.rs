use crate::document::NodeId;
use quill_forms::{PropertyId, PropertyType, RowId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditorError {
    #[error("no renderer registered for property type '{0}'")]
    UnknownPropertyType(PropertyType),

    #[error("no template named '{0}'")]
    MissingTemplate(String),

    #[error("template '{template}' has no '{part}' element")]
    MissingTemplatePart { template: String, part: String },

    #[error("property '{0}' does not exist")]
    MissingProperty(PropertyId),

    #[error("property '{property}' references missing sibling '{sibling}'")]
    MissingSibling {
        property: PropertyId,
        sibling: PropertyId,
    },

    #[error("property '{0}' has no bindTo target")]
    MissingBinding(PropertyId),

    #[error("option row {row} does not exist in property '{property}'")]
    MissingRow { property: PropertyId, row: RowId },

    #[error("property '{property}' holds a value the '{expected}' editor cannot edit")]
    UnexpectedValue {
        property: PropertyId,
        expected: PropertyType,
    },

    #[error("the '{0}' editor only edits top-level properties")]
    UnsupportedTarget(PropertyType),

    #[error("node {0:?} is not a bound editor host")]
    NotBound(NodeId),

    #[error("the options overlay is not open")]
    OverlayClosed,
}

pub type EditorResult<T> = Result<T, EditorError>;
