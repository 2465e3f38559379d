use crate::editor::Editor;
use crate::error::{EditorError, EditorResult};
use quill_forms::{LocalizedText, PropertyId, PropertyType, PropertyValue, RowId};

/// What a binding edits: a property of the control, or the label of one option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Property(PropertyId),
    RowLabel { property: PropertyId, row: RowId },
}

impl Target {
    pub fn property(id: impl Into<PropertyId>) -> Self {
        Target::Property(id.into())
    }

    /// Property whose id is published when this target changes.
    pub fn owner(&self) -> &PropertyId {
        match self {
            Target::Property(id) => id,
            Target::RowLabel { property, .. } => property,
        }
    }
}

impl Editor {
    pub fn target_type(&self, target: &Target) -> EditorResult<PropertyType> {
        match target {
            Target::Property(id) => Ok(self.require_property(id)?.property_type.clone()),
            Target::RowLabel { property, row } => {
                self.row_position(property, *row)?;
                Ok(PropertyType::RichText)
            }
        }
    }

    /// Heading shown by the target's editor.
    pub fn target_title(&self, target: &Target) -> EditorResult<String> {
        match target {
            Target::Property(id) => Ok(self.require_property(id)?.name.clone()),
            Target::RowLabel { property, row } => {
                let index = self.row_position(property, *row)?;
                Ok(self.config().option_title(index))
            }
        }
    }

    pub fn row_position(&self, property: &PropertyId, row: RowId) -> EditorResult<usize> {
        self.require_property(property)?
            .value
            .as_options()
            .and_then(|rows| rows.iter().position(|r| r.id == row))
            .ok_or_else(|| EditorError::MissingRow {
                property: property.clone(),
                row,
            })
    }

    pub fn localized_text(&self, target: &Target) -> Option<LocalizedText> {
        match target {
            Target::Property(id) => self.property(id)?.value.as_localized().cloned(),
            Target::RowLabel { property, row } => self
                .property(property)?
                .value
                .as_options()?
                .iter()
                .find(|r| r.id == *row)
                .map(|r| r.label.clone()),
        }
    }

    /// Mutable text of the target. An unset property becomes empty localized text; any other
    /// non-localized value is left alone.
    pub fn localized_text_mut(&mut self, target: &Target) -> Option<&mut LocalizedText> {
        match target {
            Target::Property(id) => {
                let property = self.property_mut(id)?;
                if property.value.is_unset() {
                    property.value = PropertyValue::Localized(LocalizedText::new());
                }
                match &mut property.value {
                    PropertyValue::Localized(text) => Some(text),
                    _ => None,
                }
            }
            Target::RowLabel { property, row } => self
                .property_mut(property)?
                .value
                .as_options_mut()?
                .iter_mut()
                .find(|r| r.id == *row)
                .map(|r| &mut r.label),
        }
    }
}
