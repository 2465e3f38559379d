use crate::properties::{
    LocalizedText, OptionRow, Property, PropertyId, PropertyMap, PropertyType, PropertyValue,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ControlKind {
    InputText,
    InputNumeric,
    InputDate,
    InputSelectOne,
    InputSelectMany,
    InputMedia,
    Group,
    Metadata,
    Custom(String),
}

impl ControlKind {
    pub fn from_name(name: &str) -> ControlKind {
        match name {
            "inputText" => ControlKind::InputText,
            "inputNumeric" => ControlKind::InputNumeric,
            "inputDate" => ControlKind::InputDate,
            "inputSelectOne" => ControlKind::InputSelectOne,
            "inputSelectMany" => ControlKind::InputSelectMany,
            "inputMedia" => ControlKind::InputMedia,
            "group" => ControlKind::Group,
            "metadata" => ControlKind::Metadata,
            _ => ControlKind::Custom(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ControlKind::InputText => "inputText",
            ControlKind::InputNumeric => "inputNumeric",
            ControlKind::InputDate => "inputDate",
            ControlKind::InputSelectOne => "inputSelectOne",
            ControlKind::InputSelectMany => "inputSelectMany",
            ControlKind::InputMedia => "inputMedia",
            ControlKind::Group => "group",
            ControlKind::Metadata => "metadata",
            ControlKind::Custom(name) => name,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            ControlKind::InputText => "Text",
            ControlKind::InputNumeric => "Numeric",
            ControlKind::InputDate => "Date",
            ControlKind::InputSelectOne => "Choose One",
            ControlKind::InputSelectMany => "Select Multiple",
            ControlKind::InputMedia => "Media",
            ControlKind::Group => "Group",
            ControlKind::Metadata => "Metadata",
            ControlKind::Custom(name) => name,
        }
    }

    pub fn default_name_prefix(&self) -> &str {
        match self {
            ControlKind::InputText => "text",
            ControlKind::InputNumeric => "numeric",
            ControlKind::InputDate => "date",
            ControlKind::InputSelectOne => "select_one",
            ControlKind::InputSelectMany => "select_many",
            ControlKind::InputMedia => "media",
            ControlKind::Group => "group",
            ControlKind::Metadata => "metadata",
            ControlKind::Custom(_) => "control",
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, ControlKind::InputSelectOne | ControlKind::InputSelectMany)
    }

    pub fn all_kinds() -> Vec<ControlKind> {
        vec![
            ControlKind::InputText,
            ControlKind::InputNumeric,
            ControlKind::InputDate,
            ControlKind::InputSelectOne,
            ControlKind::InputSelectMany,
            ControlKind::InputMedia,
            ControlKind::Group,
            ControlKind::Metadata,
        ]
    }
}

impl From<String> for ControlKind {
    fn from(s: String) -> Self {
        ControlKind::from_name(&s)
    }
}

impl From<ControlKind> for String {
    fn from(k: ControlKind) -> Self {
        k.as_str().to_string()
    }
}

/// A form element under design; the container that owns a set of properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub id: Uuid,
    pub name: String,
    pub kind: ControlKind,
    pub properties: PropertyMap,
}

impl Control {
    pub fn new(kind: ControlKind, name: impl Into<String>) -> Self {
        let name = name.into();
        let mut properties = PropertyMap::new();

        properties.insert(Property::new("name", "Data Name", PropertyType::Text).with_value(name.as_str()));
        properties.insert(
            Property::new("label", "Label", PropertyType::RichText).with_value(PropertyValue::Localized(LocalizedText::new())),
        );
        properties.insert(
            Property::new("hint", "Hint", PropertyType::RichText).with_value(PropertyValue::Localized(LocalizedText::new())),
        );

        if !matches!(kind, ControlKind::Group | ControlKind::Metadata) {
            properties.insert(Property::new("required", "Required", PropertyType::Boolean).with_value(false));
            properties.insert(Property::new("readOnly", "Read Only", PropertyType::Boolean).with_value(false));
        }

        match kind {
            ControlKind::InputText => {
                properties.insert(Property::new("length", "Length", PropertyType::NumericRange).with_value(false));
            }
            ControlKind::InputNumeric => {
                properties.insert(Property::new("range", "Range", PropertyType::NumericRange).with_value(false));
                properties.insert(
                    Property::new("invalidText", "Invalid Text", PropertyType::RichText)
                        .with_value(PropertyValue::Localized(LocalizedText::new()))
                        .display_if("range"),
                );
                properties.insert(
                    Property::new("kind", "Kind", PropertyType::Enumeration)
                        .with_options(["Integer", "Decimal"]),
                );
            }
            ControlKind::InputDate => {
                properties.insert(Property::new("range", "Range", PropertyType::DateRange).with_value(false));
                properties.insert(
                    Property::new("invalidText", "Invalid Text", PropertyType::RichText)
                        .with_value(PropertyValue::Localized(LocalizedText::new()))
                        .display_if("range"),
                );
                properties.insert(
                    Property::new("kind", "Kind", PropertyType::Enumeration)
                        .with_options(["Full Date", "Year and Month", "Year", "Full Date and Time"]),
                );
            }
            ControlKind::InputSelectOne | ControlKind::InputSelectMany => {
                properties.insert(
                    Property::new("options", "Options", PropertyType::OptionList)
                        .with_value(vec![OptionRow::new("untitled")]),
                );
                properties.insert(
                    Property::new("appearance", "Style", PropertyType::Enumeration)
                        .with_options(["Default", "Minimal", "Table", "Quick"]),
                );
                properties.insert(
                    Property::new("other", "Other Option", PropertyType::DependentOption)
                        .with_value(false)
                        .bound_to("options"),
                );
            }
            ControlKind::InputMedia => {
                properties.insert(
                    Property::new("kind", "Kind", PropertyType::Enumeration)
                        .with_options(["Image", "Audio", "Video"]),
                );
            }
            ControlKind::Group => {
                properties.insert(Property::new("fieldList", "Field List", PropertyType::Boolean).with_value(false));
            }
            ControlKind::Metadata => {
                properties.insert(
                    Property::new("kind", "Kind", PropertyType::Enumeration)
                        .with_options(["Device Id", "Start Time", "End Time", "Today"]),
                );
            }
            ControlKind::Custom(_) => {}
        }

        if !matches!(kind, ControlKind::Group | ControlKind::Metadata) {
            properties.insert(Property::new("constraint", "Constraint", PropertyType::Text).with_value(""));
            properties.insert(
                Property::new("constraintMessage", "Constraint Message", PropertyType::RichText)
                    .with_value(PropertyValue::Localized(LocalizedText::new())),
            );
        }

        Self {
            id: Uuid::new_v4(),
            name,
            kind,
            properties,
        }
    }

    pub fn property(&self, id: &PropertyId) -> Option<&Property> {
        self.properties.get(id)
    }

    pub fn property_mut(&mut self, id: &PropertyId) -> Option<&mut Property> {
        self.properties.get_mut(id)
    }

    /// Copies a non-empty `name` property into the control name. Returns true if it changed.
    pub fn apply_data_name(&mut self) -> bool {
        let Some(name) = self
            .properties
            .get(&PropertyId::from("name"))
            .and_then(|p| p.value.as_string())
            .filter(|n| !n.is_empty() && *n != self.name)
            .map(str::to_string)
        else {
            return false;
        };
        self.name = name;
        true
    }

    /// Label in the given language, falling back to the control name.
    pub fn display_label(&self, language: &str) -> String {
        self.properties
            .get(&PropertyId::from("label"))
            .and_then(|p| p.value.as_localized())
            .and_then(|text| text.get(language))
            .filter(|s| !s.is_empty())
            .cloned()
            .unwrap_or_else(|| self.name.clone())
    }
}
