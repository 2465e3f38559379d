use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Identifier of a property, unique within its owning control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PropertyId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PropertyId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Stable identifier of an option row, assigned when the row is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(Uuid);

impl RowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for RowId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(RowId)
    }
}

/// Text keyed by language code.
pub type LocalizedText = BTreeMap<String, String>;

/// Tag selecting the renderer for a property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    Text,
    RichText,
    Boolean,
    NumericRange,
    Enumeration,
    DateRange,
    OptionList,
    DependentOption,
    /// Type added through the renderer registry.
    Custom(String),
}

impl PropertyType {
    pub fn from_name(name: &str) -> PropertyType {
        match name {
            "text" => PropertyType::Text,
            "uiText" => PropertyType::RichText,
            "bool" => PropertyType::Boolean,
            "numericRange" => PropertyType::NumericRange,
            "enum" => PropertyType::Enumeration,
            "dateRange" => PropertyType::DateRange,
            "optionsEditor" => PropertyType::OptionList,
            "otherEditor" => PropertyType::DependentOption,
            _ => PropertyType::Custom(name.to_string()),
        }
    }

    /// The type tag, which doubles as the template name.
    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::Text => "text",
            PropertyType::RichText => "uiText",
            PropertyType::Boolean => "bool",
            PropertyType::NumericRange => "numericRange",
            PropertyType::Enumeration => "enum",
            PropertyType::DateRange => "dateRange",
            PropertyType::OptionList => "optionsEditor",
            PropertyType::DependentOption => "otherEditor",
            PropertyType::Custom(name) => name,
        }
    }

    pub fn builtins() -> Vec<PropertyType> {
        vec![
            PropertyType::Text,
            PropertyType::RichText,
            PropertyType::Boolean,
            PropertyType::NumericRange,
            PropertyType::Enumeration,
            PropertyType::DateRange,
            PropertyType::OptionList,
            PropertyType::DependentOption,
        ]
    }
}

impl From<String> for PropertyType {
    fn from(s: String) -> Self {
        PropertyType::from_name(&s)
    }
}

impl From<PropertyType> for String {
    fn from(t: PropertyType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enabled state of a numeric or date range. Bounds are kept as typed text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeValue {
    pub min: String,
    pub max: String,
    pub min_inclusive: bool,
    pub max_inclusive: bool,
}

/// One row of an option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionRow {
    #[serde(default)]
    pub id: RowId,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub label: LocalizedText,
}

impl OptionRow {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: RowId::new(),
            value: value.into(),
            label: LocalizedText::new(),
        }
    }

    pub fn with_label(mut self, code: impl Into<String>, text: impl Into<String>) -> Self {
        self.label.insert(code.into(), text.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    #[default]
    Unset,
    String(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    Localized(LocalizedText),
    Range(RangeValue),
    Options(Vec<OptionRow>),
    /// Dependent selection: one option value, or empty while unresolved.
    Selection(Vec<String>),
}

impl PropertyValue {
    pub fn is_unset(&self) -> bool {
        matches!(self, PropertyValue::Unset)
    }

    /// True only for `Boolean(false)`. Zero, empty strings and `Unset` are not false.
    pub fn is_strictly_false(&self) -> bool {
        matches!(self, PropertyValue::Boolean(false))
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_localized(&self) -> Option<&LocalizedText> {
        match self {
            PropertyValue::Localized(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<&RangeValue> {
        match self {
            PropertyValue::Range(range) => Some(range),
            _ => None,
        }
    }

    pub fn as_options(&self) -> Option<&Vec<OptionRow>> {
        match self {
            PropertyValue::Options(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn as_options_mut(&mut self) -> Option<&mut Vec<OptionRow>> {
        match self {
            PropertyValue::Options(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn as_selection(&self) -> Option<&Vec<String>> {
        match self {
            PropertyValue::Selection(values) => Some(values),
            _ => None,
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<f64> for PropertyValue {
    fn from(d: f64) -> Self {
        PropertyValue::Double(d)
    }
}

impl From<RangeValue> for PropertyValue {
    fn from(range: RangeValue) -> Self {
        PropertyValue::Range(range)
    }
}

impl From<Vec<OptionRow>> for PropertyValue {
    fn from(rows: Vec<OptionRow>) -> Self {
        PropertyValue::Options(rows)
    }
}

/// Result computed by an external validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub has_error: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn passed(message: impl Into<String>) -> Self {
        Self {
            has_error: false,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            has_error: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default)]
    pub value: PropertyValue,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind_display_if: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind_to: Option<PropertyId>,
    #[serde(default, skip_serializing)]
    pub validations: Vec<ValidationResult>,
}

impl Property {
    pub fn new(id: impl Into<PropertyId>, name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            property_type,
            value: PropertyValue::Unset,
            options: Vec::new(),
            bind_display_if: None,
            bind_to: None,
            validations: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<PropertyValue>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn display_if(mut self, sibling: impl Into<PropertyId>) -> Self {
        self.bind_display_if = Some(sibling.into());
        self
    }

    pub fn bound_to(mut self, sibling: impl Into<PropertyId>) -> Self {
        self.bind_to = Some(sibling.into());
        self
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationResult> {
        self.validations.iter().filter(|v| v.has_error)
    }
}

/// Ordered map of properties owned by one control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap {
    properties: Vec<Property>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    /// Inserts or replaces by id. Replacement keeps the original position.
    pub fn insert(&mut self, property: Property) {
        match self.properties.iter_mut().find(|p| p.id == property.id) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
    }

    pub fn get(&self, id: &PropertyId) -> Option<&Property> {
        self.properties.iter().find(|p| &p.id == id)
    }

    pub fn get_mut(&mut self, id: &PropertyId) -> Option<&mut Property> {
        self.properties.iter_mut().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &PropertyId) -> bool {
        self.get(id).is_some()
    }

    pub fn remove(&mut self, id: &PropertyId) -> Option<Property> {
        let pos = self.properties.iter().position(|p| &p.id == id)?;
        Some(self.properties.remove(pos))
    }

    pub fn ids(&self) -> Vec<PropertyId> {
        self.properties.iter().map(|p| p.id.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl FromIterator<Property> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = Property>>(iter: T) -> Self {
        let mut map = PropertyMap::new();
        for property in iter {
            map.insert(property);
        }
        map
    }
}
