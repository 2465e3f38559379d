use crate::i18n::Language;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid date format '{0}'")]
    InvalidDateFormat(String),

    #[error("at least one language must be configured")]
    NoLanguages,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Active authoring languages, in display order.
    pub languages: Vec<Language>,
    /// chrono format used when a picked date is written into a range field.
    pub date_format: String,
    pub option_title_prefix: String,
    pub untitled_option_value: String,
    pub log_filter: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            languages: vec![Language::new("_", "Default")],
            date_format: "%Y-%m-%d".to_string(),
            option_title_prefix: "Option".to_string(),
            untitled_option_value: "untitled".to_string(),
            log_filter: "quill=info".to_string(),
        }
    }
}

impl EditorConfig {
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: EditorConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.languages.is_empty() {
            return Err(ConfigError::NoLanguages);
        }
        let invalid = self.date_format.is_empty()
            || StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error));
        if invalid {
            return Err(ConfigError::InvalidDateFormat(self.date_format.clone()));
        }
        Ok(())
    }

    pub fn option_title(&self, index: usize) -> String {
        format!("{} {}", self.option_title_prefix, index + 1)
    }
}
