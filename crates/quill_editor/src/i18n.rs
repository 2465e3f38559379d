use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Source of the languages the form is currently authored in.
pub trait LanguageService {
    /// Active languages in display order.
    fn active_languages(&self) -> Vec<Language>;
}

/// Fixed language list, usually taken from [`crate::EditorConfig`].
#[derive(Debug, Clone, Default)]
pub struct StaticLanguages {
    languages: Vec<Language>,
}

impl StaticLanguages {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }
}

impl LanguageService for StaticLanguages {
    fn active_languages(&self) -> Vec<Language> {
        self.languages.clone()
    }
}
