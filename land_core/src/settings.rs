//! # User Settings
//!
//! Preferences persisted between runs in `settings.json`. Only the display
//! language is stored today; unknown fields are ignored and missing fields
//! take their defaults, so older and newer files both load.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Persisted user preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preferred display language
    pub language: Language,
}

impl Settings {
    /// Switch to the other language and return the new one.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggle();
        self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Settings::default().language, Language::English);
    }

    #[test]
    fn test_toggle_language() {
        let mut settings = Settings::default();
        assert_eq!(settings.toggle_language(), Language::Nepali);
        assert_eq!(settings.toggle_language(), Language::English);
    }

    #[test]
    fn test_missing_fields_default() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());

        let settings: Settings = serde_json::from_str(r#"{"language":"np","theme":"dark"}"#).unwrap();
        assert_eq!(settings.language, Language::Nepali);
    }
}
