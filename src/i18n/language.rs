//! Language type: a language code validated against the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings};
use anyhow::{bail, Result};
use serde::Serialize;

/// A validated language.
///
/// Only codes found (and enabled) in the [`LanguageRegistry`] can be turned
/// into a `Language`, so lookups keyed by it never miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Language {
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const NEPALI: Language = Language { code: "np" };

    /// Create a Language from a language code string.
    ///
    /// # Example
    /// ```ignore
    /// let nepali = Language::from_code("np")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The language the label tables are authored in (English).
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Short code as registered, e.g. "np".
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a `Language` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Name of the language written in itself, shown on the toggle.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Flag emoji shown next to the native name.
    pub fn flag(&self) -> &'static str {
        self.config().flag
    }

    /// The other enabled language. The toggle only ever flips between two.
    pub fn toggled(&self) -> Language {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .find(|config| config.code != self.code)
            .map(|config| Language { code: config.code })
            .unwrap_or(*self)
    }

    /// Label table for this language.
    ///
    /// # Panics
    /// Panics if no table is bundled for the language. Startup validation
    /// (`i18n::validate_label_tables`) rejects that configuration first.
    pub fn strings(&self) -> &'static LanguageStrings {
        LanguageStrings::for_language(*self).expect("Every enabled language has a label table")
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Language::ENGLISH.code(), "en");
        assert_eq!(Language::NEPALI.code(), "np");
        assert!(Language::ENGLISH.config().is_canonical);
        assert!(!Language::NEPALI.config().is_canonical);
    }

    #[test]
    fn test_from_code_nepali() {
        let language = Language::from_code("np").expect("Should succeed");
        assert_eq!(language, Language::NEPALI);
        assert_eq!(language.native_name(), "नेपाली");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_canonical_and_default_are_english() {
        assert_eq!(Language::canonical(), Language::ENGLISH);
        assert_eq!(Language::default(), Language::ENGLISH);
    }

    #[test]
    fn test_toggled_flips_between_two_languages() {
        assert_eq!(Language::ENGLISH.toggled(), Language::NEPALI);
        assert_eq!(Language::NEPALI.toggled(), Language::ENGLISH);
        assert_eq!(Language::ENGLISH.toggled().toggled(), Language::ENGLISH);
    }

    #[test]
    fn test_strings_follow_language() {
        assert_eq!(Language::ENGLISH.strings().nav.inventory, "Inventory");
        assert_eq!(Language::NEPALI.strings().nav.inventory, "सामान");
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Language::NEPALI).unwrap();
        assert_eq!(json, "\"np\"");
    }
}
