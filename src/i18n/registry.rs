//! Language registry: the languages the dashboard can be shown in.
//!
//! The registry is a process-wide singleton built on first access with
//! `OnceLock` and never modified afterwards.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Short language code used by the shell (e.g., "en", "np")
    pub code: &'static str,

    /// Native name of the language (e.g., "English", "नेपाली")
    pub native_name: &'static str,

    /// Flag shown next to the native name on the language toggle
    pub flag: &'static str,

    /// Whether this is the canonical language the label tables are authored in
    pub is_canonical: bool,

    /// Whether this language can be selected
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Look up a registered language by its code, enabled or not.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in registry order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// The language the label tables are authored in.
    ///
    /// # Panics
    /// Panics unless exactly one registered language is canonical. The
    /// registry is static, so this is a build-time mistake.
    pub fn canonical(&self) -> &LanguageConfig {
        let mut canonical = self.languages.iter().filter(|lang| lang.is_canonical);
        match (canonical.next(), canonical.next()) {
            (Some(lang), None) => lang,
            (None, _) => panic!("registry has no canonical language"),
            (Some(_), Some(_)) => panic!("registry has more than one canonical language"),
        }
    }
}

/// The dashboard ships in exactly two languages: English (canonical) and Nepali.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            native_name: "English",
            flag: "🇬🇧",
            is_canonical: true,
            enabled: true,
        },
        LanguageConfig {
            code: "np",
            native_name: "नेपाली",
            flag: "🇳🇵",
            is_canonical: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_a_singleton() {
        assert!(std::ptr::eq(LanguageRegistry::get(), LanguageRegistry::get()));
    }

    #[test]
    fn test_get_by_code_nepali() {
        let config = LanguageRegistry::get()
            .get_by_code("np")
            .expect("np should be registered");

        assert_eq!(config.native_name, "नेपाली");
        assert_eq!(config.flag, "🇳🇵");
        assert!(!config.is_canonical);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        // "ne" is the ISO code; the dashboard has always used "np"
        assert!(LanguageRegistry::get().get_by_code("ne").is_none());
        assert!(LanguageRegistry::get().get_by_code("es").is_none());
    }

    #[test]
    fn test_exactly_two_enabled_languages() {
        let enabled = LanguageRegistry::get().list_enabled();

        assert_eq!(enabled.len(), 2);
        assert_eq!(enabled[0].code, "en");
        assert_eq!(enabled[1].code, "np");
    }

    #[test]
    fn test_canonical_is_english() {
        let canonical = LanguageRegistry::get().canonical();
        assert_eq!(canonical.code, "en");
    }
}
