//! Label table validation.
//!
//! The label tables are static, so every problem they can have is known at
//! startup. The server refuses to start on an invalid table rather than
//! rendering a page with a hole in it.

use crate::i18n::{Language, LanguageRegistry, LanguageStrings};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, warn};

/// Validation report containing errors and warnings about one label table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the table unusable
    pub errors: Vec<String>,

    /// Suspicious but renderable entries (e.g., a label left untranslated)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Empty report: no errors, no warnings.
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// True when at least one check failed.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True when a label looks untranslated.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Neither errors nor warnings.
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("no label table bundled for language '{0}'")]
    MissingTable(&'static str),

    #[error("label table for '{language}' is invalid: {}", .problems.join("; "))]
    Invalid {
        language: &'static str,
        problems: Vec<String>,
    },
}

/// Keys whose value is intentionally the same in every language.
const SHARED_KEYS: &[&str] = &["brand"];

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Validator for label tables.
pub struct LabelValidator;

impl LabelValidator {
    /// Compare a candidate table against the reference (canonical) table.
    ///
    /// Errors:
    /// - a key present in one table but not the other
    /// - an empty label
    /// - a label whose `{placeholder}` set differs from the reference
    ///
    /// Warnings:
    /// - a label identical to the reference in a different table
    pub fn validate(reference: &LanguageStrings, candidate: &LanguageStrings) -> ValidationReport {
        let mut report = ValidationReport::new();
        let same_table = std::ptr::eq(reference, candidate);

        let reference_entries = reference.entries();
        let candidate_entries = candidate.entries();

        let reference_keys: BTreeSet<_> = reference_entries.iter().map(|(key, _)| *key).collect();
        let candidate_keys: BTreeSet<_> = candidate_entries.iter().map(|(key, _)| *key).collect();

        for missing in reference_keys.difference(&candidate_keys) {
            report.errors.push(format!("Missing key: {}", missing));
        }
        for extra in candidate_keys.difference(&reference_keys) {
            report.errors.push(format!("Unexpected key: {}", extra));
        }

        for (key, value) in &candidate_entries {
            if value.trim().is_empty() {
                report.errors.push(format!("Empty label: {}", key));
                continue;
            }

            let Some((_, reference_value)) = reference_entries.iter().find(|(k, _)| k == key)
            else {
                continue;
            };

            let expected = Self::extract_placeholders(reference_value);
            let found = Self::extract_placeholders(value);
            if expected != found {
                report.errors.push(format!(
                    "Placeholder mismatch in {}: expected {:?}, found {:?}",
                    key, expected, found
                ));
            }

            if !same_table && value == reference_value && !SHARED_KEYS.contains(key) {
                report
                    .warnings
                    .push(format!("Label {} is identical to the canonical text", key));
            }
        }

        report
    }

    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

/// Validate every enabled language's table against the canonical one.
///
/// Warnings are logged; any error aborts with [`LabelError`].
pub fn validate_label_tables() -> Result<(), LabelError> {
    let canonical = Language::canonical();
    let reference =
        LanguageStrings::for_language(canonical).ok_or(LabelError::MissingTable(canonical.code()))?;

    for config in LanguageRegistry::get().list_enabled() {
        let language = Language::from_code(config.code)
            .map_err(|_| LabelError::MissingTable(config.code))?;
        let strings =
            LanguageStrings::for_language(language).ok_or(LabelError::MissingTable(config.code))?;

        let report = LabelValidator::validate(reference, strings);
        for warning in &report.warnings {
            warn!(language = config.code, "{}", warning);
        }
        if report.has_errors() {
            return Err(LabelError::Invalid {
                language: config.code,
                problems: report.errors,
            });
        }
        debug!(language = config.code, "Label table validated");
    }

    Ok(())
}
