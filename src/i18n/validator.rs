//! Translation table completeness validation.
//!
//! Checks that every key the rendering layer uses exists in the table, that
//! keys follow the dotted naming convention, and flags entries that look
//! untranslated (empty sub-entries, Arabic entries without Arabic script).

use crate::i18n::{LocaleCode, TranslationTable};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that will show raw keys to users
    pub errors: Vec<String>,

    /// Entries that are present but probably need attention
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation tables.
pub struct TranslationValidator;

static KEY_REGEX: OnceLock<Regex> = OnceLock::new();
static ARABIC_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate `table` against the keys the caller renders with.
    ///
    /// Errors:
    /// - a used key is missing from the table
    /// - a table key does not follow the dotted naming convention
    ///
    /// Warnings:
    /// - an entry has an empty sub-entry
    /// - an Arabic entry contains no Arabic script
    pub fn validate<'k, I>(table: &TranslationTable, used_keys: I) -> ValidationReport
    where
        I: IntoIterator<Item = &'k str>,
    {
        let mut report = ValidationReport::new();

        for key in used_keys {
            if !table.contains_key(key) {
                report.errors.push(format!("Missing key: '{}'", key));
            }
        }

        let mut entries: Vec<_> = table.entries().collect();
        entries.sort_by_key(|(key, _)| *key);

        for (key, entry) in entries {
            if !Self::is_well_formed_key(key) {
                report.errors.push(format!("Malformed key: '{}'", key));
            }

            for locale in LocaleCode::ALL {
                if entry.get(locale).is_empty() {
                    report
                        .warnings
                        .push(format!("Empty {} entry for '{}'", locale, key));
                }
            }

            if !entry.ar.is_empty() && !Self::contains_arabic(&entry.ar) {
                report.warnings.push(format!(
                    "Arabic entry for '{}' contains no Arabic script: {:?}",
                    key, entry.ar
                ));
            }
        }

        report
    }

    /// Dotted lowercase-first segments, e.g. `nav.comingSoon` or `month.12`.
    fn is_well_formed_key(key: &str) -> bool {
        let regex = KEY_REGEX
            .get_or_init(|| Regex::new(r"^[a-z][A-Za-z0-9]*(\.[A-Za-z0-9]+)*$").unwrap());
        regex.is_match(key)
    }

    fn contains_arabic(text: &str) -> bool {
        let regex = ARABIC_REGEX.get_or_init(|| Regex::new(r"\p{Arabic}").unwrap());
        regex.is_match(text)
    }
}
