//! Locale registry: Single source of truth for all supported locales.
//!
//! The registry holds the closed set of locales the platform renders in,
//! together with their intrinsic properties (names and writing direction).
//! It uses a singleton pattern with `OnceLock` and is immutable after the
//! first access.

use crate::i18n::LocaleCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Writing direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right (English).
    Ltr,
    /// Right-to-left (Arabic).
    Rtl,
}

impl Direction {
    /// Value of the `dir` presentation attribute (`"ltr"` or `"rtl"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a locale code is looked up that is not registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown locale code: '{code}'")]
pub struct UnknownLocaleError {
    /// The code that was requested.
    pub code: String,
}

/// A supported locale.
///
/// Defined once at process start; exactly two instances exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Registered code (`en` or `ar`)
    pub code: LocaleCode,

    /// Name shown in the language switcher, in the locale's own script
    pub display_name: &'static str,

    /// English name of the locale
    pub english_name: &'static str,

    /// Writing direction used to mirror the layout
    pub direction: Direction,

    /// Whether this is the default locale (only one should be true)
    pub is_default: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    /// Ordered primary first, then secondary.
    locales: [Locale; 2],
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// All registered locales, primary first.
    pub fn list_locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Look up a locale by its string code.
    ///
    /// # Errors
    /// Returns `UnknownLocaleError` if `code` is not one of the registered codes.
    /// Matching is exact: `"AR"` or `" ar"` are not registered codes.
    pub fn get_locale(&self, code: &str) -> Result<&Locale, UnknownLocaleError> {
        self.locales
            .iter()
            .find(|locale| locale.code.code() == code)
            .ok_or_else(|| UnknownLocaleError {
                code: code.to_string(),
            })
    }

    /// Look up a locale by its typed code. Infallible: every `LocaleCode` is registered.
    pub fn locale(&self, code: LocaleCode) -> &Locale {
        match code {
            LocaleCode::En => &self.locales[0],
            LocaleCode::Ar => &self.locales[1],
        }
    }

    /// The locale used when no valid preference exists.
    pub fn default_locale(&self) -> &Locale {
        &self.locales[0]
    }

    /// Check if a string code is registered.
    pub fn is_registered(&self, code: &str) -> bool {
        self.get_locale(code).is_ok()
    }
}

fn default_locales() -> [Locale; 2] {
    [
        Locale {
            code: LocaleCode::En,
            display_name: "English",
            english_name: "English",
            direction: Direction::Ltr,
            is_default: true,
        },
        Locale {
            code: LocaleCode::Ar,
            display_name: "العربية",
            english_name: "Arabic",
            direction: Direction::Rtl,
            is_default: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_list_locales_is_ordered_primary_first() {
        let locales = LocaleRegistry::get().list_locales();

        assert_eq!(locales.len(), 2);
        assert_eq!(locales[0].code, LocaleCode::En);
        assert_eq!(locales[1].code, LocaleCode::Ar);
    }

    #[test]
    fn test_get_locale_english() {
        let locale = LocaleRegistry::get().get_locale("en").unwrap();

        assert_eq!(locale.code, LocaleCode::En);
        assert_eq!(locale.display_name, "English");
        assert_eq!(locale.direction, Direction::Ltr);
        assert!(locale.is_default);
    }

    #[test]
    fn test_get_locale_arabic() {
        let locale = LocaleRegistry::get().get_locale("ar").unwrap();

        assert_eq!(locale.code, LocaleCode::Ar);
        assert_eq!(locale.display_name, "العربية");
        assert_eq!(locale.english_name, "Arabic");
        assert_eq!(locale.direction, Direction::Rtl);
        assert!(!locale.is_default);
    }

    #[test]
    fn test_get_locale_returns_matching_code_for_every_registered_locale() {
        let registry = LocaleRegistry::get();
        for locale in registry.list_locales() {
            let found = registry.get_locale(locale.code.code()).unwrap();
            assert_eq!(found.code, locale.code);
        }
    }

    #[test]
    fn test_get_locale_unknown() {
        let err = LocaleRegistry::get().get_locale("fr").unwrap_err();
        assert_eq!(err.code, "fr");
        assert!(err.to_string().contains("Unknown locale code"));
    }

    #[test]
    fn test_get_locale_is_case_sensitive() {
        assert!(LocaleRegistry::get().get_locale("AR").is_err());
        assert!(LocaleRegistry::get().get_locale("").is_err());
    }

    #[test]
    fn test_exactly_one_default_locale() {
        let defaults = LocaleRegistry::get()
            .list_locales()
            .iter()
            .filter(|locale| locale.is_default)
            .count();
        assert_eq!(defaults, 1);
        assert_eq!(LocaleRegistry::get().default_locale().code, LocaleCode::En);
    }

    #[test]
    fn test_locale_by_typed_code() {
        let registry = LocaleRegistry::get();
        assert_eq!(registry.locale(LocaleCode::Ar).direction, Direction::Rtl);
        assert_eq!(registry.locale(LocaleCode::En).direction, Direction::Ltr);
    }

    #[test]
    fn test_is_registered() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_registered("en"));
        assert!(registry.is_registered("ar"));
        assert!(!registry.is_registered("es"));
    }

    #[test]
    fn test_direction_attribute_values() {
        assert_eq!(Direction::Ltr.as_str(), "ltr");
        assert_eq!(Direction::Rtl.to_string(), "rtl");
        assert!(Direction::Rtl.is_rtl());
        assert!(!Direction::Ltr.is_rtl());
    }
}
