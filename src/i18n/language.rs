//! Locale code: Type-safe identifier for a registered locale.
//!
//! Everything that is indexed by locale (translation entries, localized entity
//! fields, the persisted preference) uses `LocaleCode` rather than raw strings,
//! so an unregistered code can only enter the system through `from_code`.

use crate::i18n::{Direction, Locale, LocaleRegistry, UnknownLocaleError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A registered locale code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// English, the primary locale.
    En,
    /// Arabic, the secondary locale.
    Ar,
}

impl LocaleCode {
    /// Every registered code, primary first.
    pub const ALL: [LocaleCode; 2] = [LocaleCode::En, LocaleCode::Ar];

    /// Create a `LocaleCode` from a code string.
    ///
    /// # Errors
    /// Returns `UnknownLocaleError` if the code is not registered.
    pub fn from_code(code: &str) -> Result<LocaleCode, UnknownLocaleError> {
        LocaleRegistry::get()
            .get_locale(code)
            .map(|locale| locale.code)
    }

    /// The default (primary) locale code.
    pub fn default_code() -> LocaleCode {
        LocaleRegistry::get().default_locale().code
    }

    /// The code as written to storage and to the `lang` attribute.
    pub fn code(&self) -> &'static str {
        match self {
            LocaleCode::En => "en",
            LocaleCode::Ar => "ar",
        }
    }

    /// Full registry entry for this code.
    pub fn locale(&self) -> &'static Locale {
        LocaleRegistry::get().locale(*self)
    }

    pub fn direction(&self) -> Direction {
        self.locale().direction
    }

    pub fn is_default(&self) -> bool {
        self.locale().is_default
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        LocaleCode::default_code()
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LocaleCode {
    type Err = UnknownLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocaleCode::from_code(s)
    }
}
