//! Bilingual text fields carried by domain entities.

use crate::i18n::LocaleCode;
use serde::{Deserialize, Serialize};

/// The same user-facing content in every registered locale.
///
/// Both fields always exist; a missing field in a stored document
/// deserializes as the empty string. Older documents that stored a plain
/// string are read as that string in both locales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredText")]
pub struct LocalizedText {
    pub ar: String,
    pub en: String,
}

impl LocalizedText {
    /// English first, then Arabic.
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    /// The same text in both locales.
    pub fn uniform(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            ar: text.clone(),
            en: text,
        }
    }

    /// Project into `locale`. Returns the stored value verbatim, empty included.
    pub fn get(&self, locale: LocaleCode) -> &str {
        match locale {
            LocaleCode::En => &self.en,
            LocaleCode::Ar => &self.ar,
        }
    }
}

/// Project a localized field into `locale`.
pub fn resolve(field: &LocalizedText, locale: LocaleCode) -> &str {
    field.get(locale)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredText {
    Pair {
        #[serde(default)]
        ar: String,
        #[serde(default)]
        en: String,
    },
    Plain(String),
}

impl From<StoredText> for LocalizedText {
    fn from(stored: StoredText) -> Self {
        match stored {
            StoredText::Pair { ar, en } => LocalizedText { ar, en },
            StoredText::Plain(text) => LocalizedText::uniform(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_selects_matching_field() {
        let title = LocalizedText::new("Intro", "مقدمة");

        assert_eq!(resolve(&title, LocaleCode::En), "Intro");
        assert_eq!(resolve(&title, LocaleCode::Ar), "مقدمة");
    }

    #[test]
    fn test_resolve_empty_does_not_fall_back() {
        let title = LocalizedText::new("Intro", "");
        assert_eq!(resolve(&title, LocaleCode::Ar), "");
    }

    #[test]
    fn test_deserialize_pair() {
        let text: LocalizedText =
            serde_json::from_str(r#"{"ar": "الزراعة", "en": "Agriculture"}"#).unwrap();
        assert_eq!(text, LocalizedText::new("Agriculture", "الزراعة"));
    }

    #[test]
    fn test_deserialize_missing_field_is_empty() {
        let text: LocalizedText = serde_json::from_str(r#"{"en": "Only English"}"#).unwrap();
        assert_eq!(text.ar, "");
        assert_eq!(text.en, "Only English");
    }

    #[test]
    fn test_deserialize_plain_string() {
        let text: LocalizedText = serde_json::from_str(r#""د. محمد""#).unwrap();
        assert_eq!(text.get(LocaleCode::Ar), "د. محمد");
        assert_eq!(text.get(LocaleCode::En), "د. محمد");
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(LocalizedText::new("Home", "الرئيسية")).unwrap();
        assert_eq!(json, serde_json::json!({"ar": "الرئيسية", "en": "Home"}));
    }
}
