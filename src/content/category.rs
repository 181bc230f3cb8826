//! Content categories.
//!
//! Categories are stored values, not localized text. Their display label comes
//! from the translation table under the derived key `category.<value>`. Values
//! outside the named set are kept verbatim in [`Category::Other`], so they
//! still filter, derive their own key and write back unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Veterinary,
    Agriculture,
    Science,
    /// Documents without a category.
    #[default]
    General,
    /// Free-text value from the store, e.g. `"تقنية"`.
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: '{0}'")]
pub struct UnknownCategoryError(pub String);

impl Category {
    /// The named categories.
    pub const ALL: [Category; 4] = [
        Category::Veterinary,
        Category::Agriculture,
        Category::Science,
        Category::General,
    ];

    /// The stored value.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Veterinary => "veterinary",
            Category::Agriculture => "agriculture",
            Category::Science => "science",
            Category::General => "general",
            Category::Other(value) => value,
        }
    }

    /// Translation key for the category's display label.
    pub fn translation_key(&self) -> String {
        format!("category.{}", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: only the named categories.
impl FromStr for Category {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategoryError(s.to_string()))
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(Category::Other(value))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(value) => value,
            named => named.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_key() {
        assert_eq!(Category::Veterinary.translation_key(), "category.veterinary");
        assert_eq!(Category::General.translation_key(), "category.general");
        assert_eq!(
            Category::Other("تقنية".to_string()).translation_key(),
            "category.تقنية"
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("science".parse::<Category>().unwrap(), Category::Science);
        assert!("Science".parse::<Category>().is_err());
        assert!("تقنية".parse::<Category>().is_err());
    }

    #[test]
    fn test_deserialize_known_and_unknown() {
        let known: Category = serde_json::from_str("\"agriculture\"").unwrap();
        assert_eq!(known, Category::Agriculture);

        let unknown: Category = serde_json::from_str("\"تقنية\"").unwrap();
        assert_eq!(unknown, Category::Other("تقنية".to_string()));
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Veterinary).unwrap(),
            "\"veterinary\""
        );
    }

    #[test]
    fn test_unknown_value_written_back_unchanged() {
        let category: Category = serde_json::from_str("\"تقنية\"").unwrap();
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"تقنية\"");
    }
}
