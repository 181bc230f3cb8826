use crate::content::Category;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Content exported from the document store
    pub content_path: PathBuf,

    // Client preferences (persisted locale)
    pub preferences_path: PathBuf,

    // Locale to switch to on start; unregistered codes fall back to the default
    pub locale: Option<String>,

    // Article listing
    pub category: Option<Category>,
    pub search: Option<String>,
    pub max_articles: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            content_path: std::env::var("ACADEMY_CONTENT_PATH")
                .unwrap_or_else(|_| "content.json".to_string())
                .into(),
            preferences_path: std::env::var("ACADEMY_PREFERENCES_PATH")
                .unwrap_or_else(|_| ".academy/preferences.json".to_string())
                .into(),

            locale: non_empty_var("ACADEMY_LOCALE"),

            category: non_empty_var("ACADEMY_CATEGORY")
                .map(|value| value.parse::<Category>())
                .transpose()
                .context("ACADEMY_CATEGORY must be one of veterinary, agriculture, science, general")?,
            search: non_empty_var("ACADEMY_SEARCH"),
            max_articles: std::env::var("ACADEMY_MAX_ARTICLES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
