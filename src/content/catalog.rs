//! In-memory content catalog and the localized article listing query.

use crate::content::{Article, Category, Course, TeamMember};
use crate::i18n::LocaleCode;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Everything the document store delivered for a session.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
}

/// Article list ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    /// Shortest read first
    ReadTime,
}

/// Filters for the article listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    /// `None` lists every category
    pub category: Option<Category>,
    /// Case-insensitive match against title, summary and author
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl ArticleQuery {
    /// Articles matching the query, with text searched in `locale` only.
    pub fn apply<'a>(&self, articles: &'a [Article], locale: LocaleCode) -> Vec<&'a Article> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut matches: Vec<&Article> = articles
            .iter()
            .filter(|article| self.category.as_ref().map_or(true, |c| &article.category == c))
            .filter(|article| match &needle {
                Some(needle) => [&article.title, &article.summary, &article.author]
                    .iter()
                    .any(|field| field.get(locale).to_lowercase().contains(needle.as_str())),
                None => true,
            })
            .collect();

        match self.sort {
            SortOrder::Newest => matches.sort_by(|a, b| b.publish_date.cmp(&a.publish_date)),
            SortOrder::Oldest => matches.sort_by(|a, b| a.publish_date.cmp(&b.publish_date)),
            SortOrder::ReadTime => matches.sort_by_key(|a| a.effective_read_time()),
        }

        matches
    }
}

impl Catalog {
    /// Parse a catalog exported from the document store.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse content catalog")
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content catalog {}", path.display()))?;
        let catalog = Self::from_json(&json)?;

        info!(
            "Loaded {} articles, {} courses, {} team members from {}",
            catalog.articles.len(),
            catalog.courses.len(),
            catalog.team.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn article(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    pub fn query_articles(&self, query: &ArticleQuery, locale: LocaleCode) -> Vec<&Article> {
        query.apply(&self.articles, locale)
    }

    /// The `count` most recent articles.
    pub fn latest_articles(&self, count: usize) -> Vec<&Article> {
        let mut latest = ArticleQuery::default().apply(&self.articles, LocaleCode::default_code());
        latest.truncate(count);
        latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LocalizedText;
    use chrono::NaiveDate;

    fn article(id: &str, en: &str, ar: &str, category: Category, date: (i32, u32, u32), read: u32) -> Article {
        Article {
            id: id.to_string(),
            title: LocalizedText::new(en, ar),
            summary: LocalizedText::default(),
            content: LocalizedText::default(),
            author: LocalizedText::new("Dr. Ahmed", "د. أحمد"),
            category,
            publish_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            image: String::new(),
            read_time: read,
            ratings: Vec::new(),
        }
    }

    fn articles() -> Vec<Article> {
        vec![
            article("a1", "Cattle Health", "صحة الماشية", Category::Veterinary, (2024, 1, 10), 7),
            article("a2", "Soil Basics", "أساسيات التربة", Category::Agriculture, (2024, 3, 5), 3),
            article("a3", "Cell Biology", "علم الخلية", Category::Science, (2023, 12, 1), 10),
        ]
    }

    fn ids(list: Vec<&Article>) -> Vec<&str> {
        list.into_iter().map(|a| a.id.as_str()).collect()
    }

    // ==================== Sort Tests ====================

    #[test]
    fn test_default_query_sorts_newest_first() {
        let articles = articles();
        let result = ArticleQuery::default().apply(&articles, LocaleCode::En);
        assert_eq!(ids(result), vec!["a2", "a1", "a3"]);
    }

    #[test]
    fn test_sort_oldest() {
        let articles = articles();
        let query = ArticleQuery {
            sort: SortOrder::Oldest,
            ..Default::default()
        };
        assert_eq!(ids(query.apply(&articles, LocaleCode::En)), vec!["a3", "a1", "a2"]);
    }

    #[test]
    fn test_sort_read_time() {
        let articles = articles();
        let query = ArticleQuery {
            sort: SortOrder::ReadTime,
            ..Default::default()
        };
        assert_eq!(ids(query.apply(&articles, LocaleCode::En)), vec!["a2", "a1", "a3"]);
    }

    // ==================== Filter Tests ====================

    #[test]
    fn test_filter_category() {
        let articles = articles();
        let query = ArticleQuery {
            category: Some(Category::Science),
            ..Default::default()
        };
        assert_eq!(ids(query.apply(&articles, LocaleCode::En)), vec!["a3"]);
    }

    #[test]
    fn test_filter_free_text_category() {
        let mut articles = articles();
        let tech = Category::from("تقنية".to_string());
        articles.push(article("a4", "Drones", "الطائرات المسيرة", tech.clone(), (2024, 2, 1), 4));

        let query = ArticleQuery {
            category: Some(tech),
            ..Default::default()
        };
        assert_eq!(ids(query.apply(&articles, LocaleCode::Ar)), vec!["a4"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let articles = articles();
        let query = ArticleQuery {
            search: Some("soil".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(query.apply(&articles, LocaleCode::En)), vec!["a2"]);
    }

    #[test]
    fn test_search_only_matches_active_locale() {
        let articles = articles();
        let query = ArticleQuery {
            search: Some("التربة".to_string()),
            ..Default::default()
        };

        assert_eq!(ids(query.apply(&articles, LocaleCode::Ar)), vec!["a2"]);
        assert!(query.apply(&articles, LocaleCode::En).is_empty());
    }

    #[test]
    fn test_search_matches_author() {
        let articles = articles();
        let query = ArticleQuery {
            search: Some("أحمد".to_string()),
            ..Default::default()
        };
        assert_eq!(query.apply(&articles, LocaleCode::Ar).len(), 3);
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let articles = articles();
        let query = ArticleQuery {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(query.apply(&articles, LocaleCode::En).len(), 3);
    }

    // ==================== Catalog Tests ====================

    #[test]
    fn test_catalog_from_json() {
        let catalog = Catalog::from_json(
            r#"{
                "articles": [{
                    "id": "a1",
                    "title": {"ar": "مقدمة", "en": "Intro"},
                    "publishDate": "2024-03-15"
                }],
                "courses": [{"id": "c1", "title": {"ar": "دورة", "en": "Course"}}]
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.articles.len(), 1);
        assert_eq!(catalog.courses.len(), 1);
        assert!(catalog.team.is_empty());
        assert!(catalog.article("a1").is_some());
        assert!(catalog.course("c1").is_some());
        assert!(catalog.article("missing").is_none());
    }

    #[test]
    fn test_catalog_from_invalid_json() {
        let err = Catalog::from_json("[]").unwrap_err();
        assert!(err.to_string().contains("content catalog"));
    }

    #[test]
    fn test_latest_articles() {
        let catalog = Catalog {
            articles: articles(),
            ..Default::default()
        };
        assert_eq!(ids(catalog.latest_articles(2)), vec!["a2", "a1"]);
    }
}
