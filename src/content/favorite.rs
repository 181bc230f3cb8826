//! User favorites.
//!
//! A favorite stores a snapshot of the article's text in the locale the user
//! was reading when they added it; later locale switches do not rewrite it.

use crate::content::{Article, Category};
use crate::i18n::LocaleCode;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Favorite document as written to the `favorites` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteSnapshot {
    pub user_id: String,
    pub article_id: String,
    pub title: String,
    pub excerpt: String,
    pub category: Category,
    pub author: String,
    pub published_at: NaiveDate,
    pub image_url: String,
    pub added_at: DateTime<Utc>,
}

impl FavoriteSnapshot {
    /// Capture `article` as seen in `locale`.
    pub fn capture(
        user_id: impl Into<String>,
        article: &Article,
        locale: LocaleCode,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            article_id: article.id.clone(),
            title: article.title.get(locale).to_string(),
            excerpt: article.summary.get(locale).to_string(),
            category: article.category.clone(),
            author: article.author.get(locale).to_string(),
            published_at: article.publish_date,
            image_url: article.image.clone(),
            added_at,
        }
    }
}

/// The article ids one user has marked as favorite, in the order added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the user's stored snapshots.
    pub fn from_snapshots<'a>(snapshots: impl IntoIterator<Item = &'a FavoriteSnapshot>) -> Self {
        let mut favorites = Self::new();
        for snapshot in snapshots {
            if !favorites.contains(&snapshot.article_id) {
                favorites.ids.push(snapshot.article_id.clone());
            }
        }
        favorites
    }

    /// Add or remove `article_id`. Returns `true` if it is a favorite afterwards.
    pub fn toggle(&mut self, article_id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|id| id == article_id) {
            self.ids.remove(pos);
            debug!("Removed favorite {}", article_id);
            false
        } else {
            self.ids.push(article_id.to_string());
            debug!("Added favorite {}", article_id);
            true
        }
    }

    pub fn contains(&self, article_id: &str) -> bool {
        self.ids.iter().any(|id| id == article_id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
