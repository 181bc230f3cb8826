//! Articles and their reader ratings.

use crate::content::{Category, LocalizedText};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Characters of content per minute of reading.
const CHARS_PER_MINUTE: usize = 200;

/// Read time used when the content is empty.
const DEFAULT_READ_TIME: u32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: LocalizedText,
    #[serde(alias = "excerpt", default)]
    pub summary: LocalizedText,
    #[serde(default)]
    pub content: LocalizedText,
    #[serde(default)]
    pub author: LocalizedText,
    #[serde(default)]
    pub category: Category,
    pub publish_date: NaiveDate,
    #[serde(alias = "imageUrl", default)]
    pub image: String,
    /// Minutes; 0 means "estimate from the content".
    #[serde(default)]
    pub read_time: u32,
    #[serde(default)]
    pub ratings: Vec<Rating>,
}

impl Article {
    /// Stored read time, or an estimate from the longer content version.
    pub fn effective_read_time(&self) -> u32 {
        if self.read_time > 0 {
            return self.read_time;
        }
        let chars = self
            .content
            .en
            .chars()
            .count()
            .max(self.content.ar.chars().count());
        read_time_for(chars)
    }

    /// Mean rating value, `None` when unrated.
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let sum: u32 = self.ratings.iter().map(|r| u32::from(r.value)).sum();
        Some(f64::from(sum) / self.ratings.len() as f64)
    }

    pub fn total_ratings(&self) -> usize {
        self.ratings.len()
    }

    /// The rating left by `user_id`, if any. A user rates an article once.
    pub fn rating_by(&self, user_id: &str) -> Option<&Rating> {
        self.ratings.iter().find(|r| r.user_id == user_id)
    }
}

/// Estimated minutes to read `chars` characters of content.
pub fn read_time_for(chars: usize) -> u32 {
    match chars.div_ceil(CHARS_PER_MINUTE) {
        0 => DEFAULT_READ_TIME,
        minutes => u32::try_from(minutes).unwrap_or(u32::MAX),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    #[error("Rating must be between 1 and 5, got {0}")]
    OutOfRange(u8),
}

/// One reader's star rating of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredRating")]
pub struct Rating {
    pub user_id: String,
    pub article_id: String,
    /// Stars, 1 to 5
    pub value: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(
        user_id: impl Into<String>,
        article_id: impl Into<String>,
        value: u8,
        comment: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, RatingError> {
        if !(1..=5).contains(&value) {
            return Err(RatingError::OutOfRange(value));
        }
        Ok(Self {
            user_id: user_id.into(),
            article_id: article_id.into(),
            value,
            comment: comment.filter(|c| !c.trim().is_empty()),
            created_at,
        })
    }
}

/// Rating document as read from the store, before range checking.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRating {
    user_id: String,
    article_id: String,
    value: u8,
    #[serde(default)]
    comment: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<StoredRating> for Rating {
    type Error = RatingError;

    fn try_from(stored: StoredRating) -> Result<Self, Self::Error> {
        Rating::new(
            stored.user_id,
            stored.article_id,
            stored.value,
            stored.comment,
            stored.created_at,
        )
    }
}
