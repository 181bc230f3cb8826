//! Video courses.

use crate::content::{Category, LocalizedText};
use serde::{Deserialize, Serialize};

/// A video course hosted as a YouTube playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub image: String,
    /// Free-form, e.g. "6 hours"
    #[serde(default)]
    pub duration: String,
    /// Free-form, e.g. "12"
    #[serde(default)]
    pub lessons: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_playlist_url: Option<String>,
}
