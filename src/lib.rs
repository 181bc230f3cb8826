//! Bilingual (Arabic/English) content core for the Isav Academy platform.
//!
//! - `i18n`: locales, UI string table and the session's active locale
//! - `content`: articles, courses, team members, ratings and favorites
//! - `render`: presents entities in the active locale
//! - `config`: environment configuration for the binary

pub mod config;
pub mod content;
pub mod i18n;
pub mod render;
