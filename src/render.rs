//! Rendering layer: presents entities in one locale.
//!
//! A [`LocalizedView`] is taken from the context for each render pass and
//! must not be kept across a locale switch. Every piece of text on a card
//! comes either from the translation table (static labels, category names,
//! month names) or from the entity's `LocalizedText` fields, never both.

use crate::content::{Article, Category, Course, LocalizedText, TeamMember};
use crate::i18n::{Direction, LocaleCode, TranslationTable};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Locale-bound accessors for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct LocalizedView<'t> {
    locale: LocaleCode,
    table: &'t TranslationTable,
}

impl<'t> LocalizedView<'t> {
    pub fn new(locale: LocaleCode, table: &'t TranslationTable) -> Self {
        Self { locale, table }
    }

    pub fn locale(&self) -> LocaleCode {
        self.locale
    }

    pub fn direction(&self) -> Direction {
        self.locale.direction()
    }

    /// Static UI string; the key itself when untranslated.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.translate(key, self.locale)
    }

    /// Entity content in this view's locale.
    pub fn text<'a>(&self, field: &'a LocalizedText) -> &'a str {
        field.get(self.locale)
    }

    /// Display label for a category, via its `category.<value>` key.
    pub fn category_label(&self, category: &Category) -> String {
        let key = category.translation_key();
        self.table.translate(&key, self.locale).to_string()
    }

    /// Render digits (and the decimal point) in the locale's numeral system.
    pub fn localize_digits(&self, text: &str) -> String {
        match self.locale {
            LocaleCode::En => text.to_string(),
            LocaleCode::Ar => text
                .chars()
                .map(|c| match c {
                    '0'..='9' => char::from_u32(0x0660 + (c as u32 - '0' as u32)).unwrap_or(c),
                    '.' => '\u{066B}',
                    other => other,
                })
                .collect(),
        }
    }

    pub fn format_number(&self, value: u32) -> String {
        self.localize_digits(&value.to_string())
    }

    /// Long date: `March 15, 2024` / `١٥ مارس ٢٠٢٤`.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let month_key = format!("month.{}", date.month());
        let month = self.table.translate(&month_key, self.locale);
        let day = self.format_number(date.day());
        let year = self.localize_digits(&date.year().to_string());
        match self.locale {
            LocaleCode::En => format!("{} {}, {}", month, day, year),
            LocaleCode::Ar => format!("{} {} {}", day, month, year),
        }
    }

    /// `7 min read` / `٧ دقيقة قراءة`.
    pub fn read_time_label(&self, minutes: u32) -> String {
        format!("{} {}", self.format_number(minutes), self.t("content.readTime"))
    }

    /// `4.5 (2 ratings)`, or the "no ratings" label.
    pub fn rating_label(&self, article: &Article) -> String {
        let Some(average) = article.average_rating() else {
            return self.t("rating.none").to_string();
        };
        let total = article.total_ratings();
        let noun = if total == 1 { "rating.single" } else { "rating.count" };
        format!(
            "{} ({} {})",
            self.localize_digits(&format!("{:.1}", average)),
            self.localize_digits(&total.to_string()),
            self.t(noun)
        )
    }
}

/// An article as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub id: String,
    pub direction: Direction,
    pub title: String,
    pub summary: String,
    pub author: String,
    pub category: String,
    pub read_time: String,
    pub published: String,
    pub rating: String,
    pub read_more: String,
    pub image: String,
}

impl ArticleCard {
    pub fn render(article: &Article, view: &LocalizedView<'_>) -> Self {
        Self {
            id: article.id.clone(),
            direction: view.direction(),
            title: view.text(&article.title).to_string(),
            summary: view.text(&article.summary).to_string(),
            author: view.text(&article.author).to_string(),
            category: view.category_label(&article.category),
            read_time: view.read_time_label(article.effective_read_time()),
            published: view.format_date(article.publish_date),
            rating: view.rating_label(article),
            read_more: view.t("articles.readMore").to_string(),
            image: article.image.clone(),
        }
    }
}

impl fmt::Display for ArticleCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {} ({})", self.category, self.title, self.direction)?;
        if !self.summary.is_empty() {
            writeln!(f, "  {}", self.summary)?;
        }
        writeln!(f, "  {} | {} | {}", self.author, self.read_time, self.published)?;
        write!(f, "  {} | {} -> /articles/{}", self.rating, self.read_more, self.id)
    }
}

/// A course as shown on the courses page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCard {
    pub id: String,
    pub direction: Direction,
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration: String,
    pub lessons: String,
    /// Link label and URL, when the course has a playlist
    pub watch: Option<(String, String)>,
}

impl CourseCard {
    pub fn render(course: &Course, view: &LocalizedView<'_>) -> Self {
        Self {
            id: course.id.clone(),
            direction: view.direction(),
            title: view.text(&course.title).to_string(),
            description: view.text(&course.description).to_string(),
            category: view.category_label(&course.category),
            duration: format!("{}: {}", view.t("courses.duration"), course.duration),
            lessons: format!(
                "{}: {}",
                view.t("courses.lessons"),
                view.localize_digits(&course.lessons)
            ),
            watch: course
                .youtube_playlist_url
                .as_ref()
                .map(|url| (view.t("courses.watch").to_string(), url.clone())),
        }
    }
}

impl fmt::Display for CourseCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {} ({})", self.category, self.title, self.direction)?;
        writeln!(f, "  {}", self.description)?;
        write!(f, "  {} | {}", self.duration, self.lessons)?;
        if let Some((label, url)) = &self.watch {
            write!(f, " | {}: {}", label, url)?;
        }
        Ok(())
    }
}

/// A team member as shown on the About page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMemberCard {
    pub direction: Direction,
    pub name: String,
    pub position: String,
    pub bio: String,
    pub image: String,
}

impl TeamMemberCard {
    pub fn render(member: &TeamMember, view: &LocalizedView<'_>) -> Self {
        Self {
            direction: view.direction(),
            name: view.text(&member.name).to_string(),
            position: view.text(&member.position).to_string(),
            bio: view.text(&member.bio).to_string(),
            image: member.image.clone(),
        }
    }
}

impl fmt::Display for TeamMemberCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} - {}", self.name, self.position)?;
        write!(f, "  {}", self.bio)
    }
}
