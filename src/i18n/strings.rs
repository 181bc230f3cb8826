//! Translation table: static UI strings keyed by opaque dotted identifiers.
//!
//! Lookups never fail. A key that is not in the table resolves to the key
//! itself so that missing translations stay visible during development. A key
//! that is present resolves to exactly what is stored for the locale, even
//! when that is the empty string.

use crate::i18n::{LocaleCode, MetricsReport, TranslationMetrics};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

/// One translated UI string in every registered locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranslationEntry {
    pub en: String,
    pub ar: String,
}

impl TranslationEntry {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// The stored string for `locale`, verbatim.
    pub fn get(&self, locale: LocaleCode) -> &str {
        match locale {
            LocaleCode::En => &self.en,
            LocaleCode::Ar => &self.ar,
        }
    }
}

/// Immutable key → entry mapping with lookup metrics.
#[derive(Debug)]
pub struct TranslationTable {
    entries: HashMap<String, TranslationEntry>,
    metrics: TranslationMetrics,
}

/// Shared built-in table (initialized lazily)
static BUILTIN: OnceLock<TranslationTable> = OnceLock::new();

impl TranslationTable {
    /// The platform's built-in table.
    pub fn builtin() -> &'static TranslationTable {
        BUILTIN.get_or_init(|| {
            TranslationTable::from_entries(BUILTIN_TRANSLATIONS.iter().map(|(key, en, ar)| {
                (key.to_string(), TranslationEntry::new(*en, *ar))
            }))
        })
    }

    /// Build a table from `(key, entry)` pairs. Later duplicates replace earlier ones.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, TranslationEntry)>,
    {
        Self {
            entries: entries.into_iter().collect(),
            metrics: TranslationMetrics::new(),
        }
    }

    /// Build a table from a JSON object of the form
    /// `{"nav.home": {"en": "Home", "ar": "الرئيسية"}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: HashMap<String, TranslationEntry> =
            serde_json::from_str(json).context("Failed to parse translation table JSON")?;
        Ok(Self::from_entries(entries))
    }

    /// Resolve `key` for `locale`, falling back to the key itself when absent.
    pub fn translate<'a>(&'a self, key: &'a str, locale: LocaleCode) -> &'a str {
        match self.entries.get(key) {
            Some(entry) => {
                self.metrics.record_hit();
                entry.get(locale)
            }
            None => {
                self.metrics.record_miss();
                debug!("Missing translation for key '{}' ({})", key, locale);
                key
            }
        }
    }

    /// Look up the full entry for a key.
    pub fn entry(&self, key: &str) -> Option<&TranslationEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over all keys (unordered).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over all entries (unordered).
    pub fn entries(&self) -> impl Iterator<Item = (&str, &TranslationEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    pub fn metrics_report(&self) -> MetricsReport {
        self.metrics.report()
    }
}

// ==================== Built-in Strings ====================

/// `(key, English, Arabic)`
const BUILTIN_TRANSLATIONS: &[(&str, &str, &str)] = &[
    // Navigation
    ("nav.home", "Home", "الرئيسية"),
    ("nav.content", "Content", "المحتوى"),
    ("nav.articles", "Articles", "المقالات"),
    ("nav.courses", "Courses", "الكورسات"),
    ("nav.about", "About Us", "من نحن"),
    ("nav.contact", "Contact", "تواصل معنا"),
    ("nav.comingSoon", "Coming Soon", "قريباً"),
    // Home page
    ("home.welcome.title", "Isav Academy", "Isav Academy"),
    (
        "home.welcome.subtitle",
        "Your Gateway to Veterinary and Agricultural Knowledge",
        "بوابتك للمعرفة البيطرية والزراعية",
    ),
    (
        "home.welcome.description",
        "We provide exceptional scientific content in veterinary medicine, agriculture, and sciences",
        "حيث تلتقي الزراعة والطب البيطري بالابتكار.",
    ),
    ("home.welcome.cta", "Explore Content", "استكشف المحتوى"),
    // Categories
    ("category.veterinary", "Veterinary Medicine", "الطب البيطري"),
    ("category.agriculture", "Agriculture", "الزراعة"),
    ("category.science", "Sciences", "العلوم"),
    // Articles
    ("articles.all", "All Articles", "جميع المقالات"),
    ("articles.latest", "Latest Articles", "أحدث المقالات"),
    ("articles.viewAll", "View All", "عرض الكل"),
    ("articles.readMore", "Read More", "اقرأ المزيد"),
    ("content.latest", "Latest Content", "أحدث المحتوى"),
    ("content.readMore", "Read More", "اقرأ المزيد"),
    ("content.viewAll", "View All Content", "عرض كل المحتوى"),
    ("content.by", "By", "بقلم"),
    ("content.publishedOn", "Published on", "نُشر في"),
    ("content.readTime", "min read", "دقيقة قراءة"),
    // Ratings
    ("rating.count", "ratings", "تقييم"),
    ("rating.single", "rating", "تقييم"),
    ("rating.none", "No ratings yet", "لا توجد تقييمات بعد"),
    // About
    ("about.title", "About Us", "من نحن"),
    ("about.mission.title", "Our Mission", "رسالتنا"),
    ("about.vision.title", "Our Vision", "رؤيتنا"),
    ("about.team", "Our Team", "فريق العمل"),
    // Contact
    ("contact.title", "Contact Us", "تواصل معنا"),
    ("contact.form.name", "Name", "الاسم"),
    ("contact.form.email", "Email", "البريد الإلكتروني"),
    ("contact.form.subject", "Subject", "الموضوع"),
    ("contact.form.message", "Message", "الرسالة"),
    ("contact.form.send", "Send Message", "إرسال الرسالة"),
    // Newsletter
    ("newsletter.title", "Subscribe to Newsletter", "اشترك في النشرة البريدية"),
    ("newsletter.description", "Get latest content and updates", "احصل على آخر المحتوى والتحديثات"),
    ("newsletter.placeholder", "Enter your email", "أدخل بريدك الإلكتروني"),
    ("newsletter.subscribe", "Subscribe", "اشتراك"),
    // Courses
    ("courses.title", "Courses", "الكورسات"),
    ("courses.comingSoon", "Coming Soon...", "قريباً..."),
    (
        "courses.description",
        "We are preparing specialized courses in our academic fields",
        "نعمل على إعداد مجموعة من الكورسات المتخصصة في مجالاتنا الأكاديمية",
    ),
    ("courses.lessons", "Lessons", "الدروس"),
    ("courses.duration", "Duration", "المدة"),
    ("courses.watch", "Watch on YouTube", "شاهد على يوتيوب"),
    // Footer
    ("footer.about", "About Academy", "حول الأكاديمية"),
    ("footer.links", "Quick Links", "روابط سريعة"),
    ("footer.contact", "Contact Info", "معلومات التواصل"),
    ("footer.social", "Follow Us", "تابعنا"),
    ("footer.rights", "All rights reserved to ISAV Academy", "جميع الحقوق محفوظة لأكاديمية Isav"),
    // Common
    ("common.darkMode", "Dark Mode", "الوضع الليلي"),
    ("common.lightMode", "Light Mode", "الوضع النهاري"),
    ("common.loading", "Loading...", "جاري التحميل..."),
    // Months (date formatting)
    ("month.1", "January", "يناير"),
    ("month.2", "February", "فبراير"),
    ("month.3", "March", "مارس"),
    ("month.4", "April", "أبريل"),
    ("month.5", "May", "مايو"),
    ("month.6", "June", "يونيو"),
    ("month.7", "July", "يوليو"),
    ("month.8", "August", "أغسطس"),
    ("month.9", "September", "سبتمبر"),
    ("month.10", "October", "أكتوبر"),
    ("month.11", "November", "نوفمبر"),
    ("month.12", "December", "ديسمبر"),
];
