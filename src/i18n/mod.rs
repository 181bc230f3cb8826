//! Internationalization (i18n) module for bilingual support.
//!
//! All locale-related logic lives here: the set of supported locales, the
//! static UI string table, and the session-wide active locale.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and their direction
//! - `language`: Type-safe `LocaleCode` used to index everything localized
//! - `strings`: Translation table for static UI strings (key fallback on miss)
//! - `context`: Active-locale state, switching, persistence and notification
//! - `storage`: Client preference stores backing the context
//! - `validator`: Translation table completeness checks
//! - `metrics`: Lookup hit/miss counters
//!
//! Two mechanisms coexist and must stay separate: static UI strings go through
//! the translation table by key, while entity content is stored per locale in
//! `LocalizedText` fields and projected with `resolve`.
//!
//! # Example
//!
//! ```
//! use isav_academy::i18n::{LocaleCode, LocaleContext, MemoryStore};
//!
//! let mut context = LocaleContext::init(MemoryStore::new());
//! assert_eq!(context.translate("nav.home"), "Home");
//!
//! context.switch_locale(LocaleCode::Ar);
//! assert_eq!(context.translate("nav.home"), "الرئيسية");
//! assert!(context.attributes().dir.is_rtl());
//! ```

mod context;
mod language;
mod metrics;
mod registry;
mod storage;
mod strings;
mod validator;

pub use context::{DocumentAttributes, LocaleContext, SubscriptionId, LANGUAGE_KEY};
pub use language::LocaleCode;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{Direction, Locale, LocaleRegistry, UnknownLocaleError};
pub use storage::{FileStore, MemoryStore, PreferenceStore, StorageError};
pub use strings::{TranslationEntry, TranslationTable};
pub use validator::{TranslationValidator, ValidationReport};
