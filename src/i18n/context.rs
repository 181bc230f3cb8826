//! Localization context: the session-wide active locale.
//!
//! The context is an ordinary owned value handed to whatever renders, not a
//! global. It is initialized once from the persisted preference and changed
//! only through [`LocaleContext::switch_locale`], which applies its effects in
//! a fixed order:
//!
//! 1. the in-memory active locale
//! 2. the ambient `lang`/`dir` document attributes
//! 3. the persisted preference
//! 4. subscriber notification
//!
//! Switching takes `&mut self`, so two switches can never overlap and no
//! reader can observe a half-applied change.

use crate::content::LocalizedText;
use crate::i18n::{Direction, Locale, LocaleCode, PreferenceStore, TranslationTable};
use crate::render::LocalizedView;
use tracing::{debug, info, warn};

/// Storage key holding the chosen locale code.
pub const LANGUAGE_KEY: &str = "language";

/// Presentation attributes every visual component reads to lay itself out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentAttributes {
    /// Value of the `lang` attribute
    pub lang: LocaleCode,

    /// Value of the `dir` attribute
    pub dir: Direction,
}

impl DocumentAttributes {
    pub fn for_locale(code: LocaleCode) -> Self {
        Self {
            lang: code,
            dir: code.direction(),
        }
    }
}

/// Handle returned by [`LocaleContext::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Locale)>;

/// Holds the active locale for one session.
pub struct LocaleContext<'t, S: PreferenceStore> {
    active: LocaleCode,
    attributes: DocumentAttributes,
    store: S,
    table: &'t TranslationTable,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: PreferenceStore> LocaleContext<'static, S> {
    /// Initialize from the persisted preference using the built-in table.
    pub fn init(store: S) -> Self {
        Self::init_with_table(store, TranslationTable::builtin())
    }
}

impl<'t, S: PreferenceStore> LocaleContext<'t, S> {
    /// Initialize from the persisted preference.
    ///
    /// A missing, unreadable or unregistered preference selects the default
    /// locale; none of these are reported to the caller.
    pub fn init_with_table(store: S, table: &'t TranslationTable) -> Self {
        let active = persisted_locale(&store);

        Self {
            active,
            attributes: DocumentAttributes::for_locale(active),
            store,
            table,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Make `target` the active locale.
    ///
    /// Valid from any state to any state, including the current one. Storage
    /// failures are logged and otherwise ignored.
    pub fn switch_locale(&mut self, target: LocaleCode) {
        self.active = target;
        self.attributes = DocumentAttributes::for_locale(target);

        if let Err(e) = self.store.save(LANGUAGE_KEY, target.code()) {
            warn!("Failed to persist locale preference '{}': {}", target, e);
        }

        let locale = target.locale();
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(locale);
        }

        info!("Locale switched to {} ({})", target, locale.direction);
    }

    /// Switch using a raw code. An unregistered code selects the default
    /// locale. Returns the locale that was applied.
    pub fn switch_locale_code(&mut self, code: &str) -> LocaleCode {
        let target = match LocaleCode::from_code(code) {
            Ok(target) => target,
            Err(e) => {
                warn!("{}, falling back to default locale", e);
                LocaleCode::default_code()
            }
        };
        self.switch_locale(target);
        target
    }

    /// Register a callback invoked with the new locale after every switch.
    /// Callbacks run in registration order.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Locale) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn active_locale(&self) -> LocaleCode {
        self.active
    }

    /// Registry entry for the active locale.
    pub fn locale(&self) -> &'static Locale {
        self.active.locale()
    }

    pub fn attributes(&self) -> DocumentAttributes {
        self.attributes
    }

    /// Translate a UI string key in the active locale.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.translate(key, self.active)
    }

    /// Project a localized entity field into the active locale.
    pub fn resolve<'a>(&self, text: &'a LocalizedText) -> &'a str {
        text.get(self.active)
    }

    /// Rendering view bound to the locale active right now.
    pub fn view(&self) -> LocalizedView<'t> {
        LocalizedView::new(self.active, self.table)
    }

    pub fn table(&self) -> &'t TranslationTable {
        self.table
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// End the session, handing back the store.
    pub fn into_store(self) -> S {
        self.store
    }
}

fn persisted_locale<S: PreferenceStore>(store: &S) -> LocaleCode {
    match store.load(LANGUAGE_KEY) {
        Ok(Some(code)) => match LocaleCode::from_code(&code) {
            Ok(locale) => {
                debug!("Restored persisted locale {}", locale);
                locale
            }
            Err(e) => {
                warn!("Ignoring persisted locale preference: {}", e);
                LocaleCode::default_code()
            }
        },
        Ok(None) => {
            debug!("No persisted locale preference, using default");
            LocaleCode::default_code()
        }
        Err(e) => {
            warn!("Locale preference unavailable, using default: {}", e);
            LocaleCode::default_code()
        }
    }
}
