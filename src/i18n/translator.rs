//! Translator: the current-locale state plus the `t` entry point.

use crate::i18n::{detect_locale, interpolate, Locale, TranslationStore, Vars, DEFAULT_LOCALE};
use std::borrow::Cow;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

/// Translation context owning the current locale.
///
/// Cheap to share: the store sits behind an `Arc` and the locale behind a
/// `RwLock`, so one instance can serve many threads, or each request can get
/// its own instance over the same store.
#[derive(Debug)]
pub struct Translator {
    store: Arc<TranslationStore>,
    current: RwLock<Locale>,
}

impl Translator {
    pub fn new(store: Arc<TranslationStore>, locale: Locale) -> Self {
        Self {
            store,
            current: RwLock::new(locale),
        }
    }

    /// Initial locale comes from `hint` (e.g. `LANG`); `override_locale`,
    /// when given, is then applied exactly like [`Translator::set_locale`].
    pub fn init(
        store: Arc<TranslationStore>,
        hint: Option<&str>,
        override_locale: Option<&str>,
    ) -> Self {
        let translator = Self::new(store, detect_locale(hint));
        if let Some(locale) = override_locale {
            translator.set_locale(locale);
        }
        translator
    }

    pub fn store(&self) -> &Arc<TranslationStore> {
        &self.store
    }

    /// The current locale.
    pub fn locale(&self) -> Locale {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Switch to `candidate`, or to the default locale if it is unsupported.
    ///
    /// Never fails; an unsupported value is reported through `tracing` and the
    /// resulting locale is returned.
    pub fn set_locale(&self, candidate: &str) -> Locale {
        let locale = match Locale::from_code(candidate) {
            Ok(locale) => locale,
            Err(_) => {
                warn!(
                    "Unsupported locale \"{}\", falling back to default ({})",
                    candidate, DEFAULT_LOCALE
                );
                DEFAULT_LOCALE
            }
        };
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = locale;
        locale
    }

    /// Translate `key` in the current locale.
    ///
    /// Falls back to the default locale, then to the stringified node that was
    /// found (a branch renders as JSON), then to `key` itself.
    pub fn t(&self, key: &str) -> String {
        self.resolve(key).into_owned()
    }

    /// Translate `key` and substitute `{{name}}` placeholders from `vars`.
    ///
    /// Interpolation only applies to resolved strings, never to the key or a
    /// stringified branch.
    pub fn t_with(&self, key: &str, vars: &Vars) -> String {
        match self.resolve(key) {
            Cow::Borrowed(template) => interpolate(template, vars),
            Cow::Owned(fallback) => fallback,
        }
    }

    /// Borrowed when a string leaf resolved, owned for every fallback text.
    fn resolve<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        let locale = self.locale();

        if let Some(text) = self.store.lookup(key, locale) {
            return Cow::Borrowed(text);
        }
        if let Some(text) = self.store.lookup(key, DEFAULT_LOCALE) {
            debug!("Key '{}' missing in '{}', using '{}'", key, locale, DEFAULT_LOCALE);
            return Cow::Borrowed(text);
        }

        let found = self
            .store
            .find(key, locale)
            .or_else(|| self.store.find(key, DEFAULT_LOCALE));
        match found {
            // Only branches get here: any leaf was returned by `lookup` above.
            Some(node) => {
                debug!("Key '{}' names a group, not a string", key);
                Cow::Owned(node.to_string())
            }
            None => {
                debug!("Key '{}' missing in all locales", key);
                Cow::Owned(key.to_string())
            }
        }
    }
}
