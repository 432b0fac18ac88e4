//! Internationalization (i18n) module: runtime translation lookup.
//!
//! Translations are nested JSON bundles, one per locale, addressed by dotted
//! key paths such as `settings.language.label`. Lookups fall back to the
//! default locale and finally to the key itself, so a missing translation
//! shows up in the UI instead of failing.
//!
//! # Architecture
//!
//! - `registry`: Closed, ordered set of supported locales and their metadata
//! - `locale`: Validated `Locale` type, `DEFAULT_LOCALE` and hint detection
//! - `tree`: Typed translation tree (`Node::Leaf` / `Node::Branch`)
//! - `store`: Immutable per-locale trees, embedded or loaded from a directory
//! - `interpolate`: `{{name}}` placeholder substitution
//! - `translator`: Explicit state object holding the current locale
//!
//! The free functions below operate on one process-wide [`Translator`] built
//! from the embedded bundles and the process environment. Code that needs
//! several independent locales (e.g. one per request) should build its own
//! `Translator` over a shared `Arc<TranslationStore>`.
//!
//! # Example
//!
//! ```rust
//! use app_i18n::i18n::{self, Vars};
//!
//! i18n::set_locale("en");
//! assert_eq!(i18n::t("app.title"), "My App");
//! assert_eq!(
//!     i18n::t_with("greeting.hello", &Vars::new().with("name", "Ann")),
//!     "Hello, Ann!"
//! );
//! ```

mod error;
mod interpolate;
mod locale;
mod registry;
mod store;
mod translator;
mod tree;

pub use error::I18nError;
pub use interpolate::{interpolate, VarValue, Vars};
pub use locale::{available_locales, detect_locale, Locale, DEFAULT_LOCALE};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use store::TranslationStore;
pub use translator::Translator;
pub use tree::Node;

use crate::config::language_hint_from_env;
use std::sync::{Arc, OnceLock};
use tracing::error;

static GLOBAL: OnceLock<Translator> = OnceLock::new();

/// The process-wide translator.
///
/// Built on first use from the embedded bundles, with the initial locale
/// detected from `LC_ALL` / `LC_MESSAGES` / `LANG`.
pub fn global() -> &'static Translator {
    GLOBAL.get_or_init(|| {
        let store = TranslationStore::embedded().unwrap_or_else(|e| {
            // Embedded bundles are covered by tests; degrade to key fallback.
            error!("Embedded translation bundles are invalid: {}", e);
            TranslationStore::default()
        });
        Translator::init(Arc::new(store), language_hint_from_env().as_deref(), None)
    })
}

/// Translate `key` with the process-wide translator.
pub fn t(key: &str) -> String {
    global().t(key)
}

/// Translate `key` and interpolate `vars` with the process-wide translator.
pub fn t_with(key: &str, vars: &Vars) -> String {
    global().t_with(key, vars)
}

/// Set the process-wide locale; unsupported values reset it to the default.
pub fn set_locale(locale: &str) -> Locale {
    global().set_locale(locale)
}

/// The process-wide current locale.
pub fn get_locale() -> Locale {
    global().locale()
}

/// Apply an optional locale override (e.g. from app settings) at startup.
pub fn init_i18n(override_locale: Option<&str>) {
    if let Some(locale) = override_locale {
        set_locale(locale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_global_is_singleton() {
        assert!(std::ptr::eq(global(), global()));
    }

    #[test]
    #[serial]
    fn test_init_i18n_without_override_is_noop() {
        set_locale("zh");
        init_i18n(None);
        assert_eq!(get_locale(), Locale::ZH);
        set_locale("en");
    }

    #[test]
    #[serial]
    fn test_init_i18n_with_override() {
        set_locale("en");
        init_i18n(Some("zh"));
        assert_eq!(get_locale(), Locale::ZH);

        init_i18n(Some("xx"));
        assert_eq!(get_locale(), DEFAULT_LOCALE);
    }

    #[test]
    #[serial]
    fn test_global_translates_embedded_bundles() {
        set_locale("zh");
        assert_eq!(t("app.title"), "我的应用");
        assert_eq!(t("common.save"), "Save");
        assert_eq!(t("missing.key"), "missing.key");
        set_locale("en");
        assert_eq!(
            t_with("greeting.hello", &Vars::new().with("name", "Ann")),
            "Hello, Ann!"
        );
    }
}
