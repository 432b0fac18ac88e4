//! Locale registry: Single source of truth for all supported locales.
//!
//! The set of locales is closed and ordered. It is built once on first access
//! through a `OnceLock` and never changes afterwards.

use std::sync::OnceLock;

/// Metadata for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale code as used in bundle file names (e.g., "en", "zh")
    pub code: &'static str,

    /// English name of the locale (e.g., "English", "Chinese")
    pub name: &'static str,

    /// Native name of the locale, suitable for a locale picker (e.g., "中文")
    pub native_name: &'static str,

    /// Whether this is the default/fallback locale (exactly one should be true)
    pub is_default: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: supported_locales(),
        })
    }

    /// Get a locale configuration by its exact code.
    ///
    /// Matching is exact: "EN" and "en-US" are not "en".
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All supported locales, in picker order.
    pub fn list(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one default locale.
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }
}

fn supported_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
        },
        LocaleConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            is_default: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LocaleRegistry::get().get_by_code("en").unwrap();
        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert!(config.is_default);
    }

    #[test]
    fn test_get_by_code_chinese() {
        let config = LocaleRegistry::get().get_by_code("zh").unwrap();
        assert_eq!(config.code, "zh");
        assert_eq!(config.native_name, "中文");
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_is_exact() {
        let registry = LocaleRegistry::get();
        assert!(registry.get_by_code("fr").is_none());
        assert!(registry.get_by_code("EN").is_none());
        assert!(registry.get_by_code("zh-CN").is_none());
        assert!(registry.get_by_code("").is_none());
    }

    #[test]
    fn test_list_is_ordered() {
        let codes: Vec<_> = LocaleRegistry::get().list().iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["en", "zh"]);
    }

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(LocaleRegistry::get().default_locale().code, "en");
    }
}
