//! Locale type: a validated member of the closed set of supported locales.

use crate::i18n::{I18nError, LocaleConfig, LocaleRegistry};
use std::fmt;
use std::str::FromStr;

/// A supported locale.
///
/// Only codes present in the [`LocaleRegistry`] can be turned into a `Locale`,
/// so holding one is proof the locale has a bundle slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    code: &'static str,
}

/// The fallback target for missing keys and unsupported `set_locale` input.
pub const DEFAULT_LOCALE: Locale = Locale::EN;

impl Locale {
    pub const EN: Locale = Locale { code: "en" };

    pub const ZH: Locale = Locale { code: "zh" };

    /// Create a Locale from its exact code.
    ///
    /// # Example
    /// ```
    /// use app_i18n::i18n::Locale;
    ///
    /// assert_eq!(Locale::from_code("zh").unwrap(), Locale::ZH);
    /// assert!(Locale::from_code("fr").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Locale, I18nError> {
        LocaleRegistry::get()
            .get_by_code(code)
            .map(|config| Locale { code: config.code })
            .ok_or_else(|| I18nError::UnsupportedLocale(code.to_string()))
    }

    /// Get the locale code (e.g., "en", "zh").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the registry entry for this locale.
    ///
    /// # Panics
    /// Never, for a Locale built through `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be registered")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Whether the registry marks this locale as the default.
    pub fn is_default(&self) -> bool {
        self.code == LocaleRegistry::get().default_locale().code
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s)
    }
}

/// All supported locales in picker order.
pub fn available_locales() -> Vec<Locale> {
    LocaleRegistry::get()
        .list()
        .iter()
        .map(|config| Locale { code: config.code })
        .collect()
}

/// Pick the initial locale from an ambient language hint such as `LANG` or a
/// browser language tag.
///
/// Any hint starting with "zh" (case-insensitive) selects Chinese, which covers
/// "zh", "zh-CN" and POSIX forms like "zh_TW.UTF-8". Anything else, including
/// no hint, selects the default.
pub fn detect_locale(hint: Option<&str>) -> Locale {
    match hint {
        Some(hint) if hint.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("zh")) => Locale::ZH,
        _ => DEFAULT_LOCALE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Locale::EN.code(), "en");
        assert_eq!(Locale::ZH.code(), "zh");
        assert_eq!(Locale::ZH.native_name(), "中文");
        assert_eq!(Locale::EN.name(), "English");
    }

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(DEFAULT_LOCALE, Locale::EN);
        assert_eq!(Locale::default(), Locale::EN);
        assert!(Locale::EN.is_default());
        assert!(!Locale::ZH.is_default());
    }

    #[test]
    fn test_default_constant_matches_registry_flag() {
        assert_eq!(LocaleRegistry::get().default_locale().code, DEFAULT_LOCALE.code());
        assert!(DEFAULT_LOCALE.config().is_default);
        let defaults: Vec<_> = available_locales().into_iter().filter(Locale::is_default).collect();
        assert_eq!(defaults, vec![DEFAULT_LOCALE]);
    }

    #[test]
    fn test_from_code_valid() {
        assert_eq!(Locale::from_code("en").unwrap(), Locale::EN);
        assert_eq!(Locale::from_code("zh").unwrap(), Locale::ZH);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Locale::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unsupported"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Locale::from_code("").is_err());
    }

    #[test]
    fn test_from_str_and_display() {
        let locale: Locale = "zh".parse().unwrap();
        assert_eq!(locale.to_string(), "zh");
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_available_locales_order() {
        assert_eq!(available_locales(), vec![Locale::EN, Locale::ZH]);
    }

    // ==================== detect_locale Tests ====================

    #[test]
    fn test_detect_chinese_variants() {
        assert_eq!(detect_locale(Some("zh")), Locale::ZH);
        assert_eq!(detect_locale(Some("zh-CN")), Locale::ZH);
        assert_eq!(detect_locale(Some("ZH-tw")), Locale::ZH);
        assert_eq!(detect_locale(Some("zh_CN.UTF-8")), Locale::ZH);
    }

    #[test]
    fn test_detect_other_hints_fall_back_to_default() {
        assert_eq!(detect_locale(Some("en-US")), DEFAULT_LOCALE);
        assert_eq!(detect_locale(Some("fr_FR.UTF-8")), DEFAULT_LOCALE);
        assert_eq!(detect_locale(Some("z")), DEFAULT_LOCALE);
        assert_eq!(detect_locale(Some("")), DEFAULT_LOCALE);
        assert_eq!(detect_locale(None), DEFAULT_LOCALE);
    }

    #[test]
    fn test_detect_does_not_panic_on_multibyte_hint() {
        assert_eq!(detect_locale(Some("中文")), DEFAULT_LOCALE);
    }
}
