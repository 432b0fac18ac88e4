use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variables consulted, in order, for the ambient language hint.
const HINT_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Explicit locale override (APP_LOCALE), applied after hint detection
    pub locale_override: Option<String>,

    /// Ambient language hint, e.g. "zh_CN.UTF-8"
    pub language_hint: Option<String>,

    /// Directory holding `<code>.json` bundles (APP_I18N_DIR); embedded
    /// bundles are used when unset
    pub bundle_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bundle_dir = match std::env::var_os("APP_I18N_DIR") {
            Some(dir) if !dir.is_empty() => {
                let dir = PathBuf::from(dir);
                if !dir.is_dir() {
                    return Err(anyhow::anyhow!("{} is not a directory", dir.display()))
                        .context("APP_I18N_DIR is invalid");
                }
                Some(dir)
            }
            _ => None,
        };

        Ok(Self {
            locale_override: non_empty_var("APP_LOCALE"),
            language_hint: language_hint_from_env(),
            bundle_dir,
        })
    }
}

/// First non-empty value of `LC_ALL`, `LC_MESSAGES`, `LANG`.
pub fn language_hint_from_env() -> Option<String> {
    HINT_VARS.iter().find_map(|name| non_empty_var(name))
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        for name in HINT_VARS.iter().chain(["APP_LOCALE", "APP_I18N_DIR"].iter()) {
            std::env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear();
        let config = Config::from_env().unwrap();
        assert!(config.locale_override.is_none());
        assert!(config.language_hint.is_none());
        assert!(config.bundle_dir.is_none());
    }

    #[test]
    #[serial]
    fn test_hint_precedence() {
        clear();
        std::env::set_var("LANG", "en_US.UTF-8");
        assert_eq!(language_hint_from_env().as_deref(), Some("en_US.UTF-8"));

        std::env::set_var("LC_MESSAGES", "zh_CN.UTF-8");
        assert_eq!(language_hint_from_env().as_deref(), Some("zh_CN.UTF-8"));

        std::env::set_var("LC_ALL", "fr_FR.UTF-8");
        assert_eq!(language_hint_from_env().as_deref(), Some("fr_FR.UTF-8"));
        clear();
    }

    #[test]
    #[serial]
    fn test_empty_hint_vars_are_skipped() {
        clear();
        std::env::set_var("LC_ALL", "");
        std::env::set_var("LANG", "zh");
        assert_eq!(language_hint_from_env().as_deref(), Some("zh"));
        clear();
    }

    #[test]
    #[serial]
    fn test_locale_override_and_bundle_dir() {
        clear();
        let dir = tempfile::TempDir::new().unwrap();
        std::env::set_var("APP_LOCALE", "zh");
        std::env::set_var("APP_I18N_DIR", dir.path());

        let config = Config::from_env().unwrap();
        assert_eq!(config.locale_override.as_deref(), Some("zh"));
        assert_eq!(config.bundle_dir.as_deref(), Some(dir.path()));
        clear();
    }

    #[test]
    #[serial]
    fn test_bundle_dir_must_exist() {
        clear();
        std::env::set_var("APP_I18N_DIR", "/definitely/not/here");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("APP_I18N_DIR"));
        clear();
    }
}
