use std::path::PathBuf;
use thiserror::Error;

/// Errors from the fallible edges of the i18n module: parsing a locale code
/// and loading bundles. Translation itself never fails.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Unsupported locale: '{0}'")]
    UnsupportedLocale(String),

    #[error("Failed to parse bundle for locale '{locale}': {source}")]
    Parse {
        locale: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read bundle {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing bundle for default locale '{0}'")]
    MissingDefaultBundle(&'static str),
}
