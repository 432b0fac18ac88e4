//! Translation store: one immutable translation tree per supported locale.

use crate::i18n::{available_locales, I18nError, Locale, Node, DEFAULT_LOCALE};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

const EN_JSON: &str = include_str!("../../locales/en.json");
const ZH_JSON: &str = include_str!("../../locales/zh.json");

/// In-memory bundles, loaded once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    trees: HashMap<Locale, Node>,
}

impl TranslationStore {
    /// Build a store from already-parsed trees.
    pub fn new(trees: impl IntoIterator<Item = (Locale, Node)>) -> Self {
        Self {
            trees: trees.into_iter().collect(),
        }
    }

    /// The bundles compiled into the binary.
    pub fn embedded() -> Result<Self, I18nError> {
        Self::from_json([(Locale::EN, EN_JSON), (Locale::ZH, ZH_JSON)])
    }

    /// Parse one JSON document per locale.
    pub fn from_json<'a>(
        sources: impl IntoIterator<Item = (Locale, &'a str)>,
    ) -> Result<Self, I18nError> {
        let mut trees = HashMap::new();
        for (locale, json) in sources {
            let tree: Node = serde_json::from_str(json).map_err(|source| I18nError::Parse {
                locale: locale.code(),
                source,
            })?;
            trees.insert(locale, tree);
        }
        Ok(Self { trees })
    }

    /// Load `<code>.json` for every supported locale from `dir`.
    ///
    /// A missing file leaves that locale empty so every lookup falls back to
    /// the default locale, whose file is required.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, I18nError> {
        let dir = dir.as_ref();
        let mut sources = Vec::new();

        for locale in available_locales() {
            let path = dir.join(format!("{}.json", locale.code()));
            match std::fs::read_to_string(&path) {
                Ok(json) => sources.push((locale, json)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    if locale == DEFAULT_LOCALE {
                        return Err(I18nError::MissingDefaultBundle(locale.code()));
                    }
                    debug!("No bundle for locale '{}' in {}", locale, dir.display());
                }
                Err(source) => return Err(I18nError::Io { path, source }),
            }
        }

        let store = Self::from_json(sources.iter().map(|(locale, json)| (*locale, json.as_str())))?;
        info!(
            "Loaded {} locale bundle(s) from {}",
            store.trees.len(),
            dir.display()
        );
        Ok(store)
    }

    /// The tree for `locale`, if a bundle was loaded for it.
    pub fn tree(&self, locale: Locale) -> Option<&Node> {
        self.trees.get(&locale)
    }

    /// Walk `key` in the locale's tree, yielding whatever node it reaches.
    pub fn find(&self, key: &str, locale: Locale) -> Option<&Node> {
        self.tree(locale)?.walk(key)
    }

    /// Resolve `key` to a string leaf in the locale's tree.
    ///
    /// Branches and missing paths both yield `None`.
    pub fn lookup(&self, key: &str, locale: Locale) -> Option<&str> {
        self.tree(locale)?.leaf(key)
    }
}
