//! Translation catalog: the lookup surface enumerations translate through.
//!
//! [`TranslationCatalog`] is the seam to a host translation subsystem.
//! [`Catalog`] is an in-memory implementation holding one nested key tree
//! per locale, loadable from YAML or JSON locale files:
//!
//! ```yaml
//! en:
//!   users:
//!     role:
//!       base:
//!         admin: Administrator
//! ```

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Read access to translations, keyed by dotted paths.
pub trait TranslationCatalog {
    /// Translate `key` under the dotted `scope` in the current locale.
    ///
    /// Missing translations produce a placeholder string rather than an error.
    fn translate(&self, key: &str, scope: &str) -> String;

    /// Check whether anything is stored at the dotted `key` for `locale`.
    fn key_exists(&self, key: &str, locale: &str) -> bool;

    /// Locales translations are expected in.
    fn available_locales(&self) -> Vec<String>;

    /// Get the mapping stored at `key` for `locale`, or an empty mapping.
    fn lookup_raw(&self, key: &str, locale: &str) -> Map<String, Value>;
}

/// In-memory translation catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Key tree per locale, in load order
    trees: IndexMap<String, Value>,

    /// Locale used by `translate`
    locale: String,

    /// Locale always considered available
    default_locale: String,

    /// Explicit override of the available locales
    available_locales: Option<Vec<String>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog with `en` as default and current locale.
    pub fn new() -> Self {
        Self::with_default_locale(DEFAULT_LOCALE)
    }

    /// Create an empty catalog with the given default locale.
    pub fn with_default_locale(locale: &str) -> Self {
        Self {
            trees: IndexMap::new(),
            locale: locale.to_string(),
            default_locale: locale.to_string(),
            available_locales: None,
        }
    }

    /// Get the locale used by `translate`.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Switch the locale used by `translate`.
    pub fn set_locale(&mut self, locale: &str) {
        self.locale = locale.to_string();
    }

    /// Get the default locale.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Pin the available locales instead of deriving them from loaded data.
    pub fn set_available_locales<I, S>(&mut self, locales: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available_locales = Some(locales.into_iter().map(Into::into).collect());
    }

    /// Store `text` at the dotted `key` for `locale`.
    ///
    /// Intermediate segments are created as needed. A leaf sitting where a
    /// segment needs to be is replaced by a mapping.
    pub fn insert(&mut self, locale: &str, key: &str, text: &str) {
        let mut node = self
            .trees
            .entry(locale.to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        for segment in key.split('.').filter(|s| !s.is_empty()) {
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            node = match node {
                Value::Object(map) => map
                    .entry(segment.to_string())
                    .or_insert_with(|| Value::Object(Map::new())),
                _ => unreachable!("node was just made an object"),
            };
        }

        *node = Value::String(text.to_string());
    }

    /// Deep-merge a key tree into `locale`. Later values win on conflicts.
    pub fn merge(&mut self, locale: &str, tree: Value) {
        match self.trees.get_mut(locale) {
            Some(existing) => deep_merge(existing, tree),
            None => {
                self.trees.insert(locale.to_string(), tree);
            }
        }
    }

    /// Merge a document whose top-level keys are locale codes.
    pub fn merge_document(&mut self, document: Value) -> Result<()> {
        let Value::Object(locales) = document else {
            bail!("locale document must be a mapping of locale codes");
        };

        for (locale, tree) in locales {
            self.merge(&locale, tree);
        }
        Ok(())
    }

    /// Load one locale file (`.yml`, `.yaml` or `.json`).
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read locale file {}", path.display()))?;

        let document: Value = match extension(path).as_deref() {
            Some("yml") | Some("yaml") => serde_yaml::from_str(&raw)
                .with_context(|| format!("Invalid YAML in {}", path.display()))?,
            Some("json") => serde_json::from_str(&raw)
                .with_context(|| format!("Invalid JSON in {}", path.display()))?,
            _ => bail!("Unsupported locale file type: {}", path.display()),
        };

        self.merge_document(document)
            .with_context(|| format!("Failed to merge locale file {}", path.display()))?;
        debug!("Loaded locale file {}", path.display());
        Ok(())
    }

    /// Load every locale file in `dir`, in file-name order.
    ///
    /// Returns the number of files loaded. Other files are skipped.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();
        let mut paths = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read locale directory {}", dir.display()))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()
            .with_context(|| format!("Failed to list locale directory {}", dir.display()))?;
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            let supported = matches!(
                extension(&path).as_deref(),
                Some("yml") | Some("yaml") | Some("json")
            );
            if path.is_file() && supported {
                self.load_file(&path)?;
                loaded += 1;
            }
        }
        Ok(loaded)
    }

    /// Resolve the value stored at a dotted key.
    pub fn resolve(&self, locale: &str, key: &str) -> Option<&Value> {
        let mut node = self.trees.get(locale)?;
        for segment in key.split('.').filter(|s| !s.is_empty()) {
            node = node.as_object()?.get(segment)?;
        }
        Some(node)
    }
}

impl TranslationCatalog for Catalog {
    fn translate(&self, key: &str, scope: &str) -> String {
        let full_key = if scope.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", scope, key)
        };

        match self.resolve(&self.locale, &full_key) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Null) | None => {
                format!("translation missing: {}.{}", self.locale, full_key)
            }
            Some(other) => other.to_string(),
        }
    }

    fn key_exists(&self, key: &str, locale: &str) -> bool {
        !matches!(self.resolve(locale, key), None | Some(Value::Null))
    }

    fn available_locales(&self) -> Vec<String> {
        if let Some(locales) = &self.available_locales {
            return locales.clone();
        }

        let mut locales = vec![self.default_locale.clone()];
        for locale in self.trees.keys() {
            if !locales.contains(locale) {
                locales.push(locale.clone());
            }
        }
        locales
    }

    fn lookup_raw(&self, key: &str, locale: &str) -> Map<String, Value> {
        match self.resolve(locale, key) {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        }
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn deep_merge(target: &mut Value, incoming: Value) {
    match (target, incoming) {
        (Value::Object(target), Value::Object(incoming)) => {
            for (key, value) in incoming {
                match target.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, incoming) => *target = incoming,
    }
}
