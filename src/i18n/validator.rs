//! Translation audit for enumeration values.
//!
//! Every declared value is expected to have a translation at
//! `<table>.<attribute>.<scope>.<value>` in every available locale, for every
//! scope found under `<table>.<attribute>` in any locale. The `base` scope is
//! always checked.
//!
//! Scopes are unioned across locales: a scope defined only in `fr` is still
//! required in `en`. This enforces full parity between locales.

use crate::config::Configuration;
use crate::enumeration::EnumerationDefinition;
use crate::error::{Error, Result};
use crate::i18n::{TranslationCatalog, ValidationMode};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

/// Scope that is always audited
pub const BASE_SCOPE: &str = "base";

/// Outcome of one audit run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationAudit {
    /// Display name of the owning model
    pub model_name: String,

    /// Audited attribute
    pub attribute: String,

    /// Scopes checked, `base` first, then in discovery order
    pub scopes: Vec<String>,

    /// Missing key paths per available locale (empty lists included)
    pub missing_keys_by_locale: IndexMap<String, Vec<String>>,
}

impl TranslationAudit {
    /// Check if any locale is missing any key
    pub fn has_missing(&self) -> bool {
        self.missing_keys_by_locale
            .values()
            .any(|keys| !keys.is_empty())
    }

    /// Total number of missing keys across locales
    pub fn missing_count(&self) -> usize {
        self.missing_keys_by_locale.values().map(Vec::len).sum()
    }
}

/// Audits enumeration translations against a catalog.
pub struct TranslationValidator<'a> {
    catalog: &'a dyn TranslationCatalog,
    configuration: &'a Configuration,
}

impl<'a> TranslationValidator<'a> {
    pub fn new(catalog: &'a dyn TranslationCatalog, configuration: &'a Configuration) -> Self {
        Self {
            catalog,
            configuration,
        }
    }

    /// Effective mode for a definition.
    pub fn mode_for(&self, definition: &EnumerationDefinition) -> ValidationMode {
        ValidationMode::resolve(
            definition.i18n.validate,
            self.configuration.default_validation_mode,
        )
    }

    /// Validate a definition according to its effective mode.
    ///
    /// Returns the audit that was performed, or `None` in `Ignore` mode.
    ///
    /// # Errors
    /// `Error::MissingTranslation` in `Enforce` mode when any key is missing.
    pub fn validate(&self, definition: &EnumerationDefinition) -> Result<Option<TranslationAudit>> {
        let mode = self.mode_for(definition);
        if mode == ValidationMode::Ignore {
            return Ok(None);
        }

        let audit = self.audit(definition);
        log_audit(&audit);

        if mode == ValidationMode::Enforce && audit.has_missing() {
            return Err(Error::MissingTranslation);
        }

        Ok(Some(audit))
    }

    /// Run the audit without logging or enforcing.
    pub fn audit(&self, definition: &EnumerationDefinition) -> TranslationAudit {
        let base_key = definition.translation_base_key();
        let base_key = base_key.as_str();
        let locales = self.catalog.available_locales();
        let scopes = self.discover_scopes(base_key, &locales);

        let missing_keys_by_locale = locales
            .iter()
            .map(|locale| {
                let missing = scopes
                    .iter()
                    .flat_map(|scope| {
                        definition
                            .values
                            .iter()
                            .map(move |value| format!("{}.{}.{}", base_key, scope, value))
                    })
                    .filter(|key| !self.catalog.key_exists(key, locale))
                    .collect::<Vec<_>>();
                (locale.clone(), missing)
            })
            .collect();

        TranslationAudit {
            model_name: definition.model_name.clone(),
            attribute: definition.attribute.clone(),
            scopes,
            missing_keys_by_locale,
        }
    }

    fn discover_scopes(&self, base_key: &str, locales: &[String]) -> Vec<String> {
        let mut scopes = vec![BASE_SCOPE.to_string()];

        for locale in locales {
            for scope in self.catalog.lookup_raw(base_key, locale).keys() {
                if !scopes.contains(scope) {
                    scopes.push(scope.clone());
                }
            }
        }

        scopes
    }
}

fn log_audit(audit: &TranslationAudit) {
    let prefix = format!("nd_enum {}#{}", audit.model_name, audit.attribute);
    info!("{} scopes={:?}", prefix, audit.scopes);

    for (locale, missing_keys) in &audit.missing_keys_by_locale {
        info!("{} locale={} missing_keys={:?}", prefix, locale, missing_keys);
    }
}
