//! Process-wide enumeration settings.
//!
//! A [`Configuration`] can be passed by reference to [`crate::EnumBuilder`],
//! or kept in the process-wide slot managed by [`configure`] and
//! [`configuration`]. The global slot is meant to be written during boot,
//! before any enumeration is declared, and only read afterwards.

use crate::i18n::ValidationMode;
use serde::{Deserialize, Serialize};
use std::sync::{OnceLock, RwLock};

/// Scope used for translations when none is given.
pub const DEFAULT_TRANSLATION_SCOPE: &str = "base";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Mode used by declarations that don't override it
    pub default_validation_mode: ValidationMode,

    /// Scope segment used by `EnumRegistry::translate`
    pub default_translation_scope: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            default_validation_mode: ValidationMode::Ignore,
            default_translation_scope: DEFAULT_TRANSLATION_SCOPE.to_string(),
        }
    }
}

impl Configuration {
    /// Read `ND_ENUM_VALIDATION_MODE` and `ND_ENUM_TRANSLATION_SCOPE`,
    /// keeping the defaults for unset values.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            default_validation_mode: std::env::var("ND_ENUM_VALIDATION_MODE")
                .map(|raw| ValidationMode::parse_lenient(&raw))
                .unwrap_or(defaults.default_validation_mode),

            default_translation_scope: std::env::var("ND_ENUM_TRANSLATION_SCOPE")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.default_translation_scope),
        }
    }
}

/// Global configuration slot (initialized lazily)
static CONFIGURATION: OnceLock<RwLock<Configuration>> = OnceLock::new();

fn slot() -> &'static RwLock<Configuration> {
    CONFIGURATION.get_or_init(|| RwLock::new(Configuration::default()))
}

/// Get a snapshot of the process-wide configuration.
pub fn configuration() -> Configuration {
    match slot().read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Edit the process-wide configuration in place.
///
/// # Example
/// ```
/// use nd_enum::{configure, ValidationMode};
///
/// configure(|c| c.default_validation_mode = ValidationMode::Log);
/// # nd_enum::reset_configuration();
/// ```
pub fn configure<F>(mutate: F)
where
    F: FnOnce(&mut Configuration),
{
    let mut guard = match slot().write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    mutate(&mut guard);
}

/// Restore the process-wide configuration to its defaults.
pub fn reset_configuration() {
    configure(|c| *c = Configuration::default());
}
