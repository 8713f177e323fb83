//! Validation modes for translation audits.

use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// How missing translations are handled when an enumeration is declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Skip the audit entirely.
    #[default]
    Ignore,

    /// Audit and log missing keys, never fail.
    Log,

    /// Audit, log, and fail when any key is missing.
    Enforce,
}

impl ValidationMode {
    /// All modes, in escalating order.
    pub const ALL: [ValidationMode; 3] = [Self::Ignore, Self::Log, Self::Enforce];

    /// Get the lowercase name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Log => "log",
            Self::Enforce => "enforce",
        }
    }

    /// Resolve the effective mode for one declaration.
    ///
    /// Only `Log` and `Enforce` override the configured default; an explicit
    /// `Ignore` falls through to it.
    pub fn resolve(explicit: Option<ValidationMode>, default: ValidationMode) -> ValidationMode {
        match explicit {
            Some(mode @ (Self::Log | Self::Enforce)) => mode,
            _ => default,
        }
    }

    /// Parse a mode, falling back to `Ignore` (with a warning) for anything unrecognized.
    pub fn parse_lenient(value: &str) -> ValidationMode {
        value.parse().unwrap_or_else(|_| {
            warn!(
                "{:?} is not a known validation mode, using '{}'",
                value,
                ValidationMode::Ignore
            );
            ValidationMode::Ignore
        })
    }
}

impl FromStr for ValidationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_start_matches(':').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| Error::InvalidMode(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for ValidationMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
