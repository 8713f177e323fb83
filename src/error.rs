//! Error types for enumeration declarations.

use thiserror::Error;

/// Errors returned while declaring an enumeration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// At least one declared value lacks a translation in an available locale.
    ///
    /// The missing keys themselves are reported through the log lines emitted
    /// right before this error is returned.
    #[error("missing translations for enumeration values")]
    MissingTranslation,

    /// The attribute already has an enumeration on this model.
    #[error("{model} already defines an enum named '{attribute}'")]
    ConflictingEnum { model: String, attribute: String },

    /// A generated accessor would shadow one created by another enum.
    #[error(
        "enum '{attribute}' on {model} would generate accessor '{method}', \
         which is already defined by another enum"
    )]
    ConflictingAccessor {
        model: String,
        attribute: String,
        method: String,
    },

    /// Text that does not name a validation mode.
    #[error("unknown validation mode: '{0}' (expected ignore, log or enforce)")]
    InvalidMode(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
