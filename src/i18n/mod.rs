//! Internationalization support for enumerations.
//!
//! # Architecture
//!
//! - `catalog`: the `TranslationCatalog` seam and an in-memory `Catalog`
//!   loadable from locale files
//! - `mode`: validation modes (`ignore`, `log`, `enforce`)
//! - `validator`: definition-time audit of enumeration translation keys
//!
//! # Example
//!
//! ```rust
//! use nd_enum::i18n::{Catalog, TranslationCatalog};
//!
//! let mut catalog = Catalog::new();
//! catalog.insert("en", "users.role.base.admin", "Administrator");
//!
//! assert_eq!(catalog.translate("admin", "users.role.base"), "Administrator");
//! assert!(catalog.key_exists("users.role.base.admin", "en"));
//! ```

mod catalog;
mod mode;
mod validator;

pub use catalog::{Catalog, TranslationCatalog, DEFAULT_LOCALE};
pub use mode::ValidationMode;
pub use validator::{TranslationAudit, TranslationValidator, BASE_SCOPE};
