//! Ordered string enumerations for ORM models.
//!
//! A model declares an attribute backed by a fixed list of string values and
//! gets back an [`EnumRegistry`]: indexable, iterable, translatable. The
//! declaration can also map the attribute as a database enum through the
//! [`EnumPersistence`] seam, and audit that every value is translated in
//! every locale of a [`TranslationCatalog`].
//!
//! ```
//! use nd_enum::{Catalog, Configuration, EnumBuilder, EnumDeclaration, ModelSchema, ValidationMode};
//!
//! let mut catalog = Catalog::new();
//! catalog.insert("en", "users.role.base.user", "User");
//! catalog.insert("en", "users.role.base.admin", "Administrator");
//!
//! let config = Configuration::default();
//! let mut user = ModelSchema::new("User");
//!
//! let role = EnumBuilder::new(&config, &catalog).declare(
//!     &mut user,
//!     EnumDeclaration::new("role", ["user", "admin"])
//!         .db(true)
//!         .validate(ValidationMode::Enforce),
//! )?;
//!
//! assert_eq!(role.lookup(1), Some("admin"));
//! assert_eq!(role.translate(&catalog, "admin"), "Administrator");
//! assert!(user.responds_to("roles"));
//! # Ok::<(), nd_enum::Error>(())
//! ```

pub mod config;
pub mod enumeration;
pub mod error;
pub mod i18n;
pub mod inflector;
pub mod model;

pub use config::{configuration, configure, reset_configuration, Configuration};
pub use enumeration::{
    declare_enum, Affix, DbOptions, EnumBuilder, EnumDeclaration, EnumRegistry,
    EnumerationDefinition, I18nOptions, LookupKey, NamingOptions,
};
pub use error::{Error, Result};
pub use i18n::{Catalog, TranslationAudit, TranslationCatalog, TranslationValidator, ValidationMode};
pub use model::{EnumNaming, EnumPersistence, Model, ModelSchema};
