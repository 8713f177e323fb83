//! Enumeration declarations.
//!
//! - `definition`: declaration input and the normalized definition
//! - `registry`: the lookup object returned to the model
//! - `db`: database enum binding
//! - `builder`: ties the above together with translation validation

mod builder;
mod db;
mod definition;
mod registry;

pub use builder::{declare_enum, EnumBuilder};
pub use db::{bind, host_naming};
pub use definition::{
    Affix, DbOptions, EnumDeclaration, EnumerationDefinition, I18nOptions, NamingOptions,
};
pub use registry::{EnumRegistry, LookupKey};
