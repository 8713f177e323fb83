//! Declaration input and the normalized definition built from it.

use crate::i18n::ValidationMode;
use crate::model::Model;
use indexmap::IndexMap;

/// Naming segment for generated database accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Affix {
    /// Use the attribute name (`prefix: true`)
    Attribute,

    /// Use a custom string as-is
    Custom(String),
}

impl Affix {
    /// Get the text this affix contributes for `attribute`.
    pub fn resolve<'a>(&'a self, attribute: &'a str) -> &'a str {
        match self {
            Affix::Attribute => attribute,
            Affix::Custom(text) => text,
        }
    }
}

impl From<&str> for Affix {
    fn from(text: &str) -> Self {
        Affix::Custom(text.to_string())
    }
}

impl From<String> for Affix {
    fn from(text: String) -> Self {
        Affix::Custom(text)
    }
}

/// Prefix/suffix options for a database enum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingOptions {
    pub prefix: Option<Affix>,
    pub suffix: Option<Affix>,
}

impl NamingOptions {
    pub fn prefix(mut self, prefix: impl Into<Affix>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn suffix(mut self, suffix: impl Into<Affix>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

/// Whether and how the attribute is also mapped as a database enum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DbOptions {
    #[default]
    Off,
    On,
    Naming(NamingOptions),
}

impl DbOptions {
    /// Check if the attribute is mapped to the database
    pub fn is_enabled(&self) -> bool {
        !matches!(self, DbOptions::Off)
    }

    /// Naming options, empty unless `Naming` was given
    pub fn naming(&self) -> NamingOptions {
        match self {
            DbOptions::Naming(naming) => naming.clone(),
            DbOptions::Off | DbOptions::On => NamingOptions::default(),
        }
    }
}

impl From<bool> for DbOptions {
    fn from(enabled: bool) -> Self {
        if enabled {
            DbOptions::On
        } else {
            DbOptions::Off
        }
    }
}

impl From<NamingOptions> for DbOptions {
    fn from(naming: NamingOptions) -> Self {
        DbOptions::Naming(naming)
    }
}

/// Translation options for a declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct I18nOptions {
    /// `Log`/`Enforce` override the configured mode; `Ignore` defers to it
    pub validate: Option<ValidationMode>,
}

/// An enumeration as written by the model author.
///
/// # Example
/// ```
/// use nd_enum::{EnumDeclaration, NamingOptions, ValidationMode};
///
/// let declaration = EnumDeclaration::new("role", ["user", "admin"])
///     .db(NamingOptions::default().prefix("member"))
///     .validate(ValidationMode::Log);
///
/// assert_eq!(declaration.attribute, "role");
/// assert!(declaration.db.is_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclaration {
    pub attribute: String,
    pub values: Vec<String>,
    pub db: DbOptions,
    pub i18n: I18nOptions,
    /// Defaults to the owning model's name
    pub model_name: Option<String>,
}

impl EnumDeclaration {
    pub fn new<I, S>(attribute: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attribute: attribute.into(),
            values: values.into_iter().map(Into::into).collect(),
            db: DbOptions::Off,
            i18n: I18nOptions::default(),
            model_name: None,
        }
    }

    pub fn db(mut self, db: impl Into<DbOptions>) -> Self {
        self.db = db.into();
        self
    }

    pub fn i18n(mut self, i18n: I18nOptions) -> Self {
        self.i18n = i18n;
        self
    }

    /// Shorthand for `i18n(I18nOptions { validate: Some(mode) })`
    pub fn validate(mut self, mode: ValidationMode) -> Self {
        self.i18n.validate = Some(mode);
        self
    }

    pub fn model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = Some(name.into());
        self
    }
}

/// A normalized enumeration bound to its owning model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationDefinition {
    pub attribute: String,
    pub values: Vec<String>,
    pub model_name: String,
    pub table_name: String,
    pub db: DbOptions,
    pub i18n: I18nOptions,
}

impl EnumerationDefinition {
    /// Bind a declaration to the model that owns it.
    pub fn normalize<M>(model: &M, declaration: EnumDeclaration) -> Self
    where
        M: Model + ?Sized,
    {
        let EnumDeclaration {
            attribute,
            values,
            db,
            i18n,
            model_name,
        } = declaration;

        Self {
            attribute,
            values,
            model_name: model_name.unwrap_or_else(|| model.model_name().to_string()),
            table_name: model.table_name().to_string(),
            db,
            i18n,
        }
    }

    /// Translation key prefix: `<table>.<attribute>`
    pub fn translation_base_key(&self) -> String {
        format!("{}.{}", self.table_name, self.attribute)
    }

    /// Identifier → value map, in declaration order.
    pub fn value_map(&self) -> IndexMap<String, String> {
        self.values
            .iter()
            .map(|value| (value.clone(), value.clone()))
            .collect()
    }
}
