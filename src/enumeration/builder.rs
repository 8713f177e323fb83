//! Turns declarations into registries.

use crate::config::{configuration, Configuration};
use crate::enumeration::{db, EnumDeclaration, EnumRegistry, EnumerationDefinition};
use crate::error::Result;
use crate::i18n::{TranslationCatalog, TranslationValidator};
use crate::model::EnumPersistence;
use tracing::debug;

/// Declares enumerations against an injected configuration and catalog.
pub struct EnumBuilder<'a> {
    configuration: &'a Configuration,
    catalog: &'a dyn TranslationCatalog,
}

impl<'a> EnumBuilder<'a> {
    pub fn new(configuration: &'a Configuration, catalog: &'a dyn TranslationCatalog) -> Self {
        Self {
            configuration,
            catalog,
        }
    }

    /// Declare an enumeration on `model`.
    ///
    /// Maps the attribute as a database enum when the declaration asks for
    /// it, then audits translations according to the effective validation
    /// mode. The returned registry should be stored on the model under
    /// [`EnumRegistry::member_name`].
    ///
    /// # Errors
    /// - `Error::MissingTranslation` when validation is enforced and keys are missing
    /// - any error the persistence layer returns while binding the database enum
    pub fn declare<M>(&self, model: &mut M, declaration: EnumDeclaration) -> Result<EnumRegistry>
    where
        M: EnumPersistence + ?Sized,
    {
        let definition = EnumerationDefinition::normalize(&*model, declaration);
        let registry = EnumRegistry::new(definition, &self.configuration.default_translation_scope);

        if registry.definition().db.is_enabled() {
            db::bind(model, registry.definition())?;
        }

        TranslationValidator::new(self.catalog, self.configuration).validate(registry.definition())?;

        debug!(
            "Declared {}::{} with {} values",
            registry.definition().model_name,
            registry.member_name(),
            registry.len()
        );

        Ok(registry)
    }
}

/// Declare an enumeration using the process-wide configuration.
///
/// # Example
/// ```
/// use nd_enum::{declare_enum, Catalog, EnumDeclaration, ModelSchema};
///
/// let catalog = Catalog::new();
/// let mut user = ModelSchema::new("User");
///
/// let role = declare_enum(&mut user, EnumDeclaration::new("role", ["user", "admin"]).db(true), &catalog)?;
///
/// assert_eq!(role.member_name(), "Role");
/// assert!(user.responds_to("not_admin"));
/// # Ok::<(), nd_enum::Error>(())
/// ```
pub fn declare_enum<M>(
    model: &mut M,
    declaration: EnumDeclaration,
    catalog: &dyn TranslationCatalog,
) -> Result<EnumRegistry>
where
    M: EnumPersistence + ?Sized,
{
    let configuration = configuration();
    EnumBuilder::new(&configuration, catalog).declare(model, declaration)
}
