//! Database binding for enumerations.

use crate::enumeration::{EnumerationDefinition, NamingOptions};
use crate::error::Result;
use crate::model::{EnumNaming, EnumPersistence};
use tracing::debug;

/// Translate declaration naming options into the host's `_prefix`/`_suffix` form.
pub fn host_naming(options: NamingOptions) -> EnumNaming {
    let NamingOptions { prefix, suffix } = options;
    EnumNaming { prefix, suffix }
}

/// Register the definition's attribute as a database enum on `model`.
///
/// Values are passed in declaration order; the host may derive accessor
/// names from them.
pub fn bind<M>(model: &mut M, definition: &EnumerationDefinition) -> Result<()>
where
    M: EnumPersistence + ?Sized,
{
    let naming = host_naming(definition.db.naming());
    let values = definition.value_map();

    debug!(
        "Binding {}#{} as database enum ({} values)",
        definition.model_name,
        definition.attribute,
        values.len()
    );

    model.register_enum_attribute(&definition.attribute, &values, &naming)
}
