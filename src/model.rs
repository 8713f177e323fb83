//! Persistence seam for owning models.
//!
//! [`EnumPersistence`] is what a host ORM implements to receive database
//! enums. [`ModelSchema`] is an in-memory host that follows the usual ORM
//! enum conventions: a pluralized lister, and per value a scope, a negated
//! scope, a predicate and a bang setter, all named after the value and the
//! optional prefix/suffix.

use crate::enumeration::Affix;
use crate::error::{Error, Result};
use crate::inflector;
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::debug;

/// A model that can own enumerations.
pub trait Model {
    /// Display name, e.g. `User`
    fn model_name(&self) -> &str;

    /// Table the model persists to, e.g. `users`
    fn table_name(&self) -> &str;
}

/// Host-side naming options for generated accessors.
///
/// Mirrors the ORM's `_prefix`/`_suffix` options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumNaming {
    pub prefix: Option<Affix>,
    pub suffix: Option<Affix>,
}

impl EnumNaming {
    /// Build the accessor name for one value label.
    pub fn accessor_name(&self, attribute: &str, label: &str) -> String {
        let mut name = String::new();
        if let Some(prefix) = &self.prefix {
            name.push_str(prefix.resolve(attribute));
            name.push('_');
        }
        name.push_str(&inflector::method_friendly(label));
        if let Some(suffix) = &self.suffix {
            name.push('_');
            name.push_str(suffix.resolve(attribute));
        }
        name
    }
}

/// A model that persists enumerated attributes.
pub trait EnumPersistence: Model {
    /// Register `attribute` as a database enum.
    ///
    /// `values` maps each stored identifier to its value, in declaration order.
    fn register_enum_attribute(
        &mut self,
        attribute: &str,
        values: &IndexMap<String, String>,
        naming: &EnumNaming,
    ) -> Result<()>;
}

/// In-memory model schema recording database enums and their accessors.
#[derive(Debug, Clone)]
pub struct ModelSchema {
    name: String,
    table_name: String,
    defined_enums: IndexMap<String, IndexMap<String, String>>,
    class_methods: Vec<String>,
    instance_methods: Vec<String>,
}

impl ModelSchema {
    /// Create a schema whose table name follows the model name (`User` → `users`).
    pub fn new(name: &str) -> Self {
        Self::with_table_name(name, &inflector::tableize(name))
    }

    /// Create a schema with an explicit table name.
    pub fn with_table_name(name: &str, table_name: &str) -> Self {
        Self {
            name: name.to_string(),
            table_name: table_name.to_string(),
            defined_enums: IndexMap::new(),
            class_methods: Vec::new(),
            instance_methods: Vec::new(),
        }
    }

    /// Database enums by attribute.
    pub fn defined_enums(&self) -> &IndexMap<String, IndexMap<String, String>> {
        &self.defined_enums
    }

    /// Generated class-level accessors (listers and scopes), in creation order.
    pub fn class_methods(&self) -> &[String] {
        &self.class_methods
    }

    /// Generated instance-level accessors (predicates and setters).
    pub fn instance_methods(&self) -> &[String] {
        &self.instance_methods
    }

    /// Check whether an accessor with this name was generated.
    pub fn responds_to(&self, method: &str) -> bool {
        self.class_methods.iter().any(|m| m == method)
            || self.instance_methods.iter().any(|m| m == method)
    }
}

impl Model for ModelSchema {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl EnumPersistence for ModelSchema {
    fn register_enum_attribute(
        &mut self,
        attribute: &str,
        values: &IndexMap<String, String>,
        naming: &EnumNaming,
    ) -> Result<()> {
        if self.defined_enums.contains_key(attribute) {
            return Err(Error::ConflictingEnum {
                model: self.name.clone(),
                attribute: attribute.to_string(),
            });
        }

        let conflict = |method: &str| Error::ConflictingAccessor {
            model: self.name.clone(),
            attribute: attribute.to_string(),
            method: method.to_string(),
        };

        let mut class_methods = vec![inflector::pluralize(attribute)];
        let mut instance_methods = Vec::with_capacity(values.len() * 2);
        let mut generated: HashSet<String> = class_methods.iter().cloned().collect();
        for label in values.keys() {
            let name = naming.accessor_name(attribute, label);
            // two labels can normalize to the same accessor, e.g. `on-hold` and `on_hold`
            if !generated.insert(name.clone()) {
                return Err(conflict(&name));
            }
            class_methods.push(name.clone());
            class_methods.push(format!("not_{}", name));
            instance_methods.push(format!("{}?", name));
            instance_methods.push(format!("{}!", name));
        }

        if let Some(method) = class_methods
            .iter()
            .chain(instance_methods.iter())
            .find(|method| self.responds_to(method))
        {
            return Err(conflict(method));
        }

        debug!(
            "{} registered enum '{}' with accessors {:?}",
            self.name, attribute, class_methods
        );

        self.defined_enums
            .insert(attribute.to_string(), values.clone());
        self.class_methods.extend(class_methods);
        self.instance_methods.extend(instance_methods);
        Ok(())
    }
}
