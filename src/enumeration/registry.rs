//! Value registry: read access to an enumeration's ordered values.

use crate::enumeration::EnumerationDefinition;
use crate::i18n::TranslationCatalog;
use crate::inflector;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::ops::Index;
use tracing::warn;

/// Argument to [`EnumRegistry::lookup`].
///
/// Integers select by position, strings select by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKey<'a> {
    Index(i64),
    Name(&'a str),
}

impl From<usize> for LookupKey<'_> {
    fn from(index: usize) -> Self {
        LookupKey::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<i32> for LookupKey<'_> {
    fn from(index: i32) -> Self {
        LookupKey::Index(i64::from(index))
    }
}

impl From<i64> for LookupKey<'_> {
    fn from(index: i64) -> Self {
        LookupKey::Index(index)
    }
}

impl<'a> From<&'a str> for LookupKey<'a> {
    fn from(name: &'a str) -> Self {
        LookupKey::Name(name)
    }
}

impl<'a> From<&'a String> for LookupKey<'a> {
    fn from(name: &'a String) -> Self {
        LookupKey::Name(name)
    }
}

/// The lookup object for one enumeration.
///
/// Built by [`crate::EnumBuilder`]; bind it to a field named after
/// [`EnumRegistry::member_name`] on the owning model.
#[derive(Debug, Clone)]
pub struct EnumRegistry {
    definition: EnumerationDefinition,

    /// Identifier form → value, first occurrence wins
    by_name: HashMap<String, String>,

    /// Uppercase alias → value
    constants: IndexMap<String, String>,

    /// Scope used by `translate`
    default_scope: String,
}

impl EnumRegistry {
    pub fn new(definition: EnumerationDefinition, default_scope: &str) -> Self {
        let mut by_name = HashMap::with_capacity(definition.values.len());
        let mut constants = IndexMap::with_capacity(definition.values.len());

        for value in &definition.values {
            if by_name.contains_key(value) {
                warn!(
                    "{}#{} declares '{}' more than once; name lookups return the first",
                    definition.model_name, definition.attribute, value
                );
                continue;
            }
            by_name.insert(value.clone(), value.clone());

            let constant = inflector::constant_name(value);
            if let Some(existing) = constants.get(&constant) {
                warn!(
                    "{}#{} values '{}' and '{}' share the constant {}; keeping the first",
                    definition.model_name, definition.attribute, existing, value, constant
                );
                continue;
            }
            constants.insert(constant, value.clone());
        }

        Self {
            definition,
            by_name,
            constants,
            default_scope: default_scope.to_string(),
        }
    }

    /// Get the definition this registry was built from.
    pub fn definition(&self) -> &EnumerationDefinition {
        &self.definition
    }

    /// Name to bind the registry under, e.g. `Role` for `role`.
    pub fn member_name(&self) -> String {
        inflector::camelize(&self.definition.attribute)
    }

    /// All values in declaration order.
    pub fn all(&self) -> &[String] {
        &self.definition.values
    }

    pub fn len(&self) -> usize {
        self.definition.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definition.values.is_empty()
    }

    /// Value at `index`, `None` when out of range.
    pub fn at(&self, index: usize) -> Option<&str> {
        self.definition.values.get(index).map(String::as_str)
    }

    /// Look a value up by position or by name.
    ///
    /// ```
    /// # use nd_enum::{EnumBuilder, EnumDeclaration, Configuration, ModelSchema, Catalog};
    /// # let (config, catalog) = (Configuration::default(), Catalog::new());
    /// # let mut user = ModelSchema::new("User");
    /// let role = EnumBuilder::new(&config, &catalog)
    ///     .declare(&mut user, EnumDeclaration::new("role", ["user", "admin"]))?;
    ///
    /// assert_eq!(role.lookup(0), Some("user"));
    /// assert_eq!(role.lookup("admin"), Some("admin"));
    /// assert_eq!(role.lookup("guest"), None);
    /// # Ok::<(), nd_enum::Error>(())
    /// ```
    pub fn lookup<'k>(&self, key: impl Into<LookupKey<'k>>) -> Option<&str> {
        match key.into() {
            LookupKey::Index(index) => usize::try_from(index).ok().and_then(|i| self.at(i)),
            LookupKey::Name(name) => self.by_name.get(name).map(String::as_str),
        }
    }

    pub fn first(&self) -> Option<&str> {
        self.definition.values.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.definition.values.last().map(String::as_str)
    }

    /// Position of `value`, if declared.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.definition.values.iter().position(|v| v == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.by_name.contains_key(value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.definition.values.iter()
    }

    /// Identifier → value map, in declaration order.
    pub fn to_map(&self) -> IndexMap<String, String> {
        self.definition.value_map()
    }

    /// Uppercase aliases (`ADMIN` → `admin`).
    pub fn constants(&self) -> &IndexMap<String, String> {
        &self.constants
    }

    pub fn constant(&self, name: &str) -> Option<&str> {
        self.constants.get(name).map(String::as_str)
    }

    /// Scope used when none is given to `translate`.
    pub fn default_scope(&self) -> &str {
        &self.default_scope
    }

    /// Dotted scope for translations: `<table>.<attribute>.<scope>`.
    pub fn translation_scope(&self, scope: &str) -> String {
        format!("{}.{}", self.definition.translation_base_key(), scope)
    }

    /// Translate `key` under the default scope.
    pub fn translate(&self, catalog: &dyn TranslationCatalog, key: &str) -> String {
        self.translate_scoped(catalog, key, &self.default_scope)
    }

    /// Translate `key` under an explicit scope.
    pub fn translate_scoped(&self, catalog: &dyn TranslationCatalog, key: &str, scope: &str) -> String {
        catalog.translate(key, &self.translation_scope(scope))
    }
}

impl Index<usize> for EnumRegistry {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.definition.values[index]
    }
}

impl<'a> IntoIterator for &'a EnumRegistry {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumeration::EnumDeclaration;
    use crate::i18n::Catalog;
    use crate::model::ModelSchema;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use tracing_test::traced_test;

    fn registry(values: &[&str]) -> EnumRegistry {
        let model = ModelSchema::new("User");
        let definition = EnumerationDefinition::normalize(
            &model,
            EnumDeclaration::new("role", values.iter().copied()),
        );
        EnumRegistry::new(definition, "base")
    }

    /// Catalog double recording every translate call
    #[derive(Default)]
    struct RecordingCatalog {
        calls: RefCell<Vec<(String, String)>>,
    }

    impl TranslationCatalog for RecordingCatalog {
        fn translate(&self, key: &str, scope: &str) -> String {
            self.calls
                .borrow_mut()
                .push((key.to_string(), scope.to_string()));
            format!("{}:{}", scope, key)
        }

        fn key_exists(&self, _key: &str, _locale: &str) -> bool {
            false
        }

        fn available_locales(&self) -> Vec<String> {
            vec!["en".to_string()]
        }

        fn lookup_raw(&self, _key: &str, _locale: &str) -> serde_json::Map<String, serde_json::Value> {
            serde_json::Map::new()
        }
    }

    #[test]
    fn test_all_len_first_last() {
        let role = registry(&["user", "admin"]);
        assert_eq!(role.all(), ["user", "admin"]);
        assert_eq!(role.len(), 2);
        assert!(!role.is_empty());
        assert_eq!(role.first(), Some("user"));
        assert_eq!(role.last(), Some("admin"));
    }

    #[test]
    fn test_empty_registry() {
        let empty = registry(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
        assert_eq!(empty.lookup(0), None);
    }

    #[test]
    fn test_lookup_dispatches_on_key_type() {
        let role = registry(&["user", "admin"]);
        assert_eq!(role.lookup(0), Some("user"));
        assert_eq!(role.lookup(1), Some("admin"));
        assert_eq!(role.lookup("user"), Some("user"));
        assert_eq!(role.lookup(&"admin".to_string()), Some("admin"));
    }

    #[test]
    fn test_lookup_out_of_range_and_unknown() {
        let role = registry(&["user", "admin"]);
        assert_eq!(role.lookup(2), None);
        assert_eq!(role.lookup(-1), None);
        assert_eq!(role.lookup("guest"), None);
        assert_eq!(role.lookup("User"), None);
        assert_eq!(role.at(5), None);
    }

    #[test]
    fn test_index_operator() {
        let role = registry(&["user", "admin"]);
        assert_eq!(&role[1], "admin");
    }

    #[test]
    #[should_panic]
    fn test_index_operator_out_of_range_panics() {
        let role = registry(&["user"]);
        let _ = &role[3];
    }

    #[test]
    fn test_iteration_adapters() {
        let role = registry(&["user", "admin"]);
        let mapped: Vec<String> = role.iter().map(|v| format!("value-{}", v)).collect();
        assert_eq!(mapped, vec!["value-user", "value-admin"]);

        let mut seen = Vec::new();
        for value in &role {
            seen.push(value.as_str());
        }
        assert_eq!(seen, vec!["user", "admin"]);
    }

    #[test]
    fn test_to_map_and_position() {
        let role = registry(&["user", "admin"]);
        let map = role.to_map();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["user", "admin"]);
        assert_eq!(map["admin"], "admin");
        assert_eq!(role.position("admin"), Some(1));
        assert!(role.contains("user"));
    }

    #[test]
    fn test_member_name_and_constants() {
        let role = registry(&["user", "admin"]);
        assert_eq!(role.member_name(), "Role");
        assert_eq!(role.constant("ADMIN"), Some("admin"));
        assert_eq!(role.constant("USER"), Some("user"));
        assert_eq!(
            role.constants().keys().collect::<Vec<_>>(),
            vec!["USER", "ADMIN"]
        );
    }

    #[test]
    fn test_duplicate_values_keep_first_for_lookup() {
        let role = registry(&["user", "admin", "user"]);
        assert_eq!(role.len(), 3);
        assert_eq!(role.lookup("user"), Some("user"));
        assert_eq!(role.constants().len(), 2);
    }

    #[test]
    #[traced_test]
    fn test_values_sharing_a_constant_keep_first_and_warn() {
        let role = registry(&["admin", "Admin"]);
        assert_eq!(role.len(), 2);
        assert_eq!(role.lookup("Admin"), Some("Admin"));
        assert_eq!(role.constant("ADMIN"), Some("admin"));
        assert_eq!(role.constants().len(), 1);
        assert!(logs_contain("share the constant ADMIN"));
    }

    #[test]
    fn test_translate_uses_default_scope() {
        let role = registry(&["user", "admin"]);
        let catalog = RecordingCatalog::default();

        role.translate(&catalog, "user");
        role.translate_scoped(&catalog, "user", "custom");

        assert_eq!(
            *catalog.calls.borrow(),
            vec![
                ("user".to_string(), "users.role.base".to_string()),
                ("user".to_string(), "users.role.custom".to_string()),
            ]
        );
    }

    #[test]
    fn test_translate_with_configured_default_scope() {
        let model = ModelSchema::new("User");
        let definition =
            EnumerationDefinition::normalize(&model, EnumDeclaration::new("role", ["user"]));
        let role = EnumRegistry::new(definition, "foobar");
        let catalog = RecordingCatalog::default();

        role.translate(&catalog, "user");

        assert_eq!(catalog.calls.borrow()[0].1, "users.role.foobar");
    }

    #[test]
    fn test_translate_returns_catalog_placeholder() {
        let role = registry(&["user"]);
        let catalog = Catalog::new();
        assert_eq!(
            role.translate(&catalog, "user"),
            "translation missing: en.users.role.base.user"
        );
    }

    proptest! {
        #[test]
        fn prop_registry_mirrors_values(
            values in prop::collection::hash_set("[a-z]{1,8}", 0..12)
                .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        ) {
            let refs: Vec<&str> = values.iter().map(String::as_str).collect();
            let role = registry(&refs);

            prop_assert_eq!(role.all(), values.as_slice());
            prop_assert_eq!(role.len(), values.len());
            prop_assert_eq!(role.is_empty(), values.is_empty());
            prop_assert_eq!(role.first(), values.first().map(String::as_str));
            prop_assert_eq!(role.last(), values.last().map(String::as_str));
            prop_assert_eq!(role.at(values.len()), None);

            for (i, value) in values.iter().enumerate() {
                prop_assert_eq!(role.at(i), Some(value.as_str()));
                prop_assert_eq!(role.lookup(i), Some(value.as_str()));
                prop_assert_eq!(role.lookup(value.as_str()), Some(value.as_str()));
            }

            let map = role.to_map();
            prop_assert_eq!(map.keys().cloned().collect::<Vec<_>>(), values.clone());
            prop_assert_eq!(map.values().cloned().collect::<Vec<_>>(), values);
        }

        #[test]
        fn prop_unknown_names_miss(name in "[A-Z]{1,8}") {
            let role = registry(&["user", "admin"]);
            prop_assert_eq!(role.lookup(name.as_str()), None);
        }
    }
}
