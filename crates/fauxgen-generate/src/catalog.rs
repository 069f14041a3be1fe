//! Generator registry keyed by stable ids (`address.zip_code`, ...).

use std::collections::BTreeMap;

use fauxgen_core::{Error, Result};
use serde_json::Value;

use crate::faker::Faker;
use crate::params::{ParamMap, ParamSpec, validate_params};
use crate::{address, id_number, internet, name, phone_number};

/// A named field generator.
///
/// `Ok(None)` is an absent value, not a failure (phone codes with no
/// locale data).
pub trait Generator: Send + Sync {
    fn id(&self) -> &'static str;

    fn params(&self) -> &'static [ParamSpec] {
        &[]
    }

    fn pii_tags(&self) -> &'static [&'static str] {
        &[]
    }

    fn generate(&self, faker: &mut Faker, params: &ParamMap<'_>) -> Result<Option<String>>;
}

pub(crate) type FieldFn = fn(&mut Faker, &ParamMap<'_>) -> Result<Option<String>>;

/// Generator backed by a category function.
pub(crate) struct FieldGenerator {
    pub(crate) id: &'static str,
    pub(crate) params: &'static [ParamSpec],
    pub(crate) pii_tags: &'static [&'static str],
    pub(crate) run: FieldFn,
}

impl FieldGenerator {
    pub(crate) fn boxed(
        id: &'static str,
        params: &'static [ParamSpec],
        pii_tags: &'static [&'static str],
        run: FieldFn,
    ) -> Box<dyn Generator> {
        Box::new(Self {
            id,
            params,
            pii_tags,
            run,
        })
    }
}

impl Generator for FieldGenerator {
    fn id(&self) -> &'static str {
        self.id
    }

    fn params(&self) -> &'static [ParamSpec] {
        self.params
    }

    fn pii_tags(&self) -> &'static [&'static str] {
        self.pii_tags
    }

    fn generate(&self, faker: &mut Faker, params: &ParamMap<'_>) -> Result<Option<String>> {
        (self.run)(faker, params)
    }
}

pub struct GeneratorRegistry {
    generators: BTreeMap<&'static str, Box<dyn Generator>>,
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorRegistry {
    /// Registry holding every builtin category.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        address::register(&mut registry);
        phone_number::register(&mut registry);
        id_number::register(&mut registry);
        internet::register(&mut registry);
        name::register(&mut registry);
        registry
    }

    pub fn empty() -> Self {
        Self {
            generators: BTreeMap::new(),
        }
    }

    pub fn register_generator(&mut self, generator: Box<dyn Generator>) {
        self.generators.insert(generator.id(), generator);
    }

    pub fn generator(&self, id: &str) -> Option<&dyn Generator> {
        self.generators.get(id).map(|generator| generator.as_ref())
    }

    /// Registered ids in sorted order.
    pub fn generator_ids(&self) -> Vec<&'static str> {
        self.generators.keys().copied().collect()
    }

    pub fn generate(
        &self,
        id: &str,
        faker: &mut Faker,
        params: Option<&Value>,
    ) -> Result<Option<String>> {
        let generator = self
            .generator(id)
            .ok_or_else(|| Error::UnknownGenerator(id.to_string()))?;
        let params = validate_params(params, generator.params(), generator.id())?;
        tracing::trace!(event = "generator_invoked", id = generator.id());
        generator.generate(faker, &params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sorted_and_unique() {
        let registry = GeneratorRegistry::new();
        let ids = registry.generator_ids();
        assert!(!ids.is_empty());

        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn ids_are_namespaced_by_category() {
        let registry = GeneratorRegistry::new();
        for id in registry.generator_ids() {
            let (category, field) = id.split_once('.').expect("category.field");
            assert!(
                ["address", "phone_number", "id_number", "internet", "name"].contains(&category),
                "{id}"
            );
            assert!(!field.is_empty());
        }
    }
}
