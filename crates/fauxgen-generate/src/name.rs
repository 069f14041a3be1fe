//! Person names. Other categories reference these keys from templates.

use fauxgen_core::Result;

use crate::catalog::{FieldGenerator, GeneratorRegistry};
use crate::faker::Faker;

const PII: &[&str] = &["name"];

pub fn first_name(faker: &mut Faker) -> Result<String> {
    faker.fetch("name.first_name")
}

pub fn last_name(faker: &mut Faker) -> Result<String> {
    faker.fetch("name.last_name")
}

/// Full name, sometimes with a prefix or suffix.
pub fn name(faker: &mut Faker) -> Result<String> {
    faker.fetch("name.name")
}

pub fn prefix(faker: &mut Faker) -> Result<String> {
    faker.fetch("name.prefix")
}

pub fn suffix(faker: &mut Faker) -> Result<String> {
    faker.fetch("name.suffix")
}

pub(crate) fn register(registry: &mut GeneratorRegistry) {
    macro_rules! field {
        ($id:literal, $func:path) => {
            registry.register_generator(FieldGenerator::boxed($id, &[], PII, |faker, _| {
                $func(faker).map(Some)
            }));
        };
    }

    field!("name.first_name", first_name);
    field!("name.last_name", last_name);
    field!("name.name", name);
    field!("name.prefix", prefix);
    field!("name.suffix", suffix);
}
