//! Phone numbers. Codes come from locale data that is NANP-checked at load,
//! so every formatted number is valid without retrying.

use fauxgen_core::{Error, Result};

use crate::catalog::{FieldGenerator, GeneratorRegistry};
use crate::faker::Faker;
use crate::params::{ParamKind, ParamMap, ParamSpec};
use crate::sampler::{DEFAULT_SUBSCRIBER_LENGTH, MAX_SUBSCRIBER_LENGTH, numeric_string};

const PII: &[&str] = &["phone"];
const SUBSCRIBER_PARAMS: &[ParamSpec] = &[ParamSpec::new("length", ParamKind::UInt, false)];

/// Three digit area code, or `None` when the locale chain has none.
pub fn area_code(faker: &mut Faker) -> Option<String> {
    optional(faker, "phone_number.area_code")
}

/// Three digit exchange code, or `None` when the locale chain has none.
pub fn exchange_code(faker: &mut Faker) -> Option<String> {
    optional(faker, "phone_number.exchange_code")
}

/// Exactly `length` random digits, four when unspecified.
pub fn subscriber_number(faker: &mut Faker, length: Option<usize>) -> String {
    numeric_string(length.unwrap_or(DEFAULT_SUBSCRIBER_LENGTH), faker.rng())
}

pub use subscriber_number as extension;

pub fn phone_number(faker: &mut Faker) -> Result<String> {
    faker.fetch("phone_number.formats")
}

pub fn cell_phone(faker: &mut Faker) -> Result<String> {
    faker.fetch("cell_phone.formats")
}

fn optional(faker: &mut Faker, key: &str) -> Option<String> {
    match faker.fetch(key) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(key = key, error = %err, "phone code unavailable");
            None
        }
    }
}

pub(crate) fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(FieldGenerator::boxed(
        "phone_number.area_code",
        &[],
        PII,
        |faker, _| Ok(area_code(faker)),
    ));
    registry.register_generator(FieldGenerator::boxed(
        "phone_number.exchange_code",
        &[],
        PII,
        |faker, _| Ok(exchange_code(faker)),
    ));
    registry.register_generator(FieldGenerator::boxed(
        "phone_number.subscriber_number",
        SUBSCRIBER_PARAMS,
        PII,
        subscriber_field,
    ));
    registry.register_generator(FieldGenerator::boxed(
        "phone_number.extension",
        SUBSCRIBER_PARAMS,
        PII,
        subscriber_field,
    ));
    registry.register_generator(FieldGenerator::boxed(
        "phone_number.phone_number",
        &[],
        PII,
        |faker, _| phone_number(faker).map(Some),
    ));
    registry.register_generator(FieldGenerator::boxed(
        "phone_number.cell_phone",
        &[],
        PII,
        |faker, _| cell_phone(faker).map(Some),
    ));
}

fn subscriber_field(faker: &mut Faker, params: &ParamMap<'_>) -> Result<Option<String>> {
    let length = params.get_usize("length");
    if length.is_some_and(|length| length > MAX_SUBSCRIBER_LENGTH) {
        return Err(Error::InvalidParams(format!(
            "phone_number.subscriber_number: length must be at most {MAX_SUBSCRIBER_LENGTH}"
        )));
    }
    Ok(Some(subscriber_number(faker, length)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fauxgen_core::LocaleTag;
    use fauxgen_locale::LocaleStore;

    fn faker(seed: u64) -> Faker {
        Faker::seeded(LocaleStore::builtin().expect("builtin store"), seed)
    }

    #[test]
    fn zero_length_subscriber_is_empty() {
        let mut faker = faker(5);
        assert_eq!(subscriber_number(&mut faker, Some(0)), "");
    }

    #[test]
    fn catalog_rejects_oversized_length() {
        let registry = GeneratorRegistry::new();
        let mut faker = faker(8);
        let params = serde_json::json!({"length": u64::MAX});
        assert!(matches!(
            registry.generate("phone_number.extension", &mut faker, Some(&params)),
            Err(Error::InvalidParams(_))
        ));

        let params = serde_json::json!({"length": MAX_SUBSCRIBER_LENGTH});
        let number = registry
            .generate("phone_number.extension", &mut faker, Some(&params))
            .expect("extension")
            .expect("value");
        assert_eq!(number.len(), MAX_SUBSCRIBER_LENGTH);
    }

    #[test]
    fn codes_follow_locale() {
        let mut faker = faker(6);
        assert_eq!(area_code(&mut faker), None);

        faker.set_locale(LocaleTag::parse("en-US").expect("locale"));
        let code = exchange_code(&mut faker).expect("exchange code");
        assert_eq!(code.len(), 3);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn generic_formats_without_region() {
        let mut faker = faker(7);
        let number = phone_number(&mut faker).expect("phone number");
        assert!(number.chars().any(|c| c.is_ascii_digit()), "{number}");
        assert!(!number.contains('#'), "{number}");
    }
}
