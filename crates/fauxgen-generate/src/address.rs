//! Address fields.

use fauxgen_core::{Error, Result};

use crate::catalog::{FieldGenerator, GeneratorRegistry};
use crate::faker::Faker;
use crate::params::{ParamKind, ParamMap, ParamSpec};
use crate::sampler::{ZIP_WIDTH, parse_ranges, sample_ranges};

const PII: &[&str] = &["address"];
const ZIP_PARAMS: &[ParamSpec] = &[ParamSpec::new(
    "state_abbreviation",
    ParamKind::String,
    false,
)];

pub fn full_address(faker: &mut Faker) -> Result<String> {
    faker.fetch("address.full_address")
}

pub fn street_address(faker: &mut Faker) -> Result<String> {
    faker.fetch("address.street_address")
}

pub fn street_name(faker: &mut Faker) -> Result<String> {
    faker.fetch("address.street_name")
}

pub fn building_number(faker: &mut Faker) -> Result<String> {
    faker.fetch("address.building_number")
}

pub fn secondary_address(faker: &mut Faker) -> Result<String> {
    faker.fetch("address.secondary_address")
}

pub fn city(faker: &mut Faker) -> Result<String> {
    faker.fetch("address.city")
}

pub fn state(faker: &mut Faker) -> Result<String> {
    faker.fetch("address.state")
}

pub fn state_abbr(faker: &mut Faker) -> Result<String> {
    faker.fetch("address.state_abbr")
}

/// Zip code, scoped to a state when an abbreviation is given.
///
/// The abbreviation is matched case-insensitively against
/// `address.zip_ranges.<ST>`; a blank one counts as unspecified. A state with
/// no ranges in the current locale chain is a [`Error::MissingTranslation`].
pub fn zip_code(faker: &mut Faker, state_abbreviation: Option<&str>) -> Result<String> {
    let state = state_abbreviation
        .map(str::trim)
        .filter(|state| !state.is_empty());
    let Some(state) = state else {
        return faker.fetch("address.postcode");
    };

    let state = state.to_ascii_uppercase();
    let key = format!("address.zip_ranges.{state}");
    let ranges = parse_ranges(&key, faker.resolve(&key)?.candidates(), ZIP_WIDTH)?;
    if let Some(zip) = sample_ranges(&ranges, faker.rng()) {
        return Ok(zip);
    }
    let locale = faker
        .locale()
        .unwrap_or_else(|| faker.store().default_locale())
        .to_string();
    Err(Error::missing(locale, key))
}

pub use zip_code as postcode;

pub fn country(faker: &mut Faker) -> Result<String> {
    faker.fetch("address.country")
}

pub fn country_code(faker: &mut Faker) -> Result<String> {
    faker.fetch("address.country_code")
}

pub fn default_country(faker: &mut Faker) -> Result<String> {
    faker.fetch("address.default_country")
}

pub(crate) fn register(registry: &mut GeneratorRegistry) {
    macro_rules! field {
        ($id:literal, $func:path) => {
            registry.register_generator(FieldGenerator::boxed($id, &[], PII, |faker, _| {
                $func(faker).map(Some)
            }));
        };
    }

    field!("address.full_address", full_address);
    field!("address.street_address", street_address);
    field!("address.street_name", street_name);
    field!("address.building_number", building_number);
    field!("address.secondary_address", secondary_address);
    field!("address.city", city);
    field!("address.state", state);
    field!("address.state_abbr", state_abbr);
    field!("address.country", country);
    field!("address.country_code", country_code);
    field!("address.default_country", default_country);
    registry.register_generator(FieldGenerator::boxed(
        "address.zip_code",
        ZIP_PARAMS,
        PII,
        zip_code_field,
    ));
}

fn zip_code_field(faker: &mut Faker, params: &ParamMap<'_>) -> Result<Option<String>> {
    zip_code(faker, params.get_str("state_abbreviation")).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fauxgen_core::LocaleTag;
    use fauxgen_locale::LocaleStore;

    fn en_us(seed: u64) -> Faker {
        let store = LocaleStore::builtin().expect("builtin store");
        let locale = LocaleTag::parse("en-US").expect("locale");
        Faker::seeded(store, seed).with_locale(locale)
    }

    #[test]
    fn zip_code_accepts_lowercase_state() {
        let mut faker = en_us(1);
        let zip = zip_code(&mut faker, Some(" az ")).expect("zip");
        assert!(zip.starts_with("850"), "{zip}");
        assert_eq!(zip.len(), 5);
    }

    #[test]
    fn unknown_state_is_missing_translation() {
        let mut faker = en_us(2);
        let err = zip_code(&mut faker, Some("NA")).expect_err("no such state");
        match err {
            Error::MissingTranslation { locale, key } => {
                assert_eq!(locale, "en-US");
                assert_eq!(key, "address.zip_ranges.NA");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_state_falls_back_to_postcode() {
        let mut faker = en_us(5);
        for state in ["", "   "] {
            let zip = zip_code(&mut faker, Some(state)).expect("zip");
            assert_eq!(zip.len(), 5, "{zip}");
            assert!(zip.chars().all(|c| c.is_ascii_digit()), "{zip}");
        }

        let registry = GeneratorRegistry::new();
        let params = serde_json::json!({"state_abbreviation": ""});
        let zip = registry
            .generate("address.zip_code", &mut faker, Some(&params))
            .expect("zip")
            .expect("value");
        assert_eq!(zip.len(), 5, "{zip}");
    }

    #[test]
    fn postcode_without_state_uses_locale_format() {
        let mut faker = en_us(3);
        let zip = postcode(&mut faker, None).expect("postcode");
        assert_eq!(zip.len(), 5);
        assert!(zip.chars().all(|c| c.is_ascii_digit()), "{zip}");
    }

    #[test]
    fn street_address_starts_with_building_number() {
        let mut faker = en_us(4);
        for _ in 0..20 {
            let address = street_address(&mut faker).expect("street address");
            let (number, rest) = address.split_once(' ').expect("number and street");
            assert!(number.chars().all(|c| c.is_ascii_digit()), "{address}");
            assert!(!rest.is_empty());
        }
    }
}
