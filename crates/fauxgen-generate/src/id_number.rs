//! US social security numbers.

use std::sync::LazyLock;

use fauxgen_core::Result;
use regex::Regex;

use crate::catalog::{FieldGenerator, GeneratorRegistry};
use crate::faker::Faker;
use crate::sampler;
use crate::template::{bothify, pick};

const PII: &[&str] = &["ssn"];
const INVALID_KEY: &str = "id_number.invalid";

/// Patterns the SSA never issues.
pub const INVALID_SSN: &[&str] = &[
    r"0{3}-\d{2}-\d{4}",
    r"\d{3}-0{2}-\d{4}",
    r"\d{3}-\d{2}-0{4}",
    r"666-\d{2}-\d{4}",
    r"9\d{2}-\d{2}-\d{4}",
];

static INVALID_SSN_REGEX: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    INVALID_SSN
        .iter()
        .filter_map(|pattern| Regex::new(&format!("^{pattern}$")).ok())
        .collect()
});

/// True when `ssn` matches any reserved pattern.
pub fn is_invalid_ssn(ssn: &str) -> bool {
    INVALID_SSN_REGEX.iter().any(|regex| regex.is_match(ssn))
}

/// A well-formed SSN outside every reserved pattern.
pub fn valid(faker: &mut Faker) -> String {
    ssn_valid(faker)
}

pub fn ssn_valid(faker: &mut Faker) -> String {
    sampler::ssn_valid(faker.rng())
}

/// An SSN drawn from the locale's reserved-pattern templates.
///
/// The templates are placeholder-only; a reference in one is an
/// [`Error::InvalidTemplate`](fauxgen_core::Error::InvalidTemplate).
pub fn invalid(faker: &mut Faker) -> Result<String> {
    let (expander, rng) = faker.parts();
    let template = pick(expander.resolve(INVALID_KEY)?, INVALID_KEY, rng)?;
    bothify(template, rng)
}

pub(crate) fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(FieldGenerator::boxed(
        "id_number.valid",
        &[],
        PII,
        |faker, _| Ok(Some(valid(faker))),
    ));
    registry.register_generator(FieldGenerator::boxed(
        "id_number.ssn_valid",
        &[],
        PII,
        |faker, _| Ok(Some(ssn_valid(faker))),
    ));
    registry.register_generator(FieldGenerator::boxed(
        "id_number.invalid",
        &[],
        PII,
        |faker, _| invalid(faker).map(Some),
    ));
}
