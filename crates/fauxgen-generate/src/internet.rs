//! Domains and email addresses.

use fauxgen_core::Result;

use crate::catalog::{FieldGenerator, GeneratorRegistry};
use crate::faker::Faker;
use crate::name;

pub fn domain_suffix(faker: &mut Faker) -> Result<String> {
    faker.fetch("internet.domain_suffix")
}

/// Lowercase domain label built from locale words.
pub fn domain_word(faker: &mut Faker) -> Result<String> {
    let word = faker.fetch("internet.domain_word")?;
    Ok(sanitize(&word, '-'))
}

pub fn domain_name(faker: &mut Faker) -> Result<String> {
    let word = domain_word(faker)?;
    let suffix = domain_suffix(faker)?;
    Ok(format!("{word}.{suffix}"))
}

/// Email under a reserved example domain.
pub fn safe_email(faker: &mut Faker) -> Result<String> {
    let user = user_name(faker)?;
    let domain = faker.fetch("internet.safe_domain")?;
    Ok(format!("{user}@{domain}"))
}

/// Email under a free mail provider.
pub fn free_email(faker: &mut Faker) -> Result<String> {
    let user = user_name(faker)?;
    let domain = faker.fetch("internet.free_email")?;
    Ok(format!("{user}@{domain}"))
}

fn user_name(faker: &mut Faker) -> Result<String> {
    let first = name::first_name(faker)?;
    let last = name::last_name(faker)?;
    Ok(format!("{}.{}", sanitize(&first, '_'), sanitize(&last, '_')))
}

/// Keep ASCII alphanumerics, lowercased; anything else becomes `joiner`.
fn sanitize(raw: &str, joiner: char) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with(joiner) {
            out.push(joiner);
        }
    }
    while out.ends_with(joiner) {
        out.pop();
    }
    out
}

pub(crate) fn register(registry: &mut GeneratorRegistry) {
    macro_rules! field {
        ($id:literal, $func:path) => {
            registry.register_generator(FieldGenerator::boxed($id, &[], &[], |faker, _| {
                $func(faker).map(Some)
            }));
        };
    }

    field!("internet.domain_suffix", domain_suffix);
    field!("internet.domain_word", domain_word);
    field!("internet.domain_name", domain_name);
    registry.register_generator(FieldGenerator::boxed(
        "internet.safe_email",
        &[],
        &["email"],
        |faker, _| safe_email(faker).map(Some),
    ));
    registry.register_generator(FieldGenerator::boxed(
        "internet.free_email",
        &[],
        &["email"],
        |faker, _| free_email(faker).map(Some),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use fauxgen_locale::LocaleStore;
    use regex::Regex;

    #[test]
    fn sanitize_collapses_separators() {
        assert_eq!(sanitize("O'Connor  Smith", '-'), "o-connor-smith");
        assert_eq!(sanitize("--Ann--", '_'), "ann");
        assert_eq!(sanitize("", '-'), "");
    }

    #[test]
    fn emails_are_well_formed() {
        let store = LocaleStore::builtin().expect("builtin store");
        let mut faker = Faker::seeded(store, 9);
        let email = Regex::new(r"^[a-z0-9_]+\.[a-z0-9_]+@[a-z0-9.-]+\.[a-z]+$").expect("regex");
        for _ in 0..50 {
            let safe = safe_email(&mut faker).expect("safe email");
            assert!(email.is_match(&safe), "{safe}");
            assert!(safe.contains("@example."), "{safe}");
            let free = free_email(&mut faker).expect("free email");
            assert!(email.is_match(&free), "{free}");
        }
    }

    #[test]
    fn domain_name_has_suffix() {
        let store = LocaleStore::builtin().expect("builtin store");
        let mut faker = Faker::seeded(store, 10);
        let domain = domain_name(&mut faker).expect("domain");
        let (word, suffix) = domain.rsplit_once('.').expect("dot");
        assert!(!word.is_empty());
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase()), "{domain}");
    }
}
