//! Template expansion against the locale store.
//!
//! Expansion is a pure function of the template, the store and the RNG
//! stream. Reference cycles are rejected when the store is validated;
//! [`MAX_DEPTH`] bounds recursion for stores that skipped validation.

use fauxgen_core::template::{Token, namespace_of, qualify, tokenize};
use fauxgen_core::{Error, LocaleTag, LocaleValue, Result};
use fauxgen_locale::LocaleStore;
use rand::{Rng, RngCore};

/// Deepest chain of `#{...}` references followed before giving up.
pub const MAX_DEPTH: usize = 16;

/// Resolves and expands templates for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Expander<'a> {
    store: &'a LocaleStore,
    locale: Option<&'a LocaleTag>,
}

impl<'a> Expander<'a> {
    pub fn new(store: &'a LocaleStore, locale: Option<&'a LocaleTag>) -> Self {
        Self { store, locale }
    }

    pub fn resolve(&self, key: &str) -> Result<&'a LocaleValue> {
        self.store.resolve(self.locale, key)
    }

    /// Resolve `key`, pick one candidate and expand it.
    pub fn fetch(&self, key: &str, rng: &mut dyn RngCore) -> Result<String> {
        self.fetch_at(key, rng, 0)
    }

    fn fetch_at(&self, key: &str, rng: &mut dyn RngCore, depth: usize) -> Result<String> {
        if depth > MAX_DEPTH {
            return Err(Error::TemplateCycle {
                key: key.to_string(),
            });
        }
        let value = self.resolve(key)?;
        let template = pick(value, key, rng)?;
        self.expand_at(template, namespace_of(key), rng, depth)
    }

    fn expand_at(
        &self,
        template: &str,
        namespace: &str,
        rng: &mut dyn RngCore,
        depth: usize,
    ) -> Result<String> {
        let mut out = String::with_capacity(template.len());
        for token in tokenize(template)? {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Digit => out.push(random_digit(rng)),
                Token::Letter => out.push(random_letter(rng)),
                Token::Reference(reference) => {
                    let key = qualify(reference, namespace);
                    out.push_str(&self.fetch_at(&key, rng, depth + 1)?);
                }
            }
        }
        Ok(out)
    }
}

/// Pick one candidate of a leaf uniformly.
pub fn pick<'v>(value: &'v LocaleValue, key: &str, rng: &mut dyn RngCore) -> Result<&'v str> {
    match value {
        LocaleValue::Text(text) => Ok(text.as_str()),
        LocaleValue::List(values) if values.is_empty() => Err(Error::InvalidTemplate(format!(
            "'{key}' has no candidates"
        ))),
        LocaleValue::List(values) => Ok(values[rng.random_range(0..values.len())].as_str()),
        LocaleValue::Table(_) => Err(Error::InvalidTemplate(format!(
            "'{key}' is a table, expected text or list"
        ))),
    }
}

/// Replace `#` and `?` placeholders; references are not allowed.
pub fn bothify(template: &str, rng: &mut dyn RngCore) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    for token in tokenize(template)? {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Digit => out.push(random_digit(rng)),
            Token::Letter => out.push(random_letter(rng)),
            Token::Reference(reference) => {
                return Err(Error::InvalidTemplate(format!(
                    "unexpected reference '{reference}' in '{template}'"
                )));
            }
        }
    }
    Ok(out)
}

pub(crate) fn random_digit(rng: &mut dyn RngCore) -> char {
    char::from(b'0' + rng.random_range(0..10_u8))
}

pub(crate) fn random_letter(rng: &mut dyn RngCore) -> char {
    char::from(b'A' + rng.random_range(0..26_u8))
}
