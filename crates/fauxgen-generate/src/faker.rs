//! Generation context: locale store, current locale and RNG.
//!
//! The current locale is a field of the context rather than process-wide
//! state, so independent contexts never observe each other's locale.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use fauxgen_core::{LocaleTag, LocaleValue, Result};
use fauxgen_locale::LocaleStore;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::template::Expander;

pub struct Faker {
    store: Arc<LocaleStore>,
    locale: Option<LocaleTag>,
    rng: ChaCha8Rng,
}

impl Faker {
    /// Context seeded from the thread RNG, with no locale set.
    pub fn new(store: Arc<LocaleStore>) -> Self {
        Self::with_rng(store, ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// Deterministic context: the same seed yields the same values.
    pub fn seeded(store: Arc<LocaleStore>, seed: u64) -> Self {
        Self::with_rng(store, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng(store: Arc<LocaleStore>, rng: ChaCha8Rng) -> Self {
        Self {
            store,
            locale: None,
            rng,
        }
    }

    pub fn with_locale(mut self, locale: LocaleTag) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn locale(&self) -> Option<&LocaleTag> {
        self.locale.as_ref()
    }

    pub fn set_locale(&mut self, locale: LocaleTag) {
        self.locale = Some(locale);
    }

    /// Unset the locale, returning the previous one.
    pub fn clear_locale(&mut self) -> Option<LocaleTag> {
        self.locale.take()
    }

    /// Override the locale until the returned guard is dropped.
    #[must_use = "dropping this guard restores the previous locale"]
    pub fn scoped_locale(&mut self, locale: Option<LocaleTag>) -> LocaleGuard<'_> {
        let previous = std::mem::replace(&mut self.locale, locale);
        LocaleGuard {
            faker: self,
            previous,
        }
    }

    pub fn store(&self) -> &LocaleStore {
        &self.store
    }

    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut self.rng
    }

    /// Resolve a key under the current locale and its fallbacks.
    pub fn resolve(&self, key: &str) -> Result<&LocaleValue> {
        self.store.resolve(self.locale.as_ref(), key)
    }

    /// Resolve a key, pick a candidate and expand it.
    pub fn fetch(&mut self, key: &str) -> Result<String> {
        let (expander, rng) = self.parts();
        expander.fetch(key, rng)
    }

    pub(crate) fn parts(&mut self) -> (Expander<'_>, &mut dyn RngCore) {
        let Faker { store, locale, rng } = self;
        (Expander::new(&**store, locale.as_ref()), rng as &mut dyn RngCore)
    }
}

impl std::fmt::Debug for Faker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Faker")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

/// Scoped locale override. Dropping it restores the prior locale.
#[must_use = "dropping this guard restores the previous locale"]
pub struct LocaleGuard<'a> {
    faker: &'a mut Faker,
    previous: Option<LocaleTag>,
}

impl Deref for LocaleGuard<'_> {
    type Target = Faker;

    fn deref(&self) -> &Faker {
        self.faker
    }
}

impl DerefMut for LocaleGuard<'_> {
    fn deref_mut(&mut self) -> &mut Faker {
        self.faker
    }
}

impl Drop for LocaleGuard<'_> {
    fn drop(&mut self) {
        self.faker.locale = self.previous.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(raw: &str) -> LocaleTag {
        LocaleTag::parse(raw).expect("valid tag")
    }

    fn faker() -> Faker {
        Faker::seeded(LocaleStore::builtin().expect("builtin store"), 3)
    }

    #[test]
    fn set_and_clear_locale() {
        let mut faker = faker();
        assert!(faker.locale().is_none());
        faker.set_locale(tag("en-US"));
        assert_eq!(faker.locale(), Some(&tag("en-US")));
        assert_eq!(faker.clear_locale(), Some(tag("en-US")));
        assert!(faker.locale().is_none());
    }

    #[test]
    fn scoped_locale_restores_previous_on_drop() {
        let mut faker = faker().with_locale(tag("en"));
        {
            let mut scoped = faker.scoped_locale(Some(tag("en-US")));
            assert_eq!(scoped.locale(), Some(&tag("en-US")));
            assert!(scoped.fetch("phone_number.area_code").is_ok());
        }
        assert_eq!(faker.locale(), Some(&tag("en")));

        {
            let scoped = faker.scoped_locale(None);
            assert!(scoped.locale().is_none());
        }
        assert_eq!(faker.locale(), Some(&tag("en")));
    }

    #[test]
    fn seeded_contexts_agree() {
        let mut first = faker().with_locale(tag("en-US"));
        let mut second = faker().with_locale(tag("en-US"));
        for _ in 0..20 {
            assert_eq!(
                first.fetch("address.full_address").expect("address"),
                second.fetch("address.full_address").expect("address")
            );
        }
    }
}
