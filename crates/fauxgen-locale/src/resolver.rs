//! Key lookup with locale fallback.
//!
//! A lookup walks the fallback chain exactly once: the requested locale, its
//! declared fallback (or language parent), and finally the store default.
//! Each locale is visited at most once, so the walk always terminates.

use fauxgen_core::{Error, LocaleTag, LocaleValue, Result};

use crate::store::LocaleStore;

/// A resolved value and the locale that provided it.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub value: &'a LocaleValue,
    pub locale: &'a LocaleTag,
}

impl LocaleStore {
    /// Locales consulted for `locale`, most specific first.
    ///
    /// `None` means no locale is set and only the default is consulted.
    pub fn fallback_chain(&self, locale: Option<&LocaleTag>) -> Vec<LocaleTag> {
        let mut chain: Vec<LocaleTag> = Vec::new();
        let mut next = locale.cloned();

        while let Some(tag) = next.take() {
            if chain.contains(&tag) {
                break;
            }
            next = self
                .entry(&tag)
                .and_then(|(_, entry)| entry.fallback.clone())
                .or_else(|| tag.parent());
            chain.push(tag);
        }

        if !chain.contains(self.default_locale()) {
            chain.push(self.default_locale().clone());
        }
        chain
    }

    pub fn resolve(&self, locale: Option<&LocaleTag>, key: &str) -> Result<&LocaleValue> {
        self.resolve_with_origin(locale, key)
            .map(|resolved| resolved.value)
    }

    pub fn resolve_with_origin(
        &self,
        locale: Option<&LocaleTag>,
        key: &str,
    ) -> Result<Resolved<'_>> {
        for tag in self.fallback_chain(locale) {
            if let Some((tag, entry)) = self.entry(&tag)
                && let Some(value) = entry.root.get_path(key)
            {
                return Ok(Resolved { value, locale: tag });
            }
        }

        let requested = locale.unwrap_or(self.default_locale());
        tracing::debug!(event = "missing_translation", locale = %requested, key = key);
        Err(Error::missing(requested.as_str(), key))
    }
}
