use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use fauxgen_core::{DEFAULT_LOCALE, Error, LocaleDocument, LocaleTag, LocaleValue, Result};

use crate::validate::validate_store;

const BUILTIN_DOCUMENTS: &[(&str, &str)] = &[
    ("en.json", include_str!("../locales/en.json")),
    ("en-US.json", include_str!("../locales/en-US.json")),
];

#[derive(Debug, Clone)]
pub(crate) struct LocaleEntry {
    pub(crate) root: LocaleValue,
    pub(crate) fallback: Option<LocaleTag>,
}

/// Immutable translation tables keyed by locale.
#[derive(Debug, Clone)]
pub struct LocaleStore {
    locales: BTreeMap<LocaleTag, LocaleEntry>,
    default_locale: LocaleTag,
}

impl LocaleStore {
    /// Empty store with the given default locale.
    pub fn new(default_locale: LocaleTag) -> Self {
        Self {
            locales: BTreeMap::new(),
            default_locale,
        }
    }

    /// Shared store holding the builtin documents, validated on first use.
    pub fn builtin() -> Result<Arc<LocaleStore>> {
        static BUILTIN: OnceLock<Arc<LocaleStore>> = OnceLock::new();
        if let Some(store) = BUILTIN.get() {
            return Ok(Arc::clone(store));
        }

        let store = Self::from_builtin()?.validated()?;
        Ok(Arc::clone(BUILTIN.get_or_init(|| Arc::new(store))))
    }

    /// Fresh, unvalidated copy of the builtin documents.
    pub fn from_builtin() -> Result<Self> {
        let mut store = Self::new(LocaleTag::parse(DEFAULT_LOCALE)?);
        for (name, contents) in BUILTIN_DOCUMENTS {
            let document: LocaleDocument = serde_json::from_str(contents).map_err(|err| {
                Error::InvalidLocaleData(format!("builtin document {name}: {err}"))
            })?;
            store.insert_document(document)?;
        }
        Ok(store)
    }

    pub fn from_documents(
        documents: impl IntoIterator<Item = LocaleDocument>,
        default_locale: LocaleTag,
    ) -> Result<Self> {
        let mut store = Self::new(default_locale);
        for document in documents {
            store.insert_document(document)?;
        }
        Ok(store)
    }

    /// Add a document; data for an already-loaded locale is deep-merged.
    pub fn insert_document(&mut self, document: LocaleDocument) -> Result<()> {
        let tag = LocaleTag::parse(&document.locale)?;
        let fallback = document
            .fallback
            .as_deref()
            .map(LocaleTag::parse)
            .transpose()?;
        let root = LocaleValue::Table(document.data);

        match self.locales.get_mut(&tag) {
            Some(entry) => {
                entry.root.merge(root);
                if fallback.is_some() {
                    entry.fallback = fallback;
                }
                tracing::info!(event = "locale_merged", locale = %tag);
            }
            None => {
                tracing::info!(event = "locale_loaded", locale = %tag);
                self.locales.insert(tag, LocaleEntry { root, fallback });
            }
        }
        Ok(())
    }

    /// Load one JSON locale document from disk.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let contents = fs::read_to_string(path)?;
        let document: LocaleDocument = serde_json::from_str(&contents).map_err(|err| {
            Error::InvalidLocaleData(format!("invalid locale document {}: {}", path.display(), err))
        })?;
        self.insert_document(document)
    }

    /// Load every `*.json` document in `dir`, in file-name order.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            self.load_file(path)?;
        }
        tracing::info!(
            event = "locale_dir_loaded",
            dir = %dir.display(),
            documents = paths.len()
        );
        Ok(paths.len())
    }

    /// Run load-time validation and fail on any error-level issue.
    pub fn validated(self) -> Result<Self> {
        let report = validate_store(&self);
        tracing::info!(
            event = "store_validated",
            errors = report.errors.len(),
            warnings = report.warnings.len()
        );
        if let Some(issue) = report.errors.first() {
            return Err(Error::InvalidLocaleData(format!(
                "{} error(s), first: [{}] {}: {}",
                report.errors.len(),
                issue.code,
                issue.path,
                issue.message
            )));
        }
        Ok(self)
    }

    pub fn default_locale(&self) -> &LocaleTag {
        &self.default_locale
    }

    pub fn set_default_locale(&mut self, locale: LocaleTag) {
        self.default_locale = locale;
    }

    pub fn locales(&self) -> impl Iterator<Item = &LocaleTag> {
        self.locales.keys()
    }

    pub fn contains(&self, locale: &LocaleTag) -> bool {
        self.locales.contains_key(locale)
    }

    /// Look up a key in one locale only, without fallback.
    pub fn lookup_local(&self, locale: &LocaleTag, key: &str) -> Option<&LocaleValue> {
        self.locales.get(locale)?.root.get_path(key)
    }

    pub(crate) fn entry(&self, locale: &LocaleTag) -> Option<(&LocaleTag, &LocaleEntry)> {
        self.locales.get_key_value(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_has_english_locales() {
        let store = LocaleStore::builtin().expect("builtin store");
        let en = LocaleTag::parse("en").expect("tag");
        let en_us = LocaleTag::parse("en-US").expect("tag");
        assert!(store.contains(&en));
        assert!(store.contains(&en_us));
        assert_eq!(store.default_locale(), &en);
        assert!(store.lookup_local(&en_us, "phone_number.area_code").is_some());
        assert!(store.lookup_local(&en, "phone_number.area_code").is_none());
    }

    #[test]
    fn insert_document_merges_existing_locale() {
        let mut store = LocaleStore::from_builtin().expect("builtin documents");
        let overlay: LocaleDocument = serde_json::from_str(
            r#"{"locale": "en-US", "data": {"internet": {"domain_suffix": ["gov"]}}}"#,
        )
        .expect("parse overlay");
        store.insert_document(overlay).expect("merge overlay");

        let en_us = LocaleTag::parse("en-US").expect("tag");
        let suffixes = store
            .lookup_local(&en_us, "internet.domain_suffix")
            .and_then(LocaleValue::as_list)
            .expect("suffix list");
        assert_eq!(suffixes, ["gov".to_string()]);
        assert!(store.lookup_local(&en_us, "address.zip_ranges.AZ").is_some());
    }

    #[test]
    fn rejects_document_with_bad_locale_tag() {
        let document: LocaleDocument =
            serde_json::from_str(r#"{"locale": "not a tag", "data": {}}"#).expect("parse");
        let mut store = LocaleStore::new(LocaleTag::parse("en").expect("tag"));
        assert!(matches!(
            store.insert_document(document),
            Err(Error::InvalidLocale(_))
        ));
    }
}
