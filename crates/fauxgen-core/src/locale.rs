use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Normalized locale identifier (e.g. `en`, `en-US`).
///
/// Accepts `_` as a separator and drops encoding/modifier suffixes, so
/// `en_US.UTF-8` parses to `en-US`. The language subtag is lower-cased and
/// the region subtag upper-cased.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleTag {
    tag: String,
    language_len: usize,
}

impl LocaleTag {
    pub fn parse(value: &str) -> Result<Self> {
        let raw = value.trim();
        let raw = raw.split('@').next().unwrap_or(raw);
        let raw = raw.split('.').next().unwrap_or(raw);
        if raw.is_empty() {
            return Err(Error::InvalidLocale(value.to_string()));
        }

        let normalized = raw.replace('_', "-");
        let mut parts = normalized.split('-');
        let language = parts.next().unwrap_or_default();
        let region = parts.next();
        if parts.next().is_some() {
            return Err(Error::InvalidLocale(value.to_string()));
        }

        if !(2..=3).contains(&language.len()) || !language.chars().all(|ch| ch.is_ascii_alphabetic())
        {
            return Err(Error::InvalidLocale(value.to_string()));
        }
        let language = language.to_ascii_lowercase();

        let tag = match region {
            None => language.clone(),
            Some(region) => {
                let alpha = region.len() == 2 && region.chars().all(|ch| ch.is_ascii_alphabetic());
                let numeric = region.len() == 3 && region.chars().all(|ch| ch.is_ascii_digit());
                if !alpha && !numeric {
                    return Err(Error::InvalidLocale(value.to_string()));
                }
                format!("{language}-{}", region.to_ascii_uppercase())
            }
        };

        Ok(Self {
            language_len: language.len(),
            tag,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.tag
    }

    pub fn language(&self) -> &str {
        &self.tag[..self.language_len]
    }

    pub fn region(&self) -> Option<&str> {
        self.tag.get(self.language_len + 1..)
    }

    /// The bare language tag for a regional locale (`en-US` -> `en`).
    pub fn parent(&self) -> Option<LocaleTag> {
        self.region()?;
        Some(Self {
            tag: self.language().to_string(),
            language_len: self.language_len,
        })
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl FromStr for LocaleTag {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for LocaleTag {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<LocaleTag> for String {
    fn from(value: LocaleTag) -> Self {
        value.tag
    }
}
