use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::LOCALE_DOCUMENT_VERSION;

/// On-disk locale document.
///
/// ```json
/// { "locale": "en-US", "fallback": "en", "data": { "address": { ... } } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LocaleDocument {
    /// Contract version for this document format.
    #[serde(default = "default_document_version")]
    pub document_version: String,
    /// Locale tag the data belongs to (e.g. `en-US`).
    pub locale: String,
    /// Locale consulted before the language parent when a key is missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    /// Namespaces (`address`, `phone_number`, ...) mapped to their tables.
    pub data: BTreeMap<String, LocaleValue>,
}

fn default_document_version() -> String {
    LOCALE_DOCUMENT_VERSION.to_string()
}

/// Node of a translation tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum LocaleValue {
    /// Literal value or template string.
    Text(String),
    /// Candidates, one of which is picked uniformly.
    List(Vec<String>),
    /// Nested mapping (namespace, or a scoped table such as zip ranges).
    Table(BTreeMap<String, LocaleValue>),
}

impl LocaleValue {
    pub fn kind(&self) -> &'static str {
        match self {
            LocaleValue::Text(_) => "text",
            LocaleValue::List(_) => "list",
            LocaleValue::Table(_) => "table",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            LocaleValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            LocaleValue::List(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&BTreeMap<String, LocaleValue>> {
        match self {
            LocaleValue::Table(map) => Some(map),
            _ => None,
        }
    }

    /// Candidate strings of a leaf: one for `Text`, all for `List`.
    pub fn candidates(&self) -> &[String] {
        match self {
            LocaleValue::Text(value) => std::slice::from_ref(value),
            LocaleValue::List(values) => values.as_slice(),
            LocaleValue::Table(_) => &[],
        }
    }

    /// Walk a dotted key path from this node.
    pub fn get_path(&self, path: &str) -> Option<&LocaleValue> {
        path.split('.').try_fold(self, |node, segment| match node {
            LocaleValue::Table(map) => map.get(segment),
            _ => None,
        })
    }

    /// Deep-merge `other` over `self`. Tables merge key by key; any other
    /// pairing is replaced by `other`.
    pub fn merge(&mut self, other: LocaleValue) {
        match (self, other) {
            (LocaleValue::Table(base), LocaleValue::Table(overlay)) => {
                for (key, value) in overlay {
                    match base.get_mut(&key) {
                        Some(existing) => existing.merge(value),
                        None => {
                            base.insert(key, value);
                        }
                    }
                }
            }
            (slot, other) => *slot = other,
        }
    }

    /// Visit every leaf (`Text`/`List`) with its dotted path.
    pub fn for_each_leaf<F>(&self, prefix: &str, visit: &mut F)
    where
        F: FnMut(&str, &LocaleValue),
    {
        match self {
            LocaleValue::Table(map) => {
                for (key, value) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    value.for_each_leaf(&path, visit);
                }
            }
            leaf => visit(prefix, leaf),
        }
    }
}

impl From<BTreeMap<String, LocaleValue>> for LocaleValue {
    fn from(map: BTreeMap<String, LocaleValue>) -> Self {
        LocaleValue::Table(map)
    }
}
