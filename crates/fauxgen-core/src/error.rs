use thiserror::Error;

/// Core error type shared across fauxgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The key path is absent from the requested locale and every fallback.
    #[error("translation missing: {locale}.{key}")]
    MissingTranslation { locale: String, key: String },
    /// A template is malformed or resolved to a non-leaf value.
    #[error("invalid template: {0}")]
    InvalidTemplate(String),
    /// Template references nest deeper than the expansion limit.
    #[error("template reference cycle at '{key}'")]
    TemplateCycle { key: String },
    /// A locale tag could not be parsed.
    #[error("invalid locale: {0}")]
    InvalidLocale(String),
    /// A locale document is malformed or failed validation.
    #[error("invalid locale data: {0}")]
    InvalidLocaleData(String),
    /// No generator is registered under the id.
    #[error("unknown generator: {0}")]
    UnknownGenerator(String),
    /// Generator params are unknown or have the wrong type.
    #[error("invalid params: {0}")]
    InvalidParams(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build a missing translation error for a locale and key path.
    pub fn missing(locale: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingTranslation {
            locale: locale.into(),
            key: key.into(),
        }
    }

    /// Returns true when this is a missing translation.
    pub fn is_missing_translation(&self) -> bool {
        matches!(self, Self::MissingTranslation { .. })
    }
}

/// Convenience alias for results returned by fauxgen crates.
pub type Result<T> = std::result::Result<T, Error>;
