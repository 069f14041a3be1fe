//! Core contracts for fauxgen.
//!
//! This crate defines the locale tag, the translation value tree shared by
//! the loader and the generators, and the error type used across crates.

pub mod error;
pub mod locale;
pub mod model;
pub mod range;
pub mod template;

pub use error::{Error, Result};
pub use locale::LocaleTag;
pub use model::{LocaleDocument, LocaleValue};
pub use range::NumericRange;

/// Contract version for on-disk locale documents.
pub const LOCALE_DOCUMENT_VERSION: &str = "0.1";

/// Locale consulted when nothing more specific provides a key.
pub const DEFAULT_LOCALE: &str = "en";
