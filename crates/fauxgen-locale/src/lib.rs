//! Locale data store, fallback resolver and load-time validation.
//!
//! The builtin `en` and `en-US` documents are embedded in the binary; extra
//! documents can be merged in from a directory of JSON files.

pub mod resolver;
pub mod store;
pub mod validate;

pub use resolver::Resolved;
pub use store::LocaleStore;
pub use validate::{IssueSeverity, ValidationIssue, ValidationReport, validate_store};
