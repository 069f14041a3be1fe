//! Locale-aware fake value generation.
//!
//! A [`Faker`] carries the locale store, the current locale and a seeded RNG.
//! Category modules ([`address`], [`phone_number`], [`id_number`],
//! [`internet`], [`name`]) expose one function per field; the [`catalog`]
//! dispatches the same functions by id for the CLI.

pub mod address;
pub mod catalog;
pub mod faker;
pub mod id_number;
pub mod internet;
pub mod name;
pub mod output;
pub mod params;
pub mod phone_number;
pub mod sampler;
pub mod template;

pub use catalog::{Generator, GeneratorRegistry};
pub use faker::{Faker, LocaleGuard};
pub use fauxgen_core::{Error, LocaleTag, Result};
pub use fauxgen_locale::LocaleStore;
