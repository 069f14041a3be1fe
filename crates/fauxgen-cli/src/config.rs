//! `fauxgen.toml` settings.

use std::path::{Path, PathBuf};

use fauxgen_core::DEFAULT_LOCALE;
use serde::{Deserialize, Serialize};

use crate::error::CliResult;
use crate::logging::LogFormat;

pub const DEFAULT_CONFIG_FILE: &str = "fauxgen.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub locale: Option<String>,
    pub default_locale: String,
    /// Extra locale documents, relative to the config file.
    pub locales_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: None,
            default_locale: DEFAULT_LOCALE.to_string(),
            locales_dir: None,
            seed: None,
            log_format: LogFormat::Text,
        }
    }
}

/// Load settings from `path`, or from `./fauxgen.toml` when it exists.
///
/// An explicit path must exist; the implicit file is optional.
pub fn load_settings(path: Option<&Path>) -> CliResult<Settings> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(Settings::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path)?;
    let mut settings: Settings = toml::from_str(&content)?;
    if let Some(dir) = settings.locales_dir.take() {
        let base = path.parent().unwrap_or(Path::new(""));
        settings.locales_dir = Some(if dir.is_relative() { base.join(dir) } else { dir });
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_keys_use_defaults() {
        let settings: Settings = toml::from_str("seed = 42").expect("settings");
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.default_locale, "en");
        assert_eq!(settings.log_format, LogFormat::Text);
        assert_eq!(settings.locale, None);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(toml::from_str::<Settings>("colour = \"blue\"").is_err());
    }

    #[test]
    fn locales_dir_is_relative_to_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("fauxgen.toml");
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(
            file,
            "locale = \"en-US\"\nlocales_dir = \"locales\"\nlog_format = \"json\""
        )
        .expect("write");

        let settings = load_settings(Some(&path)).expect("settings");
        assert_eq!(settings.locale.as_deref(), Some("en-US"));
        assert_eq!(settings.locales_dir, Some(dir.path().join("locales")));
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_settings(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
