//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down to the commands.
//! The library crates never see it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site)
//! 2. `TIDINGS_*` environment variables, e.g. `TIDINGS_DEFAULTS__LANG=ar`
//! 3. Config file (`--config FILE`, else the platform config dir)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "TIDINGS";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub defaults: Defaults,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Language used by `tidings lang` when `--lang` is omitted.
    pub lang: String,
    /// Fixture file used when a command is given none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixtures: Option<PathBuf>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            fixtures: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, file and environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        Config::builder()
            .add_source(File::from(path.as_path()).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    /// Default configuration file location.
    ///
    /// Falls back to `.tidings.toml` in the current directory when no home
    /// directory can be determined.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "tidings", "tidings")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".tidings.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_lang_is_english() {
        assert_eq!(AppConfig::default().defaults.lang, "en");
        assert!(AppConfig::default().defaults.fixtures.is_none());
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            "[defaults]\nlang = \"ar\"\nfixtures = \"fixtures.toml\"\n\n[output]\nno_color = true"
        )
        .unwrap();

        let cfg = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.defaults.lang, "ar");
        assert_eq!(cfg.defaults.fixtures, Some(PathBuf::from("fixtures.toml")));
        assert!(cfg.output.no_color);
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/definitely/not/here.toml"))).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
