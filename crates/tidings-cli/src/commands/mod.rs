//! Subcommand handlers.

use std::path::PathBuf;

use tracing::debug;

use tidings_adapters::{FixtureLoader, Fixtures};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub mod check;
pub mod completions;
pub mod config;
pub mod lang;
pub mod list;
pub mod sender;

/// The fixture path from the command line, else `defaults.fixtures`.
fn fixture_path(arg: Option<PathBuf>, config: &AppConfig) -> CliResult<PathBuf> {
    arg.or_else(|| config.defaults.fixtures.clone())
        .ok_or(CliError::MissingFixtures)
}

/// Load fixtures for a lookup command. Rejected templates are reported as
/// warnings; only `check` treats them as failures.
fn load_fixtures(
    arg: Option<PathBuf>,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<Fixtures> {
    let path = fixture_path(arg, config)?;
    debug!(path = %path.display(), "Loading fixtures");

    let fixtures = FixtureLoader::new(path).load()?;
    if !output.is_json() {
        for rejection in &fixtures.rejected {
            output.warning(&format!("Skipped '{}': {}", rejection.title, rejection.error))?;
        }
    }
    Ok(fixtures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_beats_config_default() {
        let mut config = AppConfig::default();
        config.defaults.fixtures = Some("from-config.toml".into());

        assert_eq!(
            fixture_path(Some("arg.toml".into()), &config).unwrap(),
            PathBuf::from("arg.toml")
        );
        assert_eq!(
            fixture_path(None, &config).unwrap(),
            PathBuf::from("from-config.toml")
        );
    }

    #[test]
    fn no_fixture_path_anywhere_is_an_error() {
        assert!(matches!(
            fixture_path(None, &AppConfig::default()),
            Err(CliError::MissingFixtures)
        ));
    }
}
