//! `tidings check`: load a fixture file and report rule violations.

use serde::Serialize;
use tracing::{info, instrument};

use tidings_adapters::FixtureLoader;
use tidings_core::application::TemplateInfo;

use crate::{
    cli::CheckArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Serialize)]
struct Report<'a> {
    stored: &'a [TemplateInfo],
    rejected: Vec<RejectionInfo<'a>>,
}

#[derive(Serialize)]
struct RejectionInfo<'a> {
    title: &'a str,
    error: String,
}

#[instrument(skip_all)]
pub fn execute(args: CheckArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let path = super::fixture_path(args.fixtures, config)?;
    let fixtures = FixtureLoader::new(&path).load()?;
    let stored = fixtures.service.list_info()?;

    if output.is_json() {
        output.json(&Report {
            stored: &stored,
            rejected: fixtures
                .rejected
                .iter()
                .map(|r| RejectionInfo {
                    title: &r.title,
                    error: r.error.to_string(),
                })
                .collect(),
        })?;
    } else {
        output.header(&format!("Checked {}", path.display()))?;
        for template in &stored {
            output.success(&format!("{} (created by {})", template.title, template.created_by))?;
        }
        for rejection in &fixtures.rejected {
            output.error(&format!("{}: {}", rejection.title, rejection.error))?;
        }
    }

    info!(
        stored = stored.len(),
        rejected = fixtures.rejected.len(),
        "Fixture check finished"
    );

    let count = fixtures.rejected.len();
    match fixtures.rejected.into_iter().next() {
        Some(first) => Err(CliError::TemplatesRejected {
            count,
            first: first.error,
        }),
        None => {
            if !output.is_json() {
                output.info(&format!("{} template(s) valid", stored.len()))?;
            }
            Ok(())
        }
    }
}
