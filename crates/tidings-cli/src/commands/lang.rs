//! `tidings lang`: subject and content for one language, with fallback to
//! the template's default language.

use serde_json::json;
use tracing::instrument;

use tidings_core::domain::LangCode;

use crate::{
    cli::LangArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(template = %args.template))]
pub fn execute(args: LangArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let lang = match args.lang {
        Some(lang) => lang,
        None => LangCode::try_new(config.defaults.lang.as_str())
            .map_err(|e| CliError::config("Invalid defaults.lang", e))?,
    };

    let fixtures = super::load_fixtures(args.fixtures, config, output)?;
    let service = &fixtures.service;

    let record = service.find_by_title(&args.template)?;
    let (subject, content) = service.lang_templates(&record.id, &lang)?;

    if output.is_json() {
        output.json(&json!({
            "template": record.template.title,
            "lang": lang.as_str(),
            "subject": subject,
            "content": content,
        }))?;
    } else {
        output.print(&subject)?;
        output.print(&content)?;
    }

    Ok(())
}
