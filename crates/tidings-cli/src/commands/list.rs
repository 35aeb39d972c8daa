//! `tidings list`: show stored templates, optionally for one client.

use tracing::instrument;

use tidings_core::application::TemplateInfo;

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(client = ?args.client))]
pub fn execute(args: ListArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let fixtures = super::load_fixtures(args.fixtures, config, output)?;
    let service = &fixtures.service;

    let records = match &args.client {
        Some(client) => service.templates_for_client(client)?,
        None => service.list()?,
    };
    let templates: Vec<TemplateInfo> = records.iter().map(TemplateInfo::from).collect();

    let format = args.format.unwrap_or(if output.is_json() {
        ListFormat::Json
    } else {
        ListFormat::Table
    });

    match format {
        ListFormat::Json => output.json(&templates)?,
        ListFormat::List => {
            for t in &templates {
                output.print(&t.title)?;
            }
        }
        ListFormat::Table => {
            if templates.is_empty() {
                output.info("No templates")?;
                return Ok(());
            }
            output.header("Templates:")?;
            for t in &templates {
                output.print(&describe(t))?;
            }
        }
    }

    Ok(())
}

fn describe(t: &TemplateInfo) -> String {
    let mut line = format!("  {} [{}] by {}", t.title, t.lang, t.created_by);
    if !t.languages.is_empty() {
        line.push_str(&format!("\n      languages: {}", t.languages.join(", ")));
    }
    if !t.channels.is_empty() {
        line.push_str(&format!("\n      channels:  {}", t.channels.join(", ")));
    }
    if !t.allowed_clients.is_empty() {
        line.push_str(&format!("\n      shared:    {}", t.allowed_clients.join(", ")));
    }
    line
}
