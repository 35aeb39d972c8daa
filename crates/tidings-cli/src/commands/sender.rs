//! `tidings sender`: the sender a template uses on a channel.

use serde_json::json;
use tracing::instrument;

use crate::{cli::SenderArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(template = %args.template, channel = %args.channel))]
pub fn execute(args: SenderArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let fixtures = super::load_fixtures(args.fixtures, config, output)?;
    let service = &fixtures.service;

    let record = service.find_by_title(&args.template)?;
    let (sender_type, sender) = service.channel_sender(&record.id, &args.channel)?;

    if output.is_json() {
        output.json(&json!({
            "template": record.template.title,
            "channel": args.channel.as_str(),
            "sender_type": sender_type,
            "sender": sender,
        }))?;
    } else {
        output.print(&format!("{sender_type}: {sender}"))?;
    }

    Ok(())
}
