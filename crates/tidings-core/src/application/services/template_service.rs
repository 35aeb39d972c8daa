//! Notification Template Service - main application orchestrator.
//!
//! Inserting a template runs the whole rule pipeline:
//! 1. Required fields
//! 2. Resolve `created_by` from the active client
//! 3. Sharing and allowed-client rules
//! 4. Channel sender check
//! 5. Language row normalization
//! 6. Store
//!
//! Lookups (`channel_sender`, `lang_templates`) run against stored templates.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{ChannelStore, ClientStore, TemplateStore},
    },
    domain::{
        ActiveClientContext, ChannelId, ClientId, ClientRegistry, DomainError, LangCode,
        NotificationTemplate, TemplateId, TemplateRecord, TemplateValidator as validator,
    },
    error::TidingsResult,
};

/// Information about a stored template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: String,
    pub title: String,
    pub created_by: String,
    pub lang: String,
    pub languages: Vec<String>,
    pub channels: Vec<String>,
    pub allowed_clients: Vec<String>,
}

impl From<&TemplateRecord> for TemplateInfo {
    fn from(record: &TemplateRecord) -> Self {
        let t = &record.template;
        Self {
            id: record.id.to_string(),
            title: t.title.clone(),
            created_by: t.created_by().map(ToString::to_string).unwrap_or_default(),
            lang: t.lang.to_string(),
            languages: t.lang_templates.iter().map(|r| r.lang.to_string()).collect(),
            channels: t
                .channel_senders
                .iter()
                .map(|s| s.channel.to_string())
                .collect(),
            allowed_clients: t
                .allowed_clients
                .iter()
                .map(|a| a.client.to_string())
                .collect(),
        }
    }
}

/// Service for notification template operations.
pub struct NotificationTemplateService {
    clients: Box<dyn ClientStore>,
    channels: Box<dyn ChannelStore>,
    templates: Box<dyn TemplateStore>,
}

impl NotificationTemplateService {
    /// Create a new template service with the given adapters.
    pub fn new(
        clients: Box<dyn ClientStore>,
        channels: Box<dyn ChannelStore>,
        templates: Box<dyn TemplateStore>,
    ) -> Self {
        Self {
            clients,
            channels,
            templates,
        }
    }

    pub fn clients(&self) -> &dyn ClientStore {
        self.clients.as_ref()
    }

    pub fn channels(&self) -> &dyn ChannelStore {
        self.channels.as_ref()
    }

    /// Validate, normalize and store a template on behalf of the active client.
    #[instrument(skip_all, fields(title = %template.title))]
    pub fn insert(
        &self,
        mut template: NotificationTemplate,
        ctx: &ActiveClientContext,
    ) -> TidingsResult<TemplateRecord> {
        template.validate()?;

        let created_by = validator::resolve_created_by(ctx)?;
        if !self.clients.contains(&created_by) {
            return Err(DomainError::NotificationClientNotFound.into());
        }
        template.set_created_by(created_by);

        self.validate(&mut template)?;

        let record = TemplateRecord::new(template);
        self.templates.insert(record.clone())?;

        info!(
            id = %record.id,
            created_by = %record.template.created_by().map(ClientId::as_str).unwrap_or_default(),
            "Template stored"
        );
        Ok(record)
    }

    /// Get a template by ID.
    pub fn get(&self, id: &TemplateId) -> TidingsResult<TemplateRecord> {
        self.templates.get(id)
    }

    /// First template with the given title.
    pub fn find_by_title(&self, title: &str) -> TidingsResult<TemplateRecord> {
        self.templates.find_by_title(title)
    }

    /// List all templates.
    pub fn list(&self) -> TidingsResult<Vec<TemplateRecord>> {
        self.templates.list()
    }

    /// Remove a template.
    pub fn remove(&self, id: &TemplateId) -> TidingsResult<()> {
        self.templates.remove(id)
    }

    /// Templates a client created or that were shared with it.
    pub fn templates_for_client(&self, client: &ClientId) -> TidingsResult<Vec<TemplateRecord>> {
        if !self.clients.contains(client) {
            return Err(ApplicationError::ClientNotFound {
                id: client.to_string(),
            }
            .into());
        }

        Ok(self
            .templates
            .list()?
            .into_iter()
            .filter(|r| r.template.is_available_to(client))
            .collect())
    }

    /// `(sender_type, sender)` configured for `channel` on a stored template.
    pub fn channel_sender(
        &self,
        id: &TemplateId,
        channel: &ChannelId,
    ) -> TidingsResult<(String, String)> {
        let record = self.templates.get(id)?;
        let (sender_type, sender) = validator::get_channel_sender(&record.template, channel)?;
        Ok((sender_type.to_owned(), sender.to_owned()))
    }

    /// `(subject, content)` for `lang` on a stored template.
    pub fn lang_templates(
        &self,
        id: &TemplateId,
        lang: &LangCode,
    ) -> TidingsResult<(String, String)> {
        let record = self.templates.get(id)?;
        let (subject, content) = validator::get_lang_templates(&record.template, lang);
        Ok((subject.to_owned(), content.to_owned()))
    }

    /// Display DTOs for every stored template.
    pub fn list_info(&self) -> TidingsResult<Vec<TemplateInfo>> {
        Ok(self.templates.list()?.iter().map(TemplateInfo::from).collect())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Rules that run once `created_by` is known.
    fn validate(&self, template: &mut NotificationTemplate) -> TidingsResult<()> {
        validator::validate_sharing(template, self.clients.as_ref())?;
        validator::validate_allowed_clients(template, self.clients.as_ref())?;
        validator::validate_channel_senders(template, self.channels.as_ref())?;

        let before = template.lang_templates.len();
        validator::validate_language_templates(template);
        let dropped = before - template.lang_templates.len();
        if dropped > 0 {
            debug!(dropped, "Discarded language rows");
        }

        Ok(())
    }
}
