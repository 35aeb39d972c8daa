//! Notification template aggregate.
//!
//! ## Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  NotificationTemplate (Aggregate Root)                      │
//! │  ├── title, lang, subject, content  (default-language pair) │
//! │  ├── created_by        - resolved from the active client    │
//! │  ├── allowed_clients   - Vec<AllowedClient>                 │
//! │  ├── channel_senders   - Vec<ChannelSender>                 │
//! │  └── lang_templates    - Vec<LangTemplate>                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TemplateRecord                                             │
//! │  └── TemplateId + created_at + NotificationTemplate         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The default-language text lives directly on the template. `lang_templates`
//! only carries overrides for *other* languages; a row for the default
//! language is discarded during normalization.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{ChannelId, ClientId, LangCode, TemplateId},
};

/// A client a manager's template is shared with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedClient {
    pub client: ClientId,
}

impl AllowedClient {
    pub fn new(client: ClientId) -> Self {
        Self { client }
    }
}

/// Who sends messages on a given channel.
///
/// `sender_type` names the kind of sender record (an email account, an SMS
/// gateway, ...) and `sender` identifies the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSender {
    pub channel: ChannelId,
    pub sender_type: String,
    pub sender: String,
}

impl ChannelSender {
    pub fn new(
        channel: ChannelId,
        sender_type: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            channel,
            sender_type: sender_type.into(),
            sender: sender.into(),
        }
    }
}

/// Subject/content override for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangTemplate {
    pub lang: LangCode,
    pub subject: Option<String>,
    pub content: Option<String>,
}

impl LangTemplate {
    pub fn new(lang: LangCode, subject: Option<String>, content: Option<String>) -> Self {
        Self {
            lang,
            subject,
            content,
        }
    }

    /// Rows without a subject carry nothing worth sending.
    pub fn has_subject(&self) -> bool {
        self.subject.as_deref().is_some_and(|s| !s.is_empty())
    }

    fn pair(&self) -> (&str, &str) {
        (
            self.subject.as_deref().unwrap_or_default(),
            self.content.as_deref().unwrap_or_default(),
        )
    }
}

/// A notification template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationTemplate {
    pub title: String,
    #[serde(skip_deserializing)]
    created_by: Option<ClientId>,
    /// Default language of `subject`/`content`.
    pub lang: LangCode,
    pub subject: String,
    pub content: String,
    pub allowed_clients: Vec<AllowedClient>,
    pub channel_senders: Vec<ChannelSender>,
    pub lang_templates: Vec<LangTemplate>,
}

impl NotificationTemplate {
    pub fn builder() -> TemplateBuilder {
        TemplateBuilder::default()
    }

    /// The owning client. `None` until the template has been inserted.
    pub fn created_by(&self) -> Option<&ClientId> {
        self.created_by.as_ref()
    }

    pub(crate) fn set_created_by(&mut self, client: ClientId) {
        self.created_by = Some(client);
    }

    pub fn is_shared(&self) -> bool {
        !self.allowed_clients.is_empty()
    }

    /// Whether `client` may use this template: its creator, or a client it
    /// is shared with.
    pub fn is_available_to(&self, client: &ClientId) -> bool {
        self.created_by.as_ref() == Some(client)
            || self.allowed_clients.iter().any(|a| &a.client == client)
    }

    pub fn append_allowed_client(&mut self, client: ClientId) {
        self.allowed_clients.push(AllowedClient::new(client));
    }

    pub fn append_channel_sender(&mut self, sender: ChannelSender) {
        self.channel_senders.push(sender);
    }

    pub fn append_lang_template(&mut self, row: LangTemplate) {
        self.lang_templates.push(row);
    }

    /// Check the fields every template needs regardless of who creates it.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "title" });
        }
        Ok(())
    }

    /// Normalize `lang_templates` in place.
    ///
    /// Drops rows for the default language and rows without a subject, then
    /// keeps the first row for each remaining language. Running it twice
    /// changes nothing.
    pub fn validate_language_templates(&mut self) {
        let default_lang = &self.lang;
        let mut seen = HashSet::new();

        self.lang_templates.retain(|row| {
            &row.lang != default_lang && row.has_subject() && seen.insert(row.lang.clone())
        });
    }

    /// `(sender_type, sender)` of the first entry for `channel`.
    pub fn get_channel_sender(&self, channel: &ChannelId) -> Result<(&str, &str), DomainError> {
        self.channel_senders
            .iter()
            .find(|s| &s.channel == channel)
            .map(|s| (s.sender_type.as_str(), s.sender.as_str()))
            .ok_or_else(|| DomainError::ChannelSenderNotFound {
                channel: channel.to_string(),
            })
    }

    /// `(subject, content)` for `lang`, falling back to the default language.
    pub fn get_lang_templates(&self, lang: &LangCode) -> (&str, &str) {
        if lang == &self.lang {
            return self.default_pair();
        }

        self.lang_templates
            .iter()
            .find(|row| &row.lang == lang && row.has_subject())
            .map(LangTemplate::pair)
            .unwrap_or_else(|| self.default_pair())
    }

    fn default_pair(&self) -> (&str, &str) {
        (self.subject.as_str(), self.content.as_str())
    }
}

/// Builder for [`NotificationTemplate`].
#[derive(Debug, Default)]
pub struct TemplateBuilder {
    title: Option<String>,
    lang: Option<LangCode>,
    subject: String,
    content: String,
    allowed_clients: Vec<AllowedClient>,
    channel_senders: Vec<ChannelSender>,
    lang_templates: Vec<LangTemplate>,
}

impl TemplateBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn lang(mut self, lang: LangCode) -> Self {
        self.lang = Some(lang);
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn allowed_client(mut self, client: ClientId) -> Self {
        self.allowed_clients.push(AllowedClient::new(client));
        self
    }

    pub fn channel_sender(
        mut self,
        channel: ChannelId,
        sender_type: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        self.channel_senders
            .push(ChannelSender::new(channel, sender_type, sender));
        self
    }

    pub fn lang_template(
        mut self,
        lang: LangCode,
        subject: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.lang_templates.push(LangTemplate::new(
            lang,
            Some(subject.into()),
            Some(content.into()),
        ));
        self
    }

    pub fn lang_template_row(mut self, row: LangTemplate) -> Self {
        self.lang_templates.push(row);
        self
    }

    pub fn build(self) -> Result<NotificationTemplate, DomainError> {
        let template = NotificationTemplate {
            title: self
                .title
                .ok_or(DomainError::MissingRequiredField { field: "title" })?,
            created_by: None,
            lang: self.lang.unwrap_or_default(),
            subject: self.subject,
            content: self.content,
            allowed_clients: self.allowed_clients,
            channel_senders: self.channel_senders,
            lang_templates: self.lang_templates,
        };
        template.validate()?;
        Ok(template)
    }
}

/// A stored template with the identity assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub id: TemplateId,
    pub created_at: DateTime<Utc>,
    pub template: NotificationTemplate,
}

impl TemplateRecord {
    pub fn new(template: NotificationTemplate) -> Self {
        Self {
            id: TemplateId::generate(),
            created_at: Utc::now(),
            template,
        }
    }
}
