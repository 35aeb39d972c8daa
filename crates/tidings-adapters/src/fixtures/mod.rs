//! TOML fixture loader.
//!
//! Reads a fixture file describing clients, channels and templates, fills the
//! in-memory stores and inserts every template through
//! [`NotificationTemplateService`], so fixtures go through exactly the same
//! rules as any other caller.
//!
//! # Fixture format
//!
//! ```toml
//! [[clients]]
//! id                = "manager-1"
//! title             = "Manager One"      # optional, defaults to the id
//! is_client_manager = true               # optional, default false
//!
//! [[clients]]
//! id         = "client-a"
//! managed_by = "manager-1"               # optional
//!
//! [[channels]]
//! id      = "email"
//! title   = "Email"                      # optional
//! enabled = true                         # optional, default true
//!
//! [[templates]]
//! title           = "OTP Template"
//! created_by      = "manager-1"          # active client during insert
//! lang            = "en"                 # optional, default "en"
//! subject         = "This is your OTP: {{ otp }}"
//! content         = "OTP For Life!"
//! allowed_clients = ["client-a"]         # optional
//!
//! [[templates.channel_senders]]
//! channel     = "email"
//! sender_type = "Email Account"
//! sender      = "otp@example.com"
//!
//! [[templates.lang_templates]]
//! lang    = "ar"
//! subject = "..."
//! content = "..."
//! ```
//!
//! `created_by` is not copied onto the template. The loader makes it the
//! active client for that template's insert, and the service resolves the
//! owner from there.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use tidings_core::{
    application::{ApplicationError, NotificationTemplateService},
    domain::{
        ActiveClientContext, ChannelId, ClientId, LangCode, LangTemplate, NotificationChannel,
        NotificationClient, NotificationTemplate,
    },
    error::{TidingsError, TidingsResult},
};

use crate::store::{InMemoryChannelStore, InMemoryClientStore, InMemoryTemplateStore};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a fixture file.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FixtureManifest {
    #[serde(default)]
    pub clients: Vec<ClientEntry>,
    #[serde(default)]
    pub channels: Vec<ChannelEntry>,
    #[serde(default)]
    pub templates: Vec<TemplateEntry>,
}

/// One entry under `[[clients]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientEntry {
    pub id: ClientId,
    pub title: Option<String>,
    #[serde(default)]
    pub is_client_manager: bool,
    pub managed_by: Option<ClientId>,
}

/// One entry under `[[channels]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct ChannelEntry {
    pub id: ChannelId,
    pub title: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// One entry under `[[templates]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct TemplateEntry {
    pub title: String,
    /// Client that is active while this template is inserted.
    pub created_by: Option<ClientId>,
    pub lang: Option<LangCode>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub allowed_clients: Vec<ClientId>,
    #[serde(default)]
    pub channel_senders: Vec<SenderEntry>,
    #[serde(default)]
    pub lang_templates: Vec<LangEntry>,
}

/// One entry under `[[templates.channel_senders]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct SenderEntry {
    pub channel: ChannelId,
    pub sender_type: String,
    pub sender: String,
}

/// One entry under `[[templates.lang_templates]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct LangEntry {
    pub lang: LangCode,
    pub subject: Option<String>,
    pub content: Option<String>,
}

impl From<&ClientEntry> for NotificationClient {
    fn from(entry: &ClientEntry) -> Self {
        NotificationClient {
            id: entry.id.clone(),
            title: entry.title.clone().unwrap_or_else(|| entry.id.to_string()),
            is_client_manager: entry.is_client_manager,
            managed_by: entry.managed_by.clone(),
        }
    }
}

impl From<&ChannelEntry> for NotificationChannel {
    fn from(entry: &ChannelEntry) -> Self {
        NotificationChannel {
            id: entry.id.clone(),
            title: entry.title.clone().unwrap_or_else(|| entry.id.to_string()),
            enabled: entry.enabled,
        }
    }
}

impl TemplateEntry {
    fn to_template(&self) -> TidingsResult<NotificationTemplate> {
        let mut builder = NotificationTemplate::builder()
            .title(self.title.clone())
            .subject(self.subject.clone())
            .content(self.content.clone());

        if let Some(lang) = &self.lang {
            builder = builder.lang(lang.clone());
        }
        for client in &self.allowed_clients {
            builder = builder.allowed_client(client.clone());
        }
        for s in &self.channel_senders {
            builder =
                builder.channel_sender(s.channel.clone(), s.sender_type.clone(), s.sender.clone());
        }
        for row in &self.lang_templates {
            builder = builder.lang_template_row(LangTemplate::new(
                row.lang.clone(),
                row.subject.clone(),
                row.content.clone(),
            ));
        }

        Ok(builder.build()?)
    }

    fn active_client(&self) -> ActiveClientContext {
        let mut ctx = ActiveClientContext::new();
        ctx.set(self.created_by.clone());
        ctx
    }
}

/// Parse fixture TOML.
pub fn parse_manifest(source: &str) -> Result<FixtureManifest, toml::de::Error> {
    toml::from_str(source)
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// A template entry the rules refused.
#[derive(Debug, Clone)]
pub struct Rejection {
    pub title: String,
    pub error: TidingsError,
}

/// Everything loaded from one fixture file.
pub struct Fixtures {
    pub service: NotificationTemplateService,
    /// Template entries that failed validation, in file order.
    pub rejected: Vec<Rejection>,
}

impl Fixtures {
    /// The first rejection, as an error.
    pub fn first_error(&self) -> Option<&TidingsError> {
        self.rejected.first().map(|r| &r.error)
    }
}

/// Loads a fixture file into in-memory stores.
///
/// Template entries that break a rule are **skipped with a `WARN` log** and
/// recorded in [`Fixtures::rejected`]; they do not prevent other templates
/// from loading. Unreadable or malformed files fail the whole load.
pub struct FixtureLoader {
    path: PathBuf,
}

impl FixtureLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the fixture file without inserting anything.
    pub fn read(&self) -> TidingsResult<FixtureManifest> {
        let source = fs::read_to_string(&self.path).map_err(|e| self.load_error(e))?;
        parse_manifest(&source).map_err(|e| self.load_error(e))
    }

    /// Read the file, fill the stores and insert every template.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> TidingsResult<Fixtures> {
        let manifest = self.read()?;
        load_manifest(&manifest)
    }

    fn load_error(&self, e: impl std::fmt::Display) -> TidingsError {
        ApplicationError::FixtureLoad {
            path: self.path.clone(),
            reason: e.to_string(),
        }
        .into()
    }
}

/// Fill fresh in-memory stores from an already parsed manifest.
pub fn load_manifest(manifest: &FixtureManifest) -> TidingsResult<Fixtures> {
    let clients = InMemoryClientStore::with_clients(manifest.clients.iter().map(Into::into))?;
    let channels = InMemoryChannelStore::with_channels(manifest.channels.iter().map(Into::into))?;
    let service = NotificationTemplateService::new(
        Box::new(clients),
        Box::new(channels),
        Box::new(InMemoryTemplateStore::new()),
    );

    let mut rejected = Vec::new();
    for entry in &manifest.templates {
        let result = entry
            .to_template()
            .and_then(|template| service.insert(template, &entry.active_client()));

        match result {
            Ok(record) => debug!(title = %entry.title, id = %record.id, "Loaded template"),
            Err(error) => {
                warn!(title = %entry.title, %error, "Skipping template");
                rejected.push(Rejection {
                    title: entry.title.clone(),
                    error,
                });
            }
        }
    }

    Ok(Fixtures { service, rejected })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tidings_core::domain::{ClientRegistry, DomainError};

    const FIXTURES: &str = r#"
        [[clients]]
        id = "manager-1"
        is_client_manager = true

        [[clients]]
        id = "client-a"
        managed_by = "manager-1"

        [[clients]]
        id = "client-b"

        [[channels]]
        id = "email"

        [[templates]]
        title = "OTP Template"
        created_by = "manager-1"
        subject = "This is your OTP: {{ otp }}"
        content = "OTP For Life!"
        allowed_clients = ["client-a"]

        [[templates.channel_senders]]
        channel = "email"
        sender_type = "Email Account"
        sender = "otp@example.com"

        [[templates]]
        title = "Orphan"
    "#;

    fn write_fixture(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_defaults() {
        let manifest = parse_manifest(FIXTURES).unwrap();

        assert_eq!(manifest.clients.len(), 3);
        assert!(!manifest.clients[1].is_client_manager);
        assert!(manifest.channels[0].enabled);
        assert!(manifest.templates[1].lang.is_none());
        assert!(manifest.templates[1].allowed_clients.is_empty());
    }

    #[test]
    fn blank_ids_fail_to_parse() {
        assert!(parse_manifest("[[clients]]\nid = \"  \"\n").is_err());
    }

    #[test]
    fn load_inserts_valid_templates_and_records_rejections() {
        let file = write_fixture(FIXTURES);
        let fixtures = FixtureLoader::new(file.path()).load().unwrap();

        let stored = fixtures.service.list().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(
            stored[0].template.created_by(),
            Some(&ClientId::new("manager-1"))
        );

        assert_eq!(fixtures.rejected.len(), 1);
        assert_eq!(fixtures.rejected[0].title, "Orphan");
        assert_eq!(
            fixtures.first_error().and_then(TidingsError::as_domain),
            Some(&DomainError::NotificationClientNotFound)
        );
    }

    #[test]
    fn clients_are_registered() {
        let fixtures = load_manifest(&parse_manifest(FIXTURES).unwrap()).unwrap();
        let clients = fixtures.service.clients();

        assert!(clients.is_manager(&ClientId::new("manager-1")));
        assert_eq!(
            clients.list_managed_clients(&ClientId::new("manager-1")),
            vec![ClientId::new("client-a")]
        );
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = FixtureLoader::new("/definitely/not/here.toml")
            .load()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            TidingsError::Application(ApplicationError::FixtureLoad { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_a_load_error() {
        let file = write_fixture("[[clients]\nid = ");
        assert!(FixtureLoader::new(file.path()).read().is_err());
    }
}
