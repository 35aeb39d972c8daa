//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tidings-adapters` crate provides implementations.

use crate::domain::{
    ChannelRegistry, ClientId, ClientRegistry, NotificationChannel, NotificationClient,
    TemplateId, TemplateRecord,
};
use crate::error::TidingsResult;

/// Port for notification client storage.
///
/// Implemented by:
/// - `tidings_adapters::InMemoryClientStore`
///
/// Extends the domain's [`ClientRegistry`] so a store can be handed straight
/// to the template rules.
pub trait ClientStore: ClientRegistry + Send + Sync {
    /// Get a client by id.
    fn get(&self, id: &ClientId) -> TidingsResult<NotificationClient>;

    /// List all clients.
    fn list(&self) -> TidingsResult<Vec<NotificationClient>>;

    /// Insert or update a client.
    fn insert(&self, client: NotificationClient) -> TidingsResult<()>;
}

/// Port for notification channel storage.
///
/// Implemented by:
/// - `tidings_adapters::InMemoryChannelStore`
pub trait ChannelStore: ChannelRegistry + Send + Sync {
    /// List all channels.
    fn list(&self) -> TidingsResult<Vec<NotificationChannel>>;

    /// Insert or update a channel.
    fn insert(&self, channel: NotificationChannel) -> TidingsResult<()>;
}

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `tidings_adapters::InMemoryTemplateStore`
///
/// Stores receive templates that already passed every rule; they do not
/// validate again.
pub trait TemplateStore: Send + Sync {
    /// Get a specific template by ID.
    fn get(&self, id: &TemplateId) -> TidingsResult<TemplateRecord>;

    /// First stored template with this title.
    fn find_by_title(&self, title: &str) -> TidingsResult<TemplateRecord>;

    /// List all stored templates, oldest first.
    fn list(&self) -> TidingsResult<Vec<TemplateRecord>>;

    /// Store a template record.
    fn insert(&self, record: TemplateRecord) -> TidingsResult<()>;

    /// Remove a template.
    fn remove(&self, id: &TemplateId) -> TidingsResult<()>;
}
