use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ClientId;

/// A party that owns notification templates.
///
/// Manager clients may own other clients (through `managed_by`) and share
/// templates with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationClient {
    pub id: ClientId,
    pub title: String,
    pub is_client_manager: bool,
    pub managed_by: Option<ClientId>,
}

impl NotificationClient {
    /// A plain (non-manager, unmanaged) client.
    pub fn new(id: ClientId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            is_client_manager: false,
            managed_by: None,
        }
    }

    pub fn manager(id: ClientId, title: impl Into<String>) -> Self {
        Self {
            is_client_manager: true,
            ..Self::new(id, title)
        }
    }

    pub fn managed_by(mut self, manager: ClientId) -> Self {
        self.managed_by = Some(manager);
        self
    }

    pub fn is_managed_by(&self, manager: &ClientId) -> bool {
        self.managed_by.as_ref() == Some(manager)
    }
}
