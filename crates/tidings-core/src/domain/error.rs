//! Template rule violations.

use thiserror::Error;

/// Why a template was rejected, or why a lookup on it came back empty.
///
/// Every variant rejects the input as submitted; retrying the same call
/// cannot succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // -- ownership and sharing --
    #[error("No active notification client found")]
    NotificationClientNotFound,

    #[error("Only templates created by a manager client can be shared (created by '{created_by}')")]
    OnlyManagerTemplatesCanBeShared { created_by: String },

    #[error("Allowed client '{client}' is not managed by '{manager}'")]
    AllowedClientNotManagedByManager { client: String, manager: String },

    // -- channels --
    #[error("No sender configured for channel '{channel}'")]
    ChannelSenderNotFound { channel: String },

    #[error("Unknown notification channel '{channel}'")]
    UnknownChannel { channel: String },

    // -- shape --
    #[error("Template {field} is required")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl DomainError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotificationClientNotFound => vec![
                "Templates are created on behalf of the active notification client".into(),
                "Set `created_by` on the template entry in the fixture file".into(),
            ],
            Self::OnlyManagerTemplatesCanBeShared { created_by } => vec![
                format!("'{}' is not a manager client", created_by),
                "Remove `allowed_clients` from the template".into(),
                "Or create the template as the managing client".into(),
            ],
            Self::AllowedClientNotManagedByManager { client, manager } => vec![
                format!("'{}' can only share with clients it manages", manager),
                format!("Set `managed_by = \"{}\"` on '{}' or drop it", manager, client),
            ],
            Self::ChannelSenderNotFound { channel } => vec![
                format!("Add a `channel_senders` entry for '{}'", channel),
            ],
            Self::UnknownChannel { channel } => vec![
                format!("Declare '{}' under [[channels]]", channel),
                "Or fix the channel id in `channel_senders`".into(),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{field}'")]
            }
            Self::InvalidValue { field, reason } => vec![format!("'{}' {}", field, reason)],
        }
    }

    /// Ownership and sharing failures are permission problems; a missing
    /// sender is a failed lookup; everything else is malformed input.
    pub fn category(&self) -> ErrorCategory {
        use ErrorCategory::*;
        match self {
            Self::NotificationClientNotFound
            | Self::OnlyManagerTemplatesCanBeShared { .. }
            | Self::AllowedClientNotManagedByManager { .. } => Permission,
            Self::ChannelSenderNotFound { .. } => NotFound,
            Self::UnknownChannel { .. }
            | Self::MissingRequiredField { .. }
            | Self::InvalidValue { .. } => Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Permission,
    NotFound,
}
