//! Failures around the rules: missing records, unreadable fixtures, a
//! poisoned store. Rule violations themselves are `DomainError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// No stored template with this id or title.
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String },

    /// The active client is not a registered notification client.
    #[error("Notification client not found: {id}")]
    ClientNotFound { id: String },

    /// A writer panicked while holding a store lock.
    #[error("Store lock poisoned")]
    StoreLockError,

    /// A fixture file could not be read or parsed.
    #[error("Failed to load fixtures from {path}: {reason}")]
    FixtureLoad { path: PathBuf, reason: String },
}

impl ApplicationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { id } => vec![
                format!("No template named '{}'", id),
                "Try: tidings list <FIXTURES> to see stored templates".into(),
            ],
            Self::ClientNotFound { id } => vec![format!("Declare '{id}' under [[clients]]")],
            Self::StoreLockError => {
                vec!["Reload the fixtures; the in-memory store is unusable".into()]
            }
            Self::FixtureLoad { path, .. } => vec![
                format!("Check that {} exists and is valid TOML", path.display()),
                "Expected sections: [[clients]], [[channels]], [[templates]]".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::ClientNotFound { .. } => ErrorCategory::NotFound,
            Self::StoreLockError => ErrorCategory::Internal,
            Self::FixtureLoad { .. } => ErrorCategory::Validation,
        }
    }
}
