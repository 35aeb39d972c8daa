//! Application layer for Tidings.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (NotificationTemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{NotificationTemplateService, TemplateInfo};

pub use ports::{ChannelStore, ClientStore, TemplateStore};

pub use error::ApplicationError;
