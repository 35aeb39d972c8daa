pub mod channel;
pub mod client;
pub mod template;

pub use crate::domain::DomainError;
pub use channel::NotificationChannel;
pub use client::NotificationClient;
pub use template::{NotificationTemplate, TemplateRecord};
