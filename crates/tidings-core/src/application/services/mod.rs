//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "insert a template on behalf of a client".

pub mod template_service;

pub use template_service::{NotificationTemplateService, TemplateInfo};
