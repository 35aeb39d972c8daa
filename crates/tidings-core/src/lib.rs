//! Notification template rules, with no I/O.
//!
//! Decides who owns a template and who it may be shared with, which sender
//! serves each channel, and how per-language content falls back to the
//! default language.
//!
//! ```text
//!  tidings-cli ──► application::NotificationTemplateService
//!                        │ runs               │ stores through
//!                        ▼                    ▼
//!        domain::TemplateValidator    application::ports::*Store
//!                                             ▲
//!                                             │ implemented by
//!                                      tidings-adapters
//! ```
//!
//! `domain` holds entities and rules; the registry traits there are the only
//! lookups a rule may make. `application` adds storage ports and the service
//! that runs every rule before a template is stored.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tidings_core::{
//!     application::NotificationTemplateService,
//!     domain::{ActiveClientContext, ClientId, NotificationTemplate},
//! };
//!
//! let template = NotificationTemplate::builder()
//!     .title("OTP Template")
//!     .subject("This is your OTP: {{ otp }}")
//!     .content("OTP For Life!")
//!     .build()
//!     .unwrap();
//!
//! // `clients`, `channels` and `templates` are store adapters.
//! let ctx = ActiveClientContext::for_client(ClientId::new("client-a"));
//! let service = NotificationTemplateService::new(clients, channels, templates);
//! service.insert(template, &ctx).unwrap();
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub mod prelude {
    pub use crate::application::{
        NotificationTemplateService, TemplateInfo,
        ports::{ChannelStore, ClientStore, TemplateStore},
    };
    pub use crate::domain::{
        ActiveClientContext, AllowedClient, ChannelId, ChannelRegistry, ChannelSender, ClientId,
        ClientRegistry, LangCode, LangTemplate, NotificationChannel, NotificationClient,
        NotificationTemplate, TemplateId, TemplateRecord, TemplateValidator,
    };
    pub use crate::error::{TidingsError, TidingsResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
