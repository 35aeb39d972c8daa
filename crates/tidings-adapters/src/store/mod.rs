//! Thread-safe in-memory stores.

mod channel;
mod client;
mod template;

pub use channel::InMemoryChannelStore;
pub use client::InMemoryClientStore;
pub use template::InMemoryTemplateStore;
