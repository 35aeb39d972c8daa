//! Infrastructure adapters for Tidings.
//!
//! This crate implements the ports defined in `tidings-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod fixtures;
pub mod store;

// Re-export commonly used adapters
pub use fixtures::{FixtureLoader, Fixtures};
pub use store::{InMemoryChannelStore, InMemoryClientStore, InMemoryTemplateStore};
