//! Lookups the template rules need from the outside world.
//!
//! These are **driven ports** defined by the domain: the validator asks "is
//! this client a manager?" without knowing where clients live. The
//! application layer's stores extend them; `tidings-adapters` implements them.

use crate::domain::value_objects::{ChannelId, ClientId};

/// Read access to notification clients and their management relationships.
#[cfg_attr(test, mockall::automock)]
pub trait ClientRegistry {
    /// Whether the client is known at all.
    fn contains(&self, client: &ClientId) -> bool;

    /// Whether the client has the manager role.
    fn is_manager(&self, client: &ClientId) -> bool;

    /// The manager of `client`, if it has one.
    fn managed_by(&self, client: &ClientId) -> Option<ClientId>;

    /// All clients whose manager is `manager`.
    fn list_managed_clients(&self, manager: &ClientId) -> Vec<ClientId>;
}

/// Read access to the configured notification channels.
#[cfg_attr(test, mockall::automock)]
pub trait ChannelRegistry {
    fn channel_exists(&self, channel: &ChannelId) -> bool;

    fn list_channels(&self) -> Vec<ChannelId>;
}
