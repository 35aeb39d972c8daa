//! In-memory notification channel store.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use tidings_core::{
    application::{ApplicationError, ports::ChannelStore},
    domain::{ChannelId, ChannelRegistry, NotificationChannel},
    error::TidingsResult,
};

/// Thread-safe in-memory channel store.
///
/// Disabled channels are stored but are not reported as existing.
#[derive(Clone, Default)]
pub struct InMemoryChannelStore {
    inner: Arc<RwLock<HashMap<ChannelId, NotificationChannel>>>,
}

impl InMemoryChannelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channels(
        channels: impl IntoIterator<Item = NotificationChannel>,
    ) -> TidingsResult<Self> {
        let store = Self::new();
        for channel in channels {
            store.insert(channel)?;
        }
        Ok(store)
    }
}

impl ChannelRegistry for InMemoryChannelStore {
    fn channel_exists(&self, channel: &ChannelId) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(channel)
            .is_some_and(|c| c.enabled)
    }

    fn list_channels(&self) -> Vec<ChannelId> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let mut ids: Vec<_> = inner
            .values()
            .filter(|c| c.enabled)
            .map(|c| c.id.clone())
            .collect();
        ids.sort();
        ids
    }
}

impl ChannelStore for InMemoryChannelStore {
    fn list(&self) -> TidingsResult<Vec<NotificationChannel>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut channels: Vec<_> = inner.values().cloned().collect();
        channels.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(channels)
    }

    fn insert(&self, channel: NotificationChannel) -> TidingsResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert(channel.id.clone(), channel);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_channels_do_not_exist() {
        let mut sms = NotificationChannel::new(ChannelId::new("sms"), "SMS");
        sms.enabled = false;

        let store = InMemoryChannelStore::with_channels([
            NotificationChannel::new(ChannelId::new("email"), "Email"),
            sms,
        ])
        .unwrap();

        assert!(store.channel_exists(&ChannelId::new("email")));
        assert!(!store.channel_exists(&ChannelId::new("sms")));
        assert!(!store.channel_exists(&ChannelId::new("push")));
        assert_eq!(store.list_channels(), vec![ChannelId::new("email")]);
        assert_eq!(store.list().unwrap().len(), 2);
    }
}
