//! In-memory template store.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use tidings_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{TemplateId, TemplateRecord},
    error::TidingsResult,
};

#[derive(Default)]
struct Inner {
    records: HashMap<TemplateId, TemplateRecord>,
    // Insertion order, for stable listing.
    order: Vec<TemplateId>,
}

/// Thread-safe in-memory template store.
#[derive(Clone, Default)]
pub struct InMemoryTemplateStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryTemplateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).records.len()
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all templates.
    pub fn clear(&self) -> TidingsResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.records.clear();
        inner.order.clear();
        Ok(())
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn get(&self, id: &TemplateId) -> TidingsResult<TemplateRecord> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.records.get(id).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound { id: id.to_string() }.into()
        })
    }

    fn find_by_title(&self, title: &str) -> TidingsResult<TemplateRecord> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id))
            .find(|r| r.template.title == title)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    id: title.to_owned(),
                }
                .into()
            })
    }

    fn list(&self) -> TidingsResult<Vec<TemplateRecord>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id))
            .cloned()
            .collect())
    }

    fn insert(&self, record: TemplateRecord) -> TidingsResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let id = record.id;
        if inner.records.insert(id, record).is_none() {
            inner.order.push(id);
        }
        Ok(())
    }

    fn remove(&self, id: &TemplateId) -> TidingsResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.records.remove(id).is_none() {
            return Err(ApplicationError::TemplateNotFound { id: id.to_string() }.into());
        }
        inner.order.retain(|o| o != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidings_core::{domain::NotificationTemplate, error::TidingsError};

    fn record(title: &str) -> TemplateRecord {
        TemplateRecord::new(NotificationTemplate::builder().title(title).build().unwrap())
    }

    #[test]
    fn list_keeps_insertion_order() {
        let store = InMemoryTemplateStore::new();
        for title in ["c", "a", "b"] {
            store.insert(record(title)).unwrap();
        }

        let titles: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|r| r.template.title)
            .collect();
        assert_eq!(titles, ["c", "a", "b"]);
    }

    #[test]
    fn find_by_title_returns_first_match() {
        let store = InMemoryTemplateStore::new();
        let first = record("OTP");
        store.insert(first.clone()).unwrap();
        store.insert(record("OTP")).unwrap();

        assert_eq!(store.find_by_title("OTP").unwrap().id, first.id);
        assert!(store.find_by_title("Welcome").is_err());
    }

    #[test]
    fn remove_unknown_template_fails() {
        let store = InMemoryTemplateStore::new();
        let rec = record("OTP");
        store.insert(rec.clone()).unwrap();

        store.remove(&rec.id).unwrap();
        assert!(store.is_empty());
        assert!(store.remove(&rec.id).is_err());
    }

    #[test]
    fn len_survives_a_poisoned_lock_but_port_calls_fail() {
        let store = InMemoryTemplateStore::new();
        store.insert(record("OTP")).unwrap();

        let writer = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = writer.inner.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert_eq!(
            store.list().unwrap_err(),
            TidingsError::Application(ApplicationError::StoreLockError)
        );
    }
}
