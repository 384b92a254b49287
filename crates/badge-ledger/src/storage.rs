//! Ledger Storage
//!
//! [`LedgerStorage`] abstracts the durable key/value store (browser local
//! storage in the app, a shared map in tests). [`LedgerStore`] is the only
//! writer: each event is applied to a freshly loaded snapshot and written back
//! before control returns, so two tabs sharing the storage cannot overwrite
//! each other with stale copies.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{Ledger, LedgerEvent, REDUCTIONS_KEY, VIEWED_KEY};

/// Synchronous string key/value storage
pub trait LedgerStorage {
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> LedgerResult<()>;
}

/// Process-local storage. Clones share the same map, which is how tests
/// model several tabs on one origin.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl LedgerStorage for MemoryStorage {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let entries = self.entries.lock().map_err(|e| LedgerError::Storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        let mut entries = self.entries.lock().map_err(|e| LedgerError::Storage(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Single-writer front for a [`LedgerStorage`]
#[derive(Debug)]
pub struct LedgerStore<S> {
    storage: S,
    cached: Ledger,
}

impl<S: LedgerStorage> LedgerStore<S> {
    pub fn open(storage: S) -> Self {
        let cached = load(&storage);
        Self { storage, cached }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.cached
    }

    /// Pick up writes made elsewhere (another tab) since the last load
    pub fn reload(&mut self) -> &Ledger {
        self.cached = load(&self.storage);
        &self.cached
    }

    /// Apply one event against the current persisted state and write it back.
    ///
    /// Returns whether the ledger changed. A failed write is logged; the
    /// in-memory ledger keeps the change so the badge still reflects it.
    pub fn record(&mut self, event: LedgerEvent) -> bool {
        let mut fresh = load(&self.storage);
        let changed = fresh.apply(event);
        self.cached = fresh;
        if changed {
            if let Err(e) = self.persist() {
                log::warn!("[ledger] Failed to persist {:?}: {}", event, e);
            }
        }
        changed
    }

    fn persist(&self) -> LedgerResult<()> {
        self.storage.set(VIEWED_KEY, &self.cached.encode_viewed()?)?;
        self.storage.set(REDUCTIONS_KEY, &self.cached.encode_reductions()?)?;
        Ok(())
    }
}

fn load<S: LedgerStorage>(storage: &S) -> Ledger {
    let read = |key: &str| {
        storage.get(key).unwrap_or_else(|e| {
            log::warn!("[ledger] Could not read {}: {}", key, e);
            None
        })
    };
    let viewed = read(VIEWED_KEY);
    let reductions = read(REDUCTIONS_KEY);
    Ledger::decode_lenient(viewed.as_deref(), reductions.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn test_record_persists_both_keys() {
        let storage = MemoryStorage::new();
        let mut store = LedgerStore::open(storage.clone());

        assert!(store.record(LedgerEvent::Viewed { category: Category::Carers, item_id: 5 }));

        assert_eq!(storage.get(VIEWED_KEY).unwrap().as_deref(), Some(r#"{"carers":[5]}"#));
        assert_eq!(storage.get(REDUCTIONS_KEY).unwrap().as_deref(), Some(r#"{"carers":1}"#));
    }

    #[test]
    fn test_two_tabs_do_not_lose_updates() {
        let storage = MemoryStorage::new();
        let mut tab_a = LedgerStore::open(storage.clone());
        let mut tab_b = LedgerStore::open(storage.clone());

        tab_a.record(LedgerEvent::Viewed { category: Category::Carers, item_id: 1 });
        // tab_b still holds the empty snapshot it opened with
        tab_b.record(LedgerEvent::Viewed { category: Category::Carers, item_id: 2 });

        let merged = LedgerStore::open(storage).ledger().clone();
        assert!(merged.is_viewed(Category::Carers, 1));
        assert!(merged.is_viewed(Category::Carers, 2));
        assert_eq!(merged.reduction(Category::Carers), 2);
    }

    #[test]
    fn test_same_item_in_two_tabs_counts_once() {
        let storage = MemoryStorage::new();
        let mut tab_a = LedgerStore::open(storage.clone());
        let mut tab_b = LedgerStore::open(storage.clone());

        assert!(tab_a.record(LedgerEvent::Viewed { category: Category::Disabilities, item_id: 8 }));
        assert!(!tab_b.record(LedgerEvent::Viewed { category: Category::Disabilities, item_id: 8 }));
        assert_eq!(tab_b.ledger().reduction(Category::Disabilities), 1);
    }

    #[test]
    fn test_corrupt_storage_opens_empty() {
        let storage = MemoryStorage::new()
            .with_entry(VIEWED_KEY, "{broken")
            .with_entry(REDUCTIONS_KEY, "[]");
        let store = LedgerStore::open(storage);
        assert_eq!(store.ledger(), &Ledger::new());
    }

    #[test]
    fn test_reload_sees_other_writer() {
        let storage = MemoryStorage::new();
        let mut reader = LedgerStore::open(storage.clone());
        let mut writer = LedgerStore::open(storage);

        writer.record(LedgerEvent::Cleared { category: Category::Contact, through: 4 });
        assert_eq!(reader.ledger().reduction(Category::Contact), 0);
        assert_eq!(reader.reload().reduction(Category::Contact), 4);
    }
}
