//! Notification Reconciler
//!
//! Turns the server's raw pending counts into sidebar badge values by
//! subtracting what the admin has already acknowledged on this device.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;

use crate::category::Category;
use crate::ledger::{Ledger, LedgerEvent};
use crate::storage::{LedgerStorage, LedgerStore};

/// Raw pending counts as reported by the server
pub type RawCounts = BTreeMap<Category, u32>;

/// Item id callers pass to acknowledge a whole clear-all category
pub const CLEAR_ALL_SENTINEL: u64 = 0;

/// Where raw pending counts come from (the dashboard stats endpoint in the app)
#[async_trait(?Send)]
pub trait StatsSource {
    type Error: fmt::Display;

    async fn pending_counts(&self) -> Result<RawCounts, Self::Error>;
}

pub struct NotificationReconciler<S> {
    store: LedgerStore<S>,
    /// Last successful server snapshot; `None` until the first fetch lands
    raw: Option<RawCounts>,
    displayed: BTreeMap<Category, u32>,
}

impl<S: LedgerStorage> NotificationReconciler<S> {
    pub fn new(storage: S) -> Self {
        Self {
            store: LedgerStore::open(storage),
            raw: None,
            displayed: Category::ALL.into_iter().map(|c| (c, 0)).collect(),
        }
    }

    pub fn count(&self, category: Category) -> u32 {
        self.displayed.get(&category).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &BTreeMap<Category, u32> {
        &self.displayed
    }

    /// Sum of all badges, saturating at `u32::MAX`
    pub fn total(&self) -> u32 {
        self.displayed.values().fold(0u32, |acc, n| acc.saturating_add(*n))
    }

    pub fn ledger(&self) -> &Ledger {
        self.store.ledger()
    }

    pub fn has_snapshot(&self) -> bool {
        self.raw.is_some()
    }

    /// Fetch a fresh snapshot. On failure the error is logged and the
    /// current counts stay as they were.
    pub async fn refresh<Src>(&mut self, source: &Src) -> Result<(), Src::Error>
    where
        Src: StatsSource + ?Sized,
    {
        let fetched = source.pending_counts().await;
        self.apply_fetch(fetched)
    }

    /// Apply the outcome of a stats fetch made elsewhere (the app fetches
    /// outside the reconciler so it is not borrowed across the await).
    pub fn apply_fetch<E: fmt::Display>(&mut self, fetched: Result<RawCounts, E>) -> Result<(), E> {
        match fetched {
            Ok(raw) => {
                self.apply_snapshot(raw);
                Ok(())
            }
            Err(e) => {
                log::warn!("[badges] Refresh failed, keeping previous counts: {}", e);
                Err(e)
            }
        }
    }

    /// Replace the raw counts and recompute every badge.
    ///
    /// Categories missing from the snapshot count as zero. Optimistic
    /// increments/decrements made since the last snapshot are discarded.
    pub fn apply_snapshot(&mut self, raw: RawCounts) {
        let ledger = self.store.reload();
        for category in Category::ALL {
            let server = raw.get(&category).copied().unwrap_or(0);
            self.displayed.insert(category, ledger.displayed(category, server));
        }
        log::debug!("[badges] Snapshot applied, {} pending", self.total());
        self.raw = Some(raw);
    }

    /// Acknowledge an item, or the whole category when `item_id` is the
    /// clear-all sentinel. Returns whether the badge changed.
    pub fn acknowledge(&mut self, category: Category, item_id: u64) -> bool {
        if item_id != CLEAR_ALL_SENTINEL {
            return self.mark_viewed(category, item_id);
        }
        if category.is_clear_all() {
            self.clear(category)
        } else {
            log::warn!("[badges] {} is acknowledged per item; ignoring clear-all", category);
            false
        }
    }

    /// Record that one item's detail view was opened. Repeat views are no-ops.
    pub fn mark_viewed(&mut self, category: Category, item_id: u64) -> bool {
        let changed = self.store.record(LedgerEvent::Viewed { category, item_id });
        if changed {
            self.decrement(category);
        }
        changed
    }

    /// Acknowledge everything currently pending in a category
    pub fn clear(&mut self, category: Category) -> bool {
        let through = self.store.ledger().reduction(category).saturating_add(self.count(category));
        let changed = self.store.record(LedgerEvent::Cleared { category, through });
        self.displayed.insert(category, 0);
        changed
    }

    pub fn increment(&mut self, category: Category) {
        let count = self.displayed.entry(category).or_insert(0);
        *count = count.saturating_add(1);
    }

    pub fn decrement(&mut self, category: Category) {
        let count = self.displayed.entry(category).or_insert(0);
        *count = count.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{REDUCTIONS_KEY, VIEWED_KEY};
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;

    /// Scripted source: pops one response per call
    struct FakeSource {
        responses: RefCell<Vec<Result<RawCounts, String>>>,
    }

    impl FakeSource {
        fn new(mut responses: Vec<Result<RawCounts, String>>) -> Self {
            responses.reverse();
            Self { responses: RefCell::new(responses) }
        }
    }

    #[async_trait(?Send)]
    impl StatsSource for FakeSource {
        type Error = String;

        async fn pending_counts(&self) -> Result<RawCounts, String> {
            self.responses
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| Err("no more responses".to_string()))
        }
    }

    fn raw(entries: &[(Category, u32)]) -> RawCounts {
        entries.iter().copied().collect()
    }

    #[tokio::test]
    async fn test_fetch_subtracts_stored_reduction() {
        let storage = MemoryStorage::new().with_entry(REDUCTIONS_KEY, r#"{"carers":3}"#);
        let mut reconciler = NotificationReconciler::new(storage);
        let source = FakeSource::new(vec![Ok(raw(&[(Category::Carers, 10)]))]);

        reconciler.refresh(&source).await.unwrap();

        assert_eq!(reconciler.count(Category::Carers), 7);
        assert_eq!(reconciler.count(Category::Disabilities), 0);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_counts() {
        let mut reconciler = NotificationReconciler::new(MemoryStorage::new());
        let source = FakeSource::new(vec![
            Ok(raw(&[(Category::Disabilities, 4), (Category::Contact, 2)])),
            Err("401 Unauthorized".to_string()),
        ]);

        reconciler.refresh(&source).await.unwrap();
        let before = reconciler.counts().clone();

        assert!(reconciler.refresh(&source).await.is_err());
        assert_eq!(reconciler.counts(), &before);
    }

    #[test]
    fn test_clear_all_reduces_to_zero() {
        let mut reconciler = NotificationReconciler::new(MemoryStorage::new());
        reconciler.apply_snapshot(raw(&[(Category::Donations, 6)]));
        let before = reconciler.count(Category::Donations);

        assert!(reconciler.acknowledge(Category::Donations, CLEAR_ALL_SENTINEL));

        assert_eq!(reconciler.count(Category::Donations), 0);
        assert_eq!(reconciler.ledger().reduction(Category::Donations), before);
    }

    #[test]
    fn test_clear_all_with_prior_reduction_reaches_raw() {
        let storage = MemoryStorage::new().with_entry(REDUCTIONS_KEY, r#"{"contact":3}"#);
        let mut reconciler = NotificationReconciler::new(storage);
        reconciler.apply_snapshot(raw(&[(Category::Contact, 10)]));
        assert_eq!(reconciler.count(Category::Contact), 7);

        reconciler.acknowledge(Category::Contact, CLEAR_ALL_SENTINEL);
        assert_eq!(reconciler.ledger().reduction(Category::Contact), 10);

        // Still zero after the next identical snapshot
        reconciler.apply_snapshot(raw(&[(Category::Contact, 10)]));
        assert_eq!(reconciler.count(Category::Contact), 0);
    }

    #[test]
    fn test_sentinel_ignored_for_per_item_categories() {
        let mut reconciler = NotificationReconciler::new(MemoryStorage::new());
        reconciler.apply_snapshot(raw(&[(Category::Carers, 3)]));

        assert!(!reconciler.acknowledge(Category::Carers, CLEAR_ALL_SENTINEL));
        assert_eq!(reconciler.count(Category::Carers), 3);
    }

    #[test]
    fn test_repeat_view_reduces_once() {
        let mut reconciler = NotificationReconciler::new(MemoryStorage::new());
        reconciler.apply_snapshot(raw(&[(Category::Carers, 5)]));

        for _ in 0..3 {
            reconciler.acknowledge(Category::Carers, 42);
        }

        assert_eq!(reconciler.count(Category::Carers), 4);
        reconciler.apply_snapshot(raw(&[(Category::Carers, 5)]));
        assert_eq!(reconciler.count(Category::Carers), 4);
    }

    #[test]
    fn test_displayed_clamps_when_server_count_drops() {
        let mut reconciler = NotificationReconciler::new(MemoryStorage::new());
        reconciler.apply_snapshot(raw(&[(Category::Disabilities, 2)]));
        reconciler.mark_viewed(Category::Disabilities, 1);
        reconciler.mark_viewed(Category::Disabilities, 2);

        reconciler.apply_snapshot(raw(&[(Category::Disabilities, 0)]));
        assert_eq!(reconciler.count(Category::Disabilities), 0);
        // Stale reduction is kept
        assert_eq!(reconciler.ledger().reduction(Category::Disabilities), 2);
    }

    #[test]
    fn test_optimistic_adjustments_until_next_snapshot() {
        let mut reconciler = NotificationReconciler::new(MemoryStorage::new());
        reconciler.apply_snapshot(raw(&[(Category::Contact, 1)]));

        reconciler.increment(Category::Contact);
        reconciler.increment(Category::Contact);
        assert_eq!(reconciler.count(Category::Contact), 3);

        for _ in 0..5 {
            reconciler.decrement(Category::Contact);
        }
        assert_eq!(reconciler.count(Category::Contact), 0);

        reconciler.apply_snapshot(raw(&[(Category::Contact, 1)]));
        assert_eq!(reconciler.count(Category::Contact), 1);
    }

    #[test]
    fn test_view_before_first_snapshot_is_remembered() {
        let storage = MemoryStorage::new();
        let mut reconciler = NotificationReconciler::new(storage.clone());
        assert!(!reconciler.has_snapshot());

        reconciler.mark_viewed(Category::CustomerSupport, 9);
        reconciler.apply_snapshot(raw(&[(Category::CustomerSupport, 4)]));

        assert_eq!(reconciler.count(Category::CustomerSupport), 3);
        assert!(storage.get(VIEWED_KEY).unwrap().unwrap().contains("customer-support"));
    }

    #[test]
    fn test_view_of_item_newer_than_snapshot_still_reduces() {
        let mut reconciler = NotificationReconciler::new(MemoryStorage::new());
        reconciler.apply_snapshot(raw(&[(Category::Carers, 1)]));

        // Item 2 arrived after the last poll; the admin opens both
        reconciler.mark_viewed(Category::Carers, 1);
        reconciler.mark_viewed(Category::Carers, 2);
        assert_eq!(reconciler.ledger().reduction(Category::Carers), 2);

        reconciler.apply_snapshot(raw(&[(Category::Carers, 2)]));
        assert_eq!(reconciler.count(Category::Carers), 0);
    }

    #[test]
    fn test_clear_after_optimistic_adjustments() {
        let storage = MemoryStorage::new().with_entry(REDUCTIONS_KEY, r#"{"donations":2}"#);
        let mut reconciler = NotificationReconciler::new(storage);
        reconciler.apply_snapshot(raw(&[(Category::Donations, 5)]));
        assert_eq!(reconciler.count(Category::Donations), 3);

        reconciler.increment(Category::Donations);
        reconciler.increment(Category::Donations);
        reconciler.decrement(Category::Donations);
        assert_eq!(reconciler.count(Category::Donations), 4);

        assert!(reconciler.clear(Category::Donations));
        assert_eq!(reconciler.count(Category::Donations), 0);
        // reduction + displayed at the time of the clear
        assert_eq!(reconciler.ledger().reduction(Category::Donations), 6);

        reconciler.apply_snapshot(raw(&[(Category::Donations, 6)]));
        assert_eq!(reconciler.count(Category::Donations), 0);
    }

    #[test]
    fn test_huge_server_counts_do_not_overflow() {
        let mut reconciler = NotificationReconciler::new(MemoryStorage::new());
        reconciler.apply_snapshot(raw(&[(Category::Carers, u32::MAX), (Category::Contact, 1)]));
        assert_eq!(reconciler.total(), u32::MAX);

        reconciler.increment(Category::Carers);
        assert_eq!(reconciler.count(Category::Carers), u32::MAX);
    }

    #[test]
    fn test_clear_saturates_corrupt_reduction() {
        let storage = MemoryStorage::new().with_entry(REDUCTIONS_KEY, &format!(r#"{{"contact":{}}}"#, u32::MAX - 1));
        let mut reconciler = NotificationReconciler::new(storage);
        reconciler.apply_snapshot(raw(&[(Category::Contact, 1)]));
        reconciler.increment(Category::Contact);
        reconciler.increment(Category::Contact);

        reconciler.clear(Category::Contact);
        assert_eq!(reconciler.ledger().reduction(Category::Contact), u32::MAX);
    }

    #[test]
    fn test_apply_fetch_error_keeps_counts() {
        let mut reconciler = NotificationReconciler::new(MemoryStorage::new());
        reconciler.apply_snapshot(raw(&[(Category::Carers, 2)]));

        assert!(reconciler.apply_fetch(Err::<RawCounts, _>("offline")).is_err());
        assert_eq!(reconciler.count(Category::Carers), 2);

        assert!(reconciler.apply_fetch::<String>(Ok(raw(&[(Category::Carers, 4)]))).is_ok());
        assert_eq!(reconciler.count(Category::Carers), 4);
    }

    #[test]
    fn test_invariant_over_many_snapshots() {
        let storage = MemoryStorage::new().with_entry(
            REDUCTIONS_KEY,
            r#"{"disabilities":2,"carers":7,"donations":1,"contact":30}"#,
        );
        let mut reconciler = NotificationReconciler::new(storage);
        for n in 0..15u32 {
            let snapshot: RawCounts = Category::ALL.into_iter().map(|c| (c, n)).collect();
            reconciler.apply_snapshot(snapshot);
            for category in Category::ALL {
                let reduction = reconciler.ledger().reduction(category);
                assert_eq!(reconciler.count(category), n.saturating_sub(reduction));
            }
        }
    }
}
