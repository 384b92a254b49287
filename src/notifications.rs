//! Sidebar Notifications
//!
//! Reactive wrapper around [`NotificationReconciler`]: owns the reconciler,
//! mirrors its counts into the app store and polls the dashboard stats
//! endpoint on a timer.

use std::time::Duration;

use badge_ledger::{Category, NotificationReconciler, StatsSource};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::storage::BrowserStorage;
use crate::store::{AppStateStoreFields, AppStore};

#[derive(Clone, Copy)]
pub struct NotificationCenter {
    reconciler: StoredValue<NotificationReconciler<BrowserStorage>>,
    store: AppStore,
}

impl NotificationCenter {
    pub fn new(store: AppStore) -> Self {
        Self {
            reconciler: StoredValue::new(NotificationReconciler::new(BrowserStorage)),
            store,
        }
    }

    /// Reactive badge value
    pub fn count(&self, category: Category) -> u32 {
        self.store.badges().with(|badges| badges.get(&category).copied().unwrap_or(0))
    }

    pub fn total(&self) -> u32 {
        self.store
            .badges()
            .with(|badges| badges.values().fold(0u32, |acc, n| acc.saturating_add(*n)))
    }

    /// Whether this browser has opened the item's detail view
    pub fn is_viewed(&self, category: Category, item_id: u64) -> bool {
        self.reconciler.with_value(|r| r.ledger().is_viewed(category, item_id))
    }

    fn publish(&self) {
        let counts = self.reconciler.with_value(|r| r.counts().clone());
        self.store.badges().set(counts);
    }

    /// Fetch a fresh snapshot in the background. Requests are not
    /// deduplicated; a slow one may overlap the next tick.
    pub fn refresh(&self) {
        let this = *self;
        spawn_local(async move {
            let client = ApiClient::from_browser();
            if !client.has_token() {
                return;
            }
            let fetched = client.pending_counts().await;
            let applied = this.reconciler.try_update_value(|r| r.apply_fetch(fetched).is_ok());
            if applied == Some(true) {
                this.publish();
            }
        });
    }

    /// Refresh now and then every `every`, for the life of the page
    pub fn start_polling(&self, every: Duration) {
        let this = *self;
        let millis = u32::try_from(every.as_millis()).unwrap_or(u32::MAX);
        this.refresh();
        spawn_local(async move {
            loop {
                TimeoutFuture::new(millis).await;
                this.refresh();
            }
        });
    }

    /// Detail view opened (or, with the sentinel id, a clear-all page)
    pub fn acknowledge(&self, category: Category, item_id: u64) {
        let changed = self.reconciler.try_update_value(|r| r.acknowledge(category, item_id));
        if changed == Some(true) {
            self.publish();
        }
    }

    pub fn increment(&self, category: Category) {
        self.reconciler.update_value(|r| r.increment(category));
        self.publish();
    }

    pub fn decrement(&self, category: Category) {
        self.reconciler.update_value(|r| r.decrement(category));
        self.publish();
    }
}

pub fn use_notifications() -> NotificationCenter {
    expect_context::<NotificationCenter>()
}
