//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::BTreeMap;

use badge_ledger::Category;
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Whether an admin token is stored
    pub signed_in: bool,
    /// Sidebar badge values, mirrored from the notification reconciler
    pub badges: BTreeMap<Category, u32>,
}

impl AppState {
    pub fn new(signed_in: bool) -> Self {
        Self {
            signed_in,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
