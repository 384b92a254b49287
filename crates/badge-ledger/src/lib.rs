//! Badge Ledger
//!
//! Pending-work badge counts for the admin sidebar. The server reports raw
//! pending counts per category; this crate subtracts what the admin has
//! already acknowledged on this device and keeps that bookkeeping in a
//! durable key/value store.
//!
//! - `category`: badge categories and their storage keys
//! - `ledger`: viewed sets and permanent reductions, event-driven
//! - `storage`: storage abstraction and the single-writer store
//! - `reconciler`: raw counts + ledger -> displayed counts

mod category;
mod error;
mod ledger;
mod reconciler;
mod storage;

pub use category::Category;
pub use error::{LedgerError, LedgerResult};
pub use ledger::{Ledger, LedgerEvent, REDUCTIONS_KEY, VIEWED_KEY};
pub use reconciler::{NotificationReconciler, RawCounts, StatsSource, CLEAR_ALL_SENTINEL};
pub use storage::{LedgerStorage, LedgerStore, MemoryStorage};
