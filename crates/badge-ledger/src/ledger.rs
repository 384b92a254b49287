//! Acknowledgement Ledger
//!
//! Per-category viewed sets and permanent reductions. All mutation goes
//! through [`LedgerEvent`] so the same rules apply no matter which page
//! (or which browser tab) produced the change.

use std::collections::{BTreeMap, BTreeSet};

use serde::de::DeserializeOwned;

use crate::category::Category;
use crate::error::{LedgerError, LedgerResult};

/// Storage key holding `{ category: [itemId, ...] }`
pub const VIEWED_KEY: &str = "viewedApplications";
/// Storage key holding `{ category: reduction }`
pub const REDUCTIONS_KEY: &str = "permanentReductions";

/// A single acknowledgement made by the admin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEvent {
    /// Detail view of one item was opened
    Viewed { category: Category, item_id: u64 },
    /// Whole category acknowledged; reduction becomes at least `through`
    Cleared { category: Category, through: u32 },
}

impl LedgerEvent {
    pub fn category(&self) -> Category {
        match *self {
            LedgerEvent::Viewed { category, .. } | LedgerEvent::Cleared { category, .. } => category,
        }
    }
}

/// In-memory copy of the persisted ledger.
///
/// Keys are kept as raw strings so entries written by a newer build with
/// extra categories survive a round trip through an older one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    viewed: BTreeMap<String, BTreeSet<u64>>,
    reductions: BTreeMap<String, u32>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event. Returns `true` when the ledger changed.
    ///
    /// The first view of an item adds one to the reduction; later views of
    /// the same item change nothing.
    pub fn apply(&mut self, event: LedgerEvent) -> bool {
        let key = event.category().key();
        match event {
            LedgerEvent::Viewed { item_id, .. } => {
                let newly_viewed = self.viewed.entry(key.to_string()).or_default().insert(item_id);
                if !newly_viewed {
                    return false;
                }
                let reduction = self.reductions.entry(key.to_string()).or_insert(0);
                *reduction = reduction.saturating_add(1);
                true
            }
            LedgerEvent::Cleared { through, .. } => {
                let reduction = self.reductions.entry(key.to_string()).or_insert(0);
                if through > *reduction {
                    *reduction = through;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn reduction(&self, category: Category) -> u32 {
        self.reductions.get(category.key()).copied().unwrap_or(0)
    }

    pub fn is_viewed(&self, category: Category, item_id: u64) -> bool {
        self.viewed
            .get(category.key())
            .is_some_and(|ids| ids.contains(&item_id))
    }

    pub fn viewed(&self, category: Category) -> impl Iterator<Item = u64> + '_ {
        self.viewed.get(category.key()).into_iter().flat_map(|ids| ids.iter().copied())
    }

    /// Badge value for a raw server count
    pub fn displayed(&self, category: Category, raw: u32) -> u32 {
        raw.saturating_sub(self.reduction(category))
    }

    pub fn encode_viewed(&self) -> LedgerResult<String> {
        serde_json::to_string(&self.viewed).map_err(|source| LedgerError::Codec {
            key: VIEWED_KEY,
            source,
        })
    }

    pub fn encode_reductions(&self) -> LedgerResult<String> {
        serde_json::to_string(&self.reductions).map_err(|source| LedgerError::Codec {
            key: REDUCTIONS_KEY,
            source,
        })
    }

    /// Rebuild from the two stored blobs. Missing blobs mean empty maps.
    pub fn decode(viewed: Option<&str>, reductions: Option<&str>) -> LedgerResult<Self> {
        Ok(Self {
            viewed: decode_entry(VIEWED_KEY, viewed)?,
            reductions: decode_entry(REDUCTIONS_KEY, reductions)?,
        })
    }

    /// Like [`Ledger::decode`], but a malformed blob is logged and dropped
    /// instead of failing the whole load.
    pub fn decode_lenient(viewed: Option<&str>, reductions: Option<&str>) -> Self {
        Self {
            viewed: decode_entry(VIEWED_KEY, viewed).unwrap_or_else(|e| {
                log::warn!("[ledger] {}; starting with no viewed items", e);
                BTreeMap::new()
            }),
            reductions: decode_entry(REDUCTIONS_KEY, reductions).unwrap_or_else(|e| {
                log::warn!("[ledger] {}; starting with no reductions", e);
                BTreeMap::new()
            }),
        }
    }
}

fn decode_entry<T: DeserializeOwned + Default>(key: &'static str, raw: Option<&str>) -> LedgerResult<T> {
    match raw {
        None => Ok(T::default()),
        Some(s) if s.trim().is_empty() => Ok(T::default()),
        Some(s) => serde_json::from_str(s).map_err(|source| LedgerError::Codec { key, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewed(category: Category, item_id: u64) -> LedgerEvent {
        LedgerEvent::Viewed { category, item_id }
    }

    #[test]
    fn test_view_is_idempotent_per_item() {
        let mut ledger = Ledger::new();
        assert!(ledger.apply(viewed(Category::Carers, 42)));
        assert!(!ledger.apply(viewed(Category::Carers, 42)));
        assert!(!ledger.apply(viewed(Category::Carers, 42)));
        assert_eq!(ledger.reduction(Category::Carers), 1);
        assert!(ledger.is_viewed(Category::Carers, 42));
    }

    #[test]
    fn test_each_new_view_grows_reduction() {
        let mut ledger = Ledger::new();
        ledger.apply(viewed(Category::Disabilities, 1));
        ledger.apply(viewed(Category::Disabilities, 2));
        assert_eq!(ledger.reduction(Category::Disabilities), 2);
        assert!(ledger.is_viewed(Category::Disabilities, 2));
    }

    #[test]
    fn test_view_saturates_corrupt_reduction() {
        let mut ledger = Ledger::decode(None, Some(&format!(r#"{{"carers":{}}}"#, u32::MAX))).unwrap();
        assert!(ledger.apply(viewed(Category::Carers, 1)));
        assert_eq!(ledger.reduction(Category::Carers), u32::MAX);
    }

    #[test]
    fn test_clear_only_grows() {
        let mut ledger = Ledger::new();
        assert!(ledger.apply(LedgerEvent::Cleared { category: Category::Donations, through: 5 }));
        assert!(!ledger.apply(LedgerEvent::Cleared { category: Category::Donations, through: 3 }));
        assert_eq!(ledger.reduction(Category::Donations), 5);
    }

    #[test]
    fn test_displayed_never_negative() {
        let mut ledger = Ledger::new();
        ledger.apply(LedgerEvent::Cleared { category: Category::Contact, through: 9 });
        for raw in 0..20 {
            let shown = ledger.displayed(Category::Contact, raw);
            assert_eq!(shown, raw.saturating_sub(9));
        }
        assert_eq!(ledger.displayed(Category::Carers, 4), 4);
    }

    #[test]
    fn test_viewed_round_trip_preserves_membership() {
        let mut ledger = Ledger::new();
        for id in [7, 3, 11] {
            ledger.apply(viewed(Category::Carers, id));
        }
        ledger.apply(viewed(Category::CustomerSupport, 99));

        let v = ledger.encode_viewed().unwrap();
        let r = ledger.encode_reductions().unwrap();
        let restored = Ledger::decode(Some(&v), Some(&r)).unwrap();

        assert_eq!(restored, ledger);
        assert_eq!(restored.viewed(Category::Carers).collect::<Vec<_>>(), vec![3, 7, 11]);
        assert!(!restored.is_viewed(Category::Carers, 99));
    }

    #[test]
    fn test_decode_keeps_unknown_categories() {
        let ledger = Ledger::decode(Some(r#"{"partners":[1,2]}"#), Some(r#"{"partners":2,"carers":1}"#)).unwrap();
        assert_eq!(ledger.reduction(Category::Carers), 1);
        let encoded = ledger.encode_reductions().unwrap();
        assert!(encoded.contains("partners"));
    }

    #[test]
    fn test_decode_lenient_drops_only_the_bad_blob() {
        let ledger = Ledger::decode_lenient(Some("not json"), Some(r#"{"carers":3}"#));
        assert_eq!(ledger.reduction(Category::Carers), 3);
        assert_eq!(ledger.viewed(Category::Carers).count(), 0);

        assert!(Ledger::decode(Some("not json"), None).is_err());
    }
}
