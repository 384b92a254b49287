//! Browser Storage
//!
//! `window.localStorage` access: the admin session token and the badge
//! ledger's backing store.

use badge_ledger::{LedgerError, LedgerResult, LedgerStorage};

/// Storage key for the admin bearer token
pub const TOKEN_KEY: &str = "adminToken";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// `localStorage`, looked up on every call so the handle stays `Send + Sync`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl LedgerStorage for BrowserStorage {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let storage = local_storage().ok_or_else(|| LedgerError::Storage("localStorage unavailable".into()))?;
        storage
            .get_item(key)
            .map_err(|e| LedgerError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        let storage = local_storage().ok_or_else(|| LedgerError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| LedgerError::Storage(format!("{:?}", e)))
    }
}

pub fn admin_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn set_admin_token(token: &str) {
    match local_storage() {
        Some(storage) => {
            if let Err(e) = storage.set_item(TOKEN_KEY, token) {
                log::error!("[session] Failed to store token: {:?}", e);
            }
        }
        None => log::error!("[session] localStorage unavailable; token not stored"),
    }
}

pub fn clear_admin_token() {
    match local_storage() {
        Some(storage) => {
            if let Err(e) = storage.remove_item(TOKEN_KEY) {
                log::error!("[session] Failed to clear token: {:?}", e);
            }
        }
        None => log::error!("[session] localStorage unavailable; token not cleared"),
    }
}
