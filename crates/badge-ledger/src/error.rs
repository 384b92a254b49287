//! Ledger Errors

use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Unknown badge category: {0}")]
    UnknownCategory(String),

    #[error("Storage unavailable: {0}")]
    Storage(String),

    #[error("Malformed ledger entry under {key}: {source}")]
    Codec {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
