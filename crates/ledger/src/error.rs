//! The module contains the errors the ledger can throw.
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("cannot open expense store at \"{path}\": {source}")]
    Connection {
        path: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}
