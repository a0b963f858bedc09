//! Unified SDK error types.

use std::time::Duration;

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Pairing error: {0}")]
    Pairing(#[from] PairingError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Wallet-pairing errors.
///
/// `Clone` so a failed one-time initialization can hand every caller the
/// same outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),

    #[error("Pairing modal failed: {0}")]
    ModalFailed(String),

    #[error("Disconnect failed: {0}")]
    DisconnectFailed(String),

    #[error("No active signer")]
    NoActiveSigner,

    #[error("Pairing call timed out after {0:?}")]
    Timeout(Duration),
}

/// Ledger submission errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Transaction is not frozen")]
    NotFrozen,

    #[error("Transaction is already frozen")]
    AlreadyFrozen,

    #[error("Invalid authority key: {0}")]
    InvalidKey(String),

    #[error("Submission failed: {0}")]
    Submit(String),

    #[error("Receipt unavailable: {0}")]
    Receipt(String),

    #[error("Receipt status {status}")]
    BadStatus { status: String },

    #[error("Receipt carries no token id")]
    MissingTokenId,

    #[error("Receipt carries no minted serial")]
    MissingSerial,

    #[error("Canonical encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Ledger call timed out after {0:?}")]
    Timeout(Duration),
}

/// Durable session-storage errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
