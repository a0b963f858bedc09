//! Wallet pairing — adapter over the external pairing capability.
//!
//! The capability (a WalletConnect-style connector) is consumed through the
//! [`WalletConnector`] trait; the [`PairingClient`] adapter adds the pieces
//! the session layer relies on: one-time initialization shared across
//! concurrent callers, bounded collaborator calls, and access to the active
//! signer.

use std::sync::Arc;
use std::time::Duration;

use async_lock::Mutex;
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::PairingError;
use crate::ledger::TransactionSigner;
use crate::shared::timeout::bounded;

/// The external wallet-pairing capability.
///
/// `signers` is an ordered sequence; the first entry is the active signer.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Expensive one-time setup of the pairing transport.
    async fn init(&self) -> Result<(), PairingError>;

    /// Run the modal-driven pairing flow to completion.
    async fn open_modal(&self) -> Result<(), PairingError>;

    /// Tear down every active pairing.
    async fn disconnect_all(&self) -> Result<(), PairingError>;

    /// Signers for the currently paired accounts.
    fn signers(&self) -> Vec<Arc<dyn TransactionSigner>>;
}

/// Adapter owning the pairing capability.
pub struct PairingClient {
    connector: Arc<dyn WalletConnector>,
    /// Completed-or-failed marker for the one-time init. Holding the lock
    /// across the underlying call makes concurrent callers queue behind the
    /// first one and then observe its recorded outcome.
    init_outcome: Mutex<Option<Result<(), PairingError>>>,
    call_timeout: Option<Duration>,
}

impl PairingClient {
    pub fn new(connector: Arc<dyn WalletConnector>, call_timeout: Option<Duration>) -> Self {
        Self {
            connector,
            init_outcome: Mutex::new(None),
            call_timeout,
        }
    }

    /// Initialize the pairing capability at most once per process.
    ///
    /// Every caller, first or late, gets the same outcome — including a
    /// failure, which is recorded and never retried implicitly.
    pub async fn initialize(&self) -> Result<(), PairingError> {
        let mut outcome = self.init_outcome.lock().await;
        if let Some(existing) = outcome.as_ref() {
            return existing.clone();
        }

        let result = match bounded(self.connector.init(), self.call_timeout).await {
            Ok(inner) => inner,
            Err(elapsed) => Err(PairingError::Timeout(elapsed.limit)),
        };
        if let Err(e) = &result {
            warn!(error = %e, "wallet pairing initialization failed");
        }
        *outcome = Some(result.clone());
        result
    }

    /// Run the external pairing modal.
    ///
    /// Returns `false` without touching the collaborator when a pairing is
    /// already active.
    pub async fn open_modal(&self) -> Result<bool, PairingError> {
        if self.current_signer().is_some() {
            debug!("pairing already active; modal skipped");
            return Ok(false);
        }
        match bounded(self.connector.open_modal(), self.call_timeout).await {
            Ok(inner) => inner.map(|()| true),
            Err(elapsed) => Err(PairingError::Timeout(elapsed.limit)),
        }
    }

    /// Tear down every active pairing.
    ///
    /// Returns `false` without touching the collaborator when nothing is
    /// paired.
    pub async fn disconnect_all(&self) -> Result<bool, PairingError> {
        if self.current_signer().is_none() {
            debug!("no active pairing; teardown skipped");
            return Ok(false);
        }
        match bounded(self.connector.disconnect_all(), self.call_timeout).await {
            Ok(inner) => inner.map(|()| true),
            Err(elapsed) => Err(PairingError::Timeout(elapsed.limit)),
        }
    }

    /// The active signer: first entry of the connector's signer sequence.
    pub fn current_signer(&self) -> Option<Arc<dyn TransactionSigner>> {
        self.connector.signers().into_iter().next()
    }
}
