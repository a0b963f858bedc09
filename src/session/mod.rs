//! Session controller — the wallet-connection state machine.
//!
//! Two states, `Disconnected` and `Connected(account)`, cycling for the
//! process lifetime. [`SessionController::sync_state`] is the only
//! authoritative transition: it reconciles the in-memory state, the durable
//! store, and the display against the pairing capability's actual signer
//! set. Restore-from-storage is optimistic — a later sync corrects it if
//! the pairing went stale.

pub mod store;

use std::sync::Arc;

use async_lock::RwLock;
use tracing::{debug, info, warn};

use crate::error::SdkError;
use crate::ledger::TransactionSigner;
use crate::pairing::PairingClient;
use crate::session::store::SessionStore;
use crate::shared::AccountId;

pub use store::{KeyValueStore, MemoryStore, PersistedSession};

/// Sentinel handed to the display callback while disconnected.
pub const NO_ACCOUNT_CONNECTED: &str = "No account connected";

/// Display callback: receives the account id or [`NO_ACCOUNT_CONNECTED`].
pub type DisplayFn = Arc<dyn Fn(&str) + Send + Sync>;

/// In-memory connection state.
///
/// `is_connected` is carried redundantly for cheap checks; the private
/// constructors are the only way to build one, so
/// `is_connected == account_id.is_some()` holds in every reachable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionState {
    account_id: Option<AccountId>,
    is_connected: bool,
}

impl ConnectionState {
    fn disconnected() -> Self {
        Self {
            account_id: None,
            is_connected: false,
        }
    }

    fn connected(account_id: AccountId) -> Self {
        Self {
            account_id: Some(account_id),
            is_connected: true,
        }
    }

    pub fn account_id(&self) -> Option<&AccountId> {
        self.account_id.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected
    }
}

/// Owns the connection state and keeps it consistent with the pairing
/// capability and the durable store.
pub struct SessionController {
    pairing: PairingClient,
    store: SessionStore,
    state: RwLock<ConnectionState>,
    display: DisplayFn,
}

impl SessionController {
    pub fn new(pairing: PairingClient, store: SessionStore, display: DisplayFn) -> Self {
        Self {
            pairing,
            store,
            state: RwLock::new(ConnectionState::disconnected()),
            display,
        }
    }

    /// One-time setup of the pairing capability; safe to call from any
    /// number of callers.
    pub async fn initialize(&self) -> Result<(), SdkError> {
        self.pairing.initialize().await?;
        Ok(())
    }

    /// Current state snapshot.
    pub async fn state(&self) -> ConnectionState {
        self.state.read().await.clone()
    }

    pub async fn account_id(&self) -> Option<AccountId> {
        self.state.read().await.account_id.clone()
    }

    pub async fn is_connected(&self) -> bool {
        self.state.read().await.is_connected
    }

    /// The active signer, re-obtained from the pairing capability on every
    /// call; never cached or persisted.
    pub fn signer(&self) -> Option<Arc<dyn TransactionSigner>> {
        self.pairing.current_signer()
    }

    pub fn pairing(&self) -> &PairingClient {
        &self.pairing
    }

    /// Pair a wallet: initialize, run the modal flow, reconcile.
    ///
    /// A no-op (zero collaborator calls) while already connected. Modal
    /// failures are logged and leave the state untouched.
    pub async fn connect(&self) -> Result<(), SdkError> {
        self.pairing.initialize().await.map_err(|e| {
            warn!(error = %e, "cannot connect: pairing initialization failed");
            e
        })?;

        if self.is_connected().await {
            info!("already connected");
            return Ok(());
        }

        match self.pairing.open_modal().await {
            Ok(_) => {
                self.sync_state().await;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "wallet pairing modal failed");
                Err(e.into())
            }
        }
    }

    /// Tear down the pairing and clear every trace of the session.
    ///
    /// A no-op while disconnected. Teardown failure is logged but the local
    /// and persisted state are cleared regardless — a consistent local view
    /// beats a possibly-stale remote pairing.
    pub async fn disconnect(&self) -> Result<(), SdkError> {
        if !self.is_connected().await {
            info!("no active session to disconnect from");
            return Ok(());
        }

        if let Err(e) = self.pairing.disconnect_all().await {
            warn!(error = %e, "wallet teardown failed; clearing local session anyway");
        }

        *self.state.write().await = ConnectionState::disconnected();
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear persisted session");
        }

        self.sync_state().await;
        info!("disconnected from wallet");
        Ok(())
    }

    /// Reconcile state, persistence, and display with the pairing
    /// capability's signer set. The only authoritative transition function;
    /// called after every pairing mutation.
    pub async fn sync_state(&self) {
        let account = self
            .pairing
            .current_signer()
            .map(|signer| signer.account_id());

        match account {
            Some(account_id) => {
                *self.state.write().await = ConnectionState::connected(account_id.clone());
                if let Err(e) = self.store.save(account_id.as_str()) {
                    warn!(error = %e, "failed to persist session");
                }
                (self.display)(account_id.as_str());
                debug!(account = %account_id, "session state synced: connected");
            }
            None => {
                *self.state.write().await = ConnectionState::disconnected();
                if let Err(e) = self.store.clear() {
                    warn!(error = %e, "failed to clear persisted session");
                }
                (self.display)(NO_ACCOUNT_CONNECTED);
                debug!("session state synced: disconnected");
            }
        }
    }

    /// Optimistically restore a persisted session at startup.
    ///
    /// The signer is not re-verified here; a later [`Self::sync_state`]
    /// corrects a stale restore. Invalid or partial persisted state leaves
    /// the controller disconnected.
    pub async fn restore_from_storage(&self) {
        let Some(session) = self.store.load() else {
            debug!("no valid persisted session to restore");
            return;
        };

        let account_id = AccountId::from(session.account_id);
        *self.state.write().await = ConnectionState::connected(account_id.clone());
        (self.display)(account_id.as_str());
        info!(account = %account_id, "session restored from storage");
    }
}
