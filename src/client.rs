//! High-level client — `HashbridgeClient` with nested sub-client accessors.
//!
//! The builder wires the external collaborators (wallet connector, durable
//! store, display callback) into the session controller; the accessors hand
//! out the session and lifecycle surfaces.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::config::PairingConfig;
use crate::error::SdkError;
use crate::lifecycle::Lifecycle;
use crate::pairing::{PairingClient, WalletConnector};
use crate::session::store::{KeyValueStore, MemoryStore, SessionStore};
use crate::session::{DisplayFn, SessionController};

/// The primary entry point of the SDK.
pub struct HashbridgeClient {
    pub(crate) session: SessionController,
    pub(crate) config: PairingConfig,
    /// Optional bound on every collaborator call. `None` waits forever.
    pub(crate) call_timeout: Option<Duration>,
}

impl HashbridgeClient {
    pub fn builder() -> HashbridgeClientBuilder {
        HashbridgeClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    /// Wallet session state machine: connect, disconnect, restore, sync.
    pub fn session(&self) -> &SessionController {
        &self.session
    }

    /// Asset lifecycle pipeline: create → mint → amend, plus standalone
    /// amendment.
    pub fn lifecycle(&self) -> Lifecycle<'_> {
        Lifecycle { client: self }
    }

    /// The pairing configuration this client was built with.
    pub fn config(&self) -> &PairingConfig {
        &self.config
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct HashbridgeClientBuilder {
    connector: Option<Arc<dyn WalletConnector>>,
    store: Option<Arc<dyn KeyValueStore>>,
    display: Option<DisplayFn>,
    config: PairingConfig,
    call_timeout: Option<Duration>,
}

impl Default for HashbridgeClientBuilder {
    fn default() -> Self {
        Self {
            connector: None,
            store: None,
            display: None,
            config: PairingConfig::default(),
            call_timeout: None,
        }
    }
}

impl HashbridgeClientBuilder {
    /// The external wallet-pairing capability. Required.
    pub fn connector(mut self, connector: Arc<dyn WalletConnector>) -> Self {
        self.connector = Some(connector);
        self
    }

    /// Durable backing for the persisted session. Defaults to an in-memory
    /// store.
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Callback invoked with the connected account id or the disconnected
    /// sentinel. Defaults to a log line.
    pub fn display(mut self, display: DisplayFn) -> Self {
        self.display = Some(display);
        self
    }

    pub fn config(mut self, config: PairingConfig) -> Self {
        self.config = config;
        self
    }

    /// Bound every collaborator call by `limit`. Off by default.
    pub fn call_timeout(mut self, limit: Duration) -> Self {
        self.call_timeout = Some(limit);
        self
    }

    pub fn build(self) -> Result<HashbridgeClient, SdkError> {
        let connector = self
            .connector
            .ok_or_else(|| SdkError::Validation("a wallet connector is required".to_string()))?;
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryStore::new()));
        let display: DisplayFn = self.display.unwrap_or_else(|| {
            Arc::new(|account: &str| info!(account, "session display updated"))
        });

        let pairing = PairingClient::new(connector, self.call_timeout);
        let session = SessionController::new(pairing, SessionStore::new(store), display);

        Ok(HashbridgeClient {
            session,
            config: self.config,
            call_timeout: self.call_timeout,
        })
    }
}
