//! Shared mock collaborators for the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use hashbridge::error::{LedgerError, PairingError};
use hashbridge::prelude::*;

// ─── MockSigner ──────────────────────────────────────────────────────────────

/// One executed envelope, as the signer saw it.
#[derive(Debug, Clone)]
pub struct ExecutedTx {
    pub body: TransactionBody,
    pub signatures: usize,
}

/// Scriptable ledger signer: counts calls, records executed envelopes,
/// answers receipts keyed on the last executed body kind.
pub struct MockSigner {
    pub account: AccountId,
    pub freeze_calls: AtomicU32,
    pub execute_calls: AtomicU32,
    pub receipt_calls: AtomicU32,
    pub executed: Mutex<Vec<ExecutedTx>>,
    /// Body kind whose execution should fail.
    pub fail_execute_kind: Mutex<Option<&'static str>>,
    /// Artificial latency before execute resolves.
    pub execute_delay: Mutex<Option<Duration>>,
    /// Token id handed out by create receipts.
    pub created_token_id: &'static str,
    /// Serial handed out by mint receipts.
    pub minted_serial: u64,
    last_kind: Mutex<Option<&'static str>>,
}

impl MockSigner {
    pub fn new(account: &str) -> Arc<Self> {
        Arc::new(Self {
            account: AccountId::from(account),
            freeze_calls: AtomicU32::new(0),
            execute_calls: AtomicU32::new(0),
            receipt_calls: AtomicU32::new(0),
            executed: Mutex::new(Vec::new()),
            fail_execute_kind: Mutex::new(None),
            execute_delay: Mutex::new(None),
            created_token_id: "0.0.7001",
            minted_serial: 1,
            last_kind: Mutex::new(None),
        })
    }

    pub fn fail_execute_for(&self, kind: &'static str) {
        *self.fail_execute_kind.lock().unwrap() = Some(kind);
    }

    pub fn delay_execute(&self, delay: Duration) {
        *self.execute_delay.lock().unwrap() = Some(delay);
    }

    pub fn executed_kinds(&self) -> Vec<&'static str> {
        self.executed
            .lock()
            .unwrap()
            .iter()
            .map(|tx| tx.body.kind())
            .collect()
    }

    pub fn executed_txs(&self) -> Vec<ExecutedTx> {
        self.executed.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionSigner for MockSigner {
    fn account_id(&self) -> AccountId {
        self.account.clone()
    }

    async fn populate(&self, envelope: &mut TransactionEnvelope) -> Result<(), LedgerError> {
        self.freeze_calls.fetch_add(1, Ordering::SeqCst);
        envelope.ensure_transaction_id(&self.account);
        Ok(())
    }

    async fn execute(&self, envelope: &TransactionEnvelope) -> Result<SubmitResult, LedgerError> {
        self.execute_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.execute_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let kind = envelope.body().kind();
        if *self.fail_execute_kind.lock().unwrap() == Some(kind) {
            return Err(LedgerError::Submit(format!("injected failure for {kind}")));
        }

        self.executed.lock().unwrap().push(ExecutedTx {
            body: envelope.body().clone(),
            signatures: envelope.signatures().len(),
        });
        *self.last_kind.lock().unwrap() = Some(kind);

        let transaction_id = envelope
            .transaction_id()
            .cloned()
            .ok_or_else(|| LedgerError::Submit("envelope has no transaction id".into()))?;
        Ok(SubmitResult { transaction_id })
    }

    async fn receipt(&self, _submitted: &SubmitResult) -> Result<Receipt, LedgerError> {
        self.receipt_calls.fetch_add(1, Ordering::SeqCst);
        let mut receipt = Receipt::success();
        match *self.last_kind.lock().unwrap() {
            Some("token_create") => {
                receipt.token_id = Some(TokenId::from(self.created_token_id));
            }
            Some("token_mint") => {
                receipt.serials = vec![self.minted_serial];
                receipt.total_supply = Some(1);
            }
            _ => {}
        }
        Ok(receipt)
    }
}

// ─── MockConnector ───────────────────────────────────────────────────────────

/// Scriptable pairing capability: counts collaborator calls and manages a
/// single-slot signer set.
pub struct MockConnector {
    pub init_calls: AtomicU32,
    pub modal_calls: AtomicU32,
    pub disconnect_calls: AtomicU32,
    pub fail_init: bool,
    pub fail_modal: bool,
    pub fail_disconnect: bool,
    /// Artificial latency before init resolves.
    pub init_delay: Option<Duration>,
    signer: Mutex<Option<Arc<MockSigner>>>,
    pair_on_modal: Mutex<Option<Arc<MockSigner>>>,
}

impl MockConnector {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::blank())
    }

    pub fn failing(init: bool, modal: bool, disconnect: bool) -> Arc<Self> {
        let mut connector = Self::blank();
        connector.fail_init = init;
        connector.fail_modal = modal;
        connector.fail_disconnect = disconnect;
        Arc::new(connector)
    }

    pub fn slow_init(delay: Duration) -> Arc<Self> {
        let mut connector = Self::blank();
        connector.init_delay = Some(delay);
        Arc::new(connector)
    }

    fn blank() -> Self {
        Self {
            init_calls: AtomicU32::new(0),
            modal_calls: AtomicU32::new(0),
            disconnect_calls: AtomicU32::new(0),
            fail_init: false,
            fail_modal: false,
            fail_disconnect: false,
            init_delay: None,
            signer: Mutex::new(None),
            pair_on_modal: Mutex::new(None),
        }
    }

    /// Install a signer immediately, as if a pairing already completed.
    pub fn pair_now(&self, signer: Arc<MockSigner>) {
        *self.signer.lock().unwrap() = Some(signer);
    }

    /// Install this signer when the modal flow completes.
    pub fn pair_on_modal(&self, signer: Arc<MockSigner>) {
        *self.pair_on_modal.lock().unwrap() = Some(signer);
    }

    /// Drop the active signer, as if the wallet ended the session.
    pub fn unpair(&self) {
        *self.signer.lock().unwrap() = None;
    }
}

#[async_trait]
impl WalletConnector for MockConnector {
    async fn init(&self) -> Result<(), PairingError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.init_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_init {
            return Err(PairingError::InitFailed("relay unreachable".into()));
        }
        Ok(())
    }

    async fn open_modal(&self) -> Result<(), PairingError> {
        self.modal_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_modal {
            return Err(PairingError::ModalFailed("user rejected".into()));
        }
        let paired = self.pair_on_modal.lock().unwrap().take();
        if let Some(signer) = paired {
            *self.signer.lock().unwrap() = Some(signer);
        }
        Ok(())
    }

    async fn disconnect_all(&self) -> Result<(), PairingError> {
        self.disconnect_calls.fetch_add(1, Ordering::SeqCst);
        // The local signer set empties even when the remote teardown
        // fails, matching pairing-protocol client behavior.
        *self.signer.lock().unwrap() = None;
        if self.fail_disconnect {
            return Err(PairingError::DisconnectFailed("relay publish failed".into()));
        }
        Ok(())
    }

    fn signers(&self) -> Vec<Arc<dyn TransactionSigner>> {
        self.signer
            .lock()
            .unwrap()
            .iter()
            .map(|s| Arc::clone(s) as Arc<dyn TransactionSigner>)
            .collect()
    }
}

// ─── DisplayRecorder ─────────────────────────────────────────────────────────

/// Records every display-callback invocation.
#[derive(Default)]
pub struct DisplayRecorder {
    calls: Mutex<Vec<String>>,
}

impl DisplayRecorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn display_fn(recorder: &Arc<Self>) -> DisplayFn {
        let recorder = Arc::clone(recorder);
        Arc::new(move |value: &str| {
            recorder.calls.lock().unwrap().push(value.to_string());
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.calls.lock().unwrap().last().cloned()
    }
}

// ─── Client helper ───────────────────────────────────────────────────────────

pub fn build_client(
    connector: Arc<MockConnector>,
    store: Arc<MemoryStore>,
    recorder: &Arc<DisplayRecorder>,
) -> HashbridgeClient {
    HashbridgeClient::builder()
        .connector(connector)
        .store(store)
        .display(DisplayRecorder::display_fn(recorder))
        .build()
        .expect("client builds")
}
