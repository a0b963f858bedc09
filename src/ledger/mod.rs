//! Ledger layer — typed requests, transaction envelopes, authority keys,
//! and the signer capability the wallet provides.
//!
//! The network itself is opaque: everything that touches the wire goes
//! through a [`TransactionSigner`], the authorization handle handed out by
//! the pairing capability for the current account.

pub mod envelope;
pub mod keys;
pub mod requests;

pub use envelope::{AuthoritySignature, TransactionEnvelope};
pub use keys::AuthorityKey;
pub use requests::{
    TokenCreateRequest, TokenMintRequest, TokenType, TokenUpdateNftsRequest, TransactionBody,
    DEFAULT_AUTO_RENEW_PERIOD_SECS,
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::shared::{AccountId, TokenId, TransactionId};

/// Receipt status value for an accepted transaction.
pub const STATUS_SUCCESS: &str = "SUCCESS";

/// Handle returned by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub transaction_id: TransactionId,
}

/// Post-submission confirmation record from the ledger network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub status: String,
    /// Assigned asset-class id, present for creation transactions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<TokenId>,
    /// Serial numbers assigned to minted units.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub serials: Vec<u64>,
    /// Resulting total supply of the asset class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_supply: Option<u64>,
}

impl Receipt {
    pub fn success() -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            token_id: None,
            serials: Vec::new(),
            total_supply: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// The wallet-held authorization handle for one ledger account.
///
/// Obtained from the pairing capability's signer sequence; never persisted.
/// It both authorizes transactions and carries them to the network, so
/// receipt queries go through it as well.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    /// The account this signer authorizes for.
    fn account_id(&self) -> AccountId;

    /// Fill network-facing fields (transaction id, node routing) while the
    /// envelope freezes. Implementations must keep a pre-stamped
    /// transaction id intact.
    async fn populate(&self, envelope: &mut TransactionEnvelope) -> Result<(), LedgerError>;

    /// Sign with the wallet and submit the frozen envelope.
    async fn execute(&self, envelope: &TransactionEnvelope) -> Result<SubmitResult, LedgerError>;

    /// Wait for the network receipt of a prior submission.
    async fn receipt(&self, submitted: &SubmitResult) -> Result<Receipt, LedgerError>;
}
