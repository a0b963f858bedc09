//! Transaction envelope — the freeze/sign/execute surface.
//!
//! An envelope carries one request body through the submission flow:
//! freeze locks the content under the wallet signer, additional authority
//! keys then co-sign the frozen bytes, and execution hands the whole thing
//! to the signer for network submission.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::ledger::keys::AuthorityKey;
use crate::ledger::requests::TransactionBody;
use crate::ledger::TransactionSigner;
use crate::shared::{AccountId, TransactionId};

/// A detached authority co-signature over the frozen envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoritySignature {
    /// Hex public key of the signing authority.
    pub public_key: String,
    /// Hex ed25519 signature over the canonical bytes.
    pub signature: String,
}

/// Canonical form covered by authority signatures.
#[derive(Serialize)]
struct CanonicalPayload<'a> {
    transaction_id: Option<&'a TransactionId>,
    body: &'a TransactionBody,
}

/// One transaction on its way to the ledger.
#[derive(Debug, Clone)]
pub struct TransactionEnvelope {
    transaction_id: Option<TransactionId>,
    body: TransactionBody,
    frozen: bool,
    signatures: Vec<AuthoritySignature>,
}

impl TransactionEnvelope {
    pub fn new(body: TransactionBody) -> Self {
        Self {
            transaction_id: None,
            body,
            frozen: false,
            signatures: Vec::new(),
        }
    }

    /// Pre-stamp an explicit transaction id before freezing.
    pub fn with_transaction_id(mut self, id: TransactionId) -> Self {
        self.transaction_id = Some(id);
        self
    }

    pub fn body(&self) -> &TransactionBody {
        &self.body
    }

    pub fn transaction_id(&self) -> Option<&TransactionId> {
        self.transaction_id.as_ref()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn signatures(&self) -> &[AuthoritySignature] {
        &self.signatures
    }

    /// Stamp a fresh transaction id for `payer` unless one is already set.
    ///
    /// Called by signer implementations while populating the envelope.
    pub fn ensure_transaction_id(&mut self, payer: &AccountId) {
        if self.transaction_id.is_none() {
            self.transaction_id = Some(TransactionId::generate(payer));
        }
    }

    /// Lock the envelope content under `signer`. At most once per envelope.
    pub async fn freeze_with_signer(
        &mut self,
        signer: &dyn TransactionSigner,
    ) -> Result<(), LedgerError> {
        if self.frozen {
            return Err(LedgerError::AlreadyFrozen);
        }
        signer.populate(self).await?;
        self.frozen = true;
        Ok(())
    }

    /// Co-sign the frozen envelope with an authority key.
    pub fn sign(&mut self, key: &AuthorityKey) -> Result<(), LedgerError> {
        if !self.frozen {
            return Err(LedgerError::NotFrozen);
        }
        let message = self.canonical_bytes()?;
        let signature = key.sign(&message);
        self.signatures.push(AuthoritySignature {
            public_key: key.public_key_hex(),
            signature: hex::encode(signature),
        });
        Ok(())
    }

    /// Submit the frozen envelope through `signer`.
    pub async fn execute_with_signer(
        &self,
        signer: &dyn TransactionSigner,
    ) -> Result<crate::ledger::SubmitResult, LedgerError> {
        if !self.frozen {
            return Err(LedgerError::NotFrozen);
        }
        signer.execute(self).await
    }

    /// The byte form covered by authority co-signatures.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, LedgerError> {
        let payload = CanonicalPayload {
            transaction_id: self.transaction_id.as_ref(),
            body: &self.body,
        };
        Ok(serde_json::to_vec(&payload)?)
    }
}
