//! Locally generated authority key pairs.
//!
//! An authority key authorizes one on-ledger capability (minting, metadata
//! amendment) independently of the account-level wallet signer. Keys are
//! generated fresh per pipeline run and never leave the process; only their
//! public halves go on ledger.

use std::str::FromStr;

use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier as _, VerifyingKey};
use rand::rngs::OsRng;

use crate::error::LedgerError;

/// Hex prefix of a PKCS#8-wrapped ed25519 private key.
const DER_PRIVATE_PREFIX: &str = "302e020100300506032b657004220420";

/// An ed25519 authority key pair.
pub struct AuthorityKey {
    signing: SigningKey,
}

impl AuthorityKey {
    /// Generate a fresh key pair from the system CSPRNG.
    pub fn generate() -> Self {
        Self {
            signing: SigningKey::generate(&mut OsRng),
        }
    }

    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing: SigningKey::from_bytes(&seed),
        }
    }

    /// Hex-encoded public key, as placed on ledger.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.signing.verifying_key().to_bytes())
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing.verifying_key()
    }

    /// Sign `message`, returning the detached signature bytes.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing.sign(message).to_bytes()
    }

    /// Verify a detached signature produced by [`AuthorityKey::sign`].
    pub fn verify(&self, message: &[u8], signature: &[u8; 64]) -> bool {
        let signature = Signature::from_bytes(signature);
        self.signing
            .verifying_key()
            .verify(message, &signature)
            .is_ok()
    }
}

impl FromStr for AuthorityKey {
    type Err = LedgerError;

    /// Parse an operator-supplied key string.
    ///
    /// Accepts a raw 32-byte hex seed or the same seed in PKCS#8 DER hex
    /// (the export format of most wallet tooling).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lowered = trimmed.to_ascii_lowercase();
        let seed_hex = lowered
            .strip_prefix(DER_PRIVATE_PREFIX)
            .unwrap_or(&lowered);

        let bytes = hex::decode(seed_hex)
            .map_err(|e| LedgerError::InvalidKey(format!("not hex: {e}")))?;
        let seed: [u8; 32] = bytes
            .try_into()
            .map_err(|_| LedgerError::InvalidKey("expected a 32-byte seed".to_string()))?;

        Ok(Self::from_seed(seed))
    }
}

impl std::fmt::Debug for AuthorityKey {
    // The secret half stays out of logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorityKey")
            .field("public_key", &self.public_key_hex())
            .finish_non_exhaustive()
    }
}
