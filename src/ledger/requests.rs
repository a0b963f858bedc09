//! Typed transaction request bodies.
//!
//! These are the construction side of the ledger capability: plain data
//! describing what to submit. Wire encoding is the signer's concern.

use serde::{Deserialize, Serialize};

use crate::shared::{AccountId, TokenId};

/// Default auto-renew period for new asset classes (90 days).
pub const DEFAULT_AUTO_RENEW_PERIOD_SECS: u64 = 7_776_000;

/// Asset-class type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    FungibleCommon,
    NonFungibleUnique,
}

/// Create a new asset class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCreateRequest {
    pub name: String,
    pub symbol: String,
    pub token_type: TokenType,
    /// Account that holds newly minted units.
    pub treasury_account_id: AccountId,
    /// Account charged for the periodic renewal fee.
    pub auto_renew_account_id: AccountId,
    pub auto_renew_period_secs: u64,
    /// Hex public key that must co-sign mints.
    pub supply_key: String,
    /// Hex public key that must co-sign metadata amendments.
    pub metadata_key: String,
}

/// Mint one unit of an existing asset class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMintRequest {
    pub token_id: TokenId,
    /// Metadata payload of the minted unit, already encoded.
    pub metadata: Vec<u8>,
}

/// Amend the metadata of already-minted units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUpdateNftsRequest {
    pub token_id: TokenId,
    pub serial_numbers: Vec<u64>,
    /// Replacement metadata, already encoded.
    pub metadata: Vec<u8>,
}

/// The body of a submittable transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionBody {
    TokenCreate(TokenCreateRequest),
    TokenMint(TokenMintRequest),
    TokenUpdateNfts(TokenUpdateNftsRequest),
}

impl TransactionBody {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TokenCreate(_) => "token_create",
            Self::TokenMint(_) => "token_mint",
            Self::TokenUpdateNfts(_) => "token_update_nfts",
        }
    }
}
