//! Shared newtypes used across all modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw string format the ledger uses, so they can be used
//! directly in request bodies without conversion overhead.

pub mod timeout;

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── AccountId ───────────────────────────────────────────────────────────────

/// A ledger account identifier in `shard.realm.num` form (e.g. `"0.0.123"`).
///
/// Serializes transparently as a JSON string. Can be used as a HashMap key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for AccountId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AccountId(s.to_string()))
    }
}

impl Serialize for AccountId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AccountId(s))
    }
}

// ─── TokenId ─────────────────────────────────────────────────────────────────

/// An asset-class (token) identifier, same `shard.realm.num` form as accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenId(String);

impl TokenId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TokenId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TokenId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for TokenId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TokenId(s.to_string()))
    }
}

impl Serialize for TokenId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TokenId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TokenId(s))
    }
}

// ─── TransactionId ───────────────────────────────────────────────────────────

/// A transaction identifier: `{payer}@{seconds}.{nanos}`.
///
/// The payer prefix ties the transaction to the account paying for it; the
/// timestamp suffix makes it unique among that account's submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Stamp a fresh transaction id for `payer` from the current wall clock.
    pub fn generate(payer: &AccountId) -> Self {
        let now = Utc::now();
        Self(format!(
            "{}@{}.{:09}",
            payer,
            now.timestamp(),
            now.timestamp_subsec_nanos()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TransactionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for TransactionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TransactionId(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_serde() {
        let id = AccountId::from("0.0.123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"0.0.123\"");
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_token_id_serde() {
        let id = TokenId::from("0.0.500");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"0.0.500\"");
        let back: TokenId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_transaction_id_generate_format() {
        let payer = AccountId::from("0.0.123");
        let tx = TransactionId::generate(&payer);
        let (prefix, suffix) = tx.as_str().split_once('@').unwrap();
        assert_eq!(prefix, "0.0.123");
        let (secs, nanos) = suffix.split_once('.').unwrap();
        assert!(secs.parse::<i64>().is_ok());
        assert_eq!(nanos.len(), 9);
        assert!(nanos.parse::<u32>().is_ok());
    }
}
