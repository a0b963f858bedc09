//! # Hashbridge SDK
//!
//! A Rust SDK for wallet-paired Hedera dApps: pairing-session management
//! and NFT lifecycle orchestration over an external, user-controlled
//! signing wallet.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, network constants, pairing configuration
//! 2. **Ledger** — Typed requests, transaction envelopes, authority keys,
//!    the signer capability
//! 3. **Pairing** — Adapter over the external wallet-pairing capability
//! 4. **Session** — Connection state machine + durable persistence
//! 5. **High-Level Client** — `HashbridgeClient` with nested sub-clients
//!
//! The wallet connector and the ledger network stay behind trait objects;
//! the SDK never speaks their wire formats.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hashbridge::prelude::*;
//!
//! let client = HashbridgeClient::builder()
//!     .connector(connector)
//!     .config(PairingConfig::for_network(network::TESTNET, "project-id"))
//!     .build()?;
//!
//! client.session().restore_from_storage().await;
//! client.session().connect().await?;
//!
//! let report = client.lifecycle().run(LifecycleParams {
//!     name: "Example Collection".into(),
//!     symbol: "EXC".into(),
//!     amended_metadata: "ipfs://updated".into(),
//! }).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all modules.
pub mod shared;

/// Unified SDK error types.
pub mod error;

/// Network endpoint constants.
pub mod network;

/// Pairing configuration.
pub mod config;

// ── Layer 2: Ledger ──────────────────────────────────────────────────────────

/// Typed requests, envelopes, authority keys, signer capability.
pub mod ledger;

// ── Layer 3: Pairing ─────────────────────────────────────────────────────────

/// Adapter over the external wallet-pairing capability.
pub mod pairing;

// ── Layer 4: Session ─────────────────────────────────────────────────────────

/// Connection state machine and durable session persistence.
pub mod session;

/// Asset lifecycle pipeline: create → mint → amend.
pub mod lifecycle;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `HashbridgeClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{AccountId, TokenId, TransactionId};

    // Errors
    pub use crate::error::{LedgerError, PairingError, SdkError, StorageError};

    // Network + configuration
    pub use crate::config::{DappMetadata, PairingConfig};
    pub use crate::network::{NetworkProfile, MAINNET, TESTNET};

    // Ledger types
    pub use crate::ledger::{
        AuthorityKey, Receipt, SubmitResult, TokenCreateRequest, TokenMintRequest, TokenType,
        TokenUpdateNftsRequest, TransactionBody, TransactionEnvelope, TransactionSigner,
    };

    // Pairing
    pub use crate::pairing::{PairingClient, WalletConnector};

    // Session
    pub use crate::session::store::{KeyValueStore, MemoryStore, PersistedSession, SessionStore};
    pub use crate::session::{ConnectionState, DisplayFn, SessionController, NO_ACCOUNT_CONNECTED};

    // Lifecycle
    pub use crate::lifecycle::{
        AmendMetadataRequest, AssetClassCreated, Lifecycle, LifecycleParams, LifecycleReport,
        StageOutcome, UnitMinted,
    };

    // High-level client
    pub use crate::client::{HashbridgeClient, HashbridgeClientBuilder};
}
