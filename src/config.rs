//! Pairing configuration.
//!
//! Construction parameters for the external wallet-pairing capability,
//! passed as an explicit struct instead of being baked into a load-time
//! singleton. The defaults describe a testnet dApp; every field can be
//! overridden before the connector is built.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::network::{NetworkProfile, DEFAULT_NETWORK};

/// JSON-RPC methods a paired wallet is asked to support.
pub const SUPPORTED_METHODS: &[&str] = &[
    "hedera_getNodeAddresses",
    "hedera_executeTransaction",
    "hedera_signMessage",
    "hedera_signAndExecuteQuery",
    "hedera_signAndExecuteTransaction",
    "hedera_signTransaction",
];

/// Session events the dApp subscribes to.
pub const SUPPORTED_EVENTS: &[&str] = &["chainChanged", "accountsChanged"];

/// dApp metadata shown inside the wallet's pairing prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DappMetadata {
    pub name: String,
    pub description: String,
    pub url: String,
    pub icons: Vec<String>,
}

impl Default for DappMetadata {
    fn default() -> Self {
        Self {
            name: "Hashbridge dApp".to_string(),
            description: "Wallet-paired Hedera dApp".to_string(),
            url: "https://localhost".to_string(),
            icons: vec!["https://localhost/logo192.png".to_string()],
        }
    }
}

/// Construction parameters for the wallet-pairing capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingConfig {
    /// Target ledger network name.
    pub network: String,
    /// Pairing-relay project identifier.
    pub project_id: String,
    /// JSON-RPC methods requested from the wallet.
    pub supported_methods: BTreeSet<String>,
    /// Session events subscribed to.
    pub supported_events: BTreeSet<String>,
    /// CAIP chain identifiers the session may address.
    pub chains: BTreeSet<String>,
    /// dApp metadata shown in the wallet.
    pub metadata: DappMetadata,
}

impl PairingConfig {
    /// Config for a given network profile with the standard method/event sets.
    pub fn for_network(profile: NetworkProfile, project_id: impl Into<String>) -> Self {
        Self {
            network: profile.network.to_string(),
            project_id: project_id.into(),
            supported_methods: SUPPORTED_METHODS.iter().map(|m| m.to_string()).collect(),
            supported_events: SUPPORTED_EVENTS.iter().map(|e| e.to_string()).collect(),
            chains: [format!("hedera:{}", profile.network)].into_iter().collect(),
            metadata: DappMetadata::default(),
        }
    }
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self::for_network(DEFAULT_NETWORK, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_testnet() {
        let config = PairingConfig::default();
        assert_eq!(config.network, "testnet");
        assert!(config.chains.contains("hedera:testnet"));
    }

    #[test]
    fn test_default_method_and_event_sets() {
        let config = PairingConfig::default();
        assert!(config
            .supported_methods
            .contains("hedera_signAndExecuteTransaction"));
        assert_eq!(config.supported_methods.len(), SUPPORTED_METHODS.len());
        assert!(config.supported_events.contains("accountsChanged"));
        assert!(config.supported_events.contains("chainChanged"));
    }

    #[test]
    fn test_for_network_mainnet_chain() {
        let config = PairingConfig::for_network(crate::network::MAINNET, "proj");
        assert_eq!(config.project_id, "proj");
        assert!(config.chains.contains("hedera:mainnet"));
    }
}
