//! Network endpoint constants.

/// Static endpoint profile for one ledger network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkProfile {
    /// Ledger network name (e.g. `"testnet"`).
    pub network: &'static str,
    /// JSON-RPC relay endpoint.
    pub json_rpc_url: &'static str,
    /// Mirror-node REST endpoint.
    pub mirror_node_url: &'static str,
    /// EVM chain id of the relay, hex encoded.
    pub chain_id: &'static str,
}

/// Hedera testnet endpoints.
pub const TESTNET: NetworkProfile = NetworkProfile {
    network: "testnet",
    json_rpc_url: "https://testnet.hashio.io/api",
    mirror_node_url: "https://testnet.mirrornode.hedera.com",
    chain_id: "0x128",
};

/// Hedera mainnet endpoints.
pub const MAINNET: NetworkProfile = NetworkProfile {
    network: "mainnet",
    json_rpc_url: "https://mainnet.hashio.io/api",
    mirror_node_url: "https://mainnet-public.mirrornode.hedera.com",
    chain_id: "0x127",
};

/// Default network for new configurations.
pub const DEFAULT_NETWORK: NetworkProfile = TESTNET;
