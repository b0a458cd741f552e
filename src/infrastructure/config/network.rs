//! Starknet network configuration.

use serde::Deserialize;

use crate::port::BlockTag;

/// Public Starknet mainnet chain identifier.
pub const CHAIN_ID_MAINNET: &str = "SN_MAIN";

/// Starknet Sepolia testnet chain identifier.
pub const CHAIN_ID_SEPOLIA: &str = "SN_SEPOLIA";

/// Connection settings handed to whoever builds the network provider.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint. Overridden by `STARKNET_RPC_URL` when set.
    #[serde(default)]
    pub rpc_url: String,

    #[serde(default = "default_chain_id")]
    pub chain_id: String,

    /// Block reads are evaluated against: `latest` or `pending`.
    #[serde(default = "default_block")]
    pub block: BlockTag,
}

fn default_chain_id() -> String {
    CHAIN_ID_MAINNET.to_string()
}

fn default_block() -> BlockTag {
    BlockTag::Latest
}

impl NetworkConfig {
    #[must_use]
    pub fn is_mainnet(&self) -> bool {
        self.chain_id == CHAIN_ID_MAINNET
    }

    #[must_use]
    pub fn is_testnet(&self) -> bool {
        self.chain_id == CHAIN_ID_SEPOLIA
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: String::new(),
            chain_id: default_chain_id(),
            block: default_block(),
        }
    }
}
