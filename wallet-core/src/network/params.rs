// wallet-core/src/network/params.rs
//
// Network encoding parameters + presets
//
// Hosts either pick a preset or ship their own description as JSON:
//   {"id":"ark.devnet","name":"ARK Development Network","pubKeyHash":30,"wif":170,"slip44":1}

use crate::crypto::paths::coin_type;
use crate::error::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkParams {
    /// Unique identifier (e.g. "ark.mainnet")
    pub id: String,
    /// Display name
    pub name: String,
    /// Address version byte
    pub pub_key_hash: u8,
    /// WIF version byte
    pub wif: u8,
    /// SLIP-44 coin type used in derivation paths
    pub slip44: u32,
}

impl NetworkParams {
    // =========================================================================
    // PRESETS
    // =========================================================================

    pub fn bitcoin() -> Self {
        Self {
            id: "btc.livenet".to_string(),
            name: "Bitcoin".to_string(),
            pub_key_hash: 0x00,
            wif: 0x80,
            slip44: coin_type::BITCOIN,
        }
    }

    pub fn bitcoin_testnet() -> Self {
        Self {
            id: "btc.testnet".to_string(),
            name: "Bitcoin Testnet".to_string(),
            pub_key_hash: 0x6f,
            wif: 0xef,
            slip44: coin_type::TESTNET,
        }
    }

    pub fn ark_mainnet() -> Self {
        Self {
            id: "ark.mainnet".to_string(),
            name: "ARK Public Network".to_string(),
            pub_key_hash: 23,
            wif: 170,
            slip44: coin_type::ARK,
        }
    }

    pub fn ark_devnet() -> Self {
        Self {
            id: "ark.devnet".to_string(),
            name: "ARK Development Network".to_string(),
            pub_key_hash: 30,
            wif: 170,
            slip44: coin_type::TESTNET,
        }
    }

    /// All built-in presets
    pub fn presets() -> Vec<Self> {
        vec![
            Self::bitcoin(),
            Self::bitcoin_testnet(),
            Self::ark_mainnet(),
            Self::ark_devnet(),
        ]
    }

    /// Look up a preset by id.
    pub fn by_id(id: &str) -> Option<Self> {
        Self::presets().into_iter().find(|network| network.id == id)
    }

    // =========================================================================
    // LOADING
    // =========================================================================

    /// Load a host-supplied network description.
    ///
    /// # Errors
    /// `WalletError::Config` for malformed JSON or missing/out-of-range fields.
    pub fn from_json(json: &str) -> WalletResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| WalletError::Config(format!("Invalid network parameters: {}", e)))
    }

    pub fn to_json(&self) -> WalletResult<String> {
        serde_json::to_string(self)
            .map_err(|e| WalletError::Config(format!("Cannot serialize network parameters: {}", e)))
    }
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self::ark_mainnet()
    }
}

// =============================================================================
// TESTS
// =============================================================================
