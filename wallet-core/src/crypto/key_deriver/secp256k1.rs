// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation - BIP-32
//
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use super::{DerivedKey, SEED_LEN};
use crate::crypto::keys::PrivateKey;
use crate::error::{CryptoError, WalletError, WalletResult};
use bip32::{DerivationPath, XPrv};
use std::str::FromStr;
use tracing::trace;

/// secp256k1 Key Deriver - BIP-32 Standard
///
/// Intermediate extended keys are dropped as soon as the next level is derived;
/// `bip32::XPrv` zeroizes itself on drop.
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Derive a single private key from `seed` along `path` (e.g. `m/44'/111'/0'/0/0`).
    ///
    /// # Errors
    /// `DerivationFailed` for a seed that is not 64 bytes, an unparsable path,
    /// or the (astronomically rare) invalid child.
    pub fn derive(seed: &[u8], path: &str) -> WalletResult<DerivedKey> {
        if seed.len() != SEED_LEN {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid seed length: expected {} bytes, got {}",
                SEED_LEN,
                seed.len()
            ))));
        }

        let derivation_path = Self::parse_path(path)?;
        trace!(path, "bip32: deriving child key");

        let mut child = XPrv::new(seed).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Failed to create master key: {}",
                e
            )))
        })?;

        for child_number in derivation_path.iter() {
            child = child.derive_child(child_number).map_err(|e| {
                WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Child derivation failed at {}: {}",
                    child_number, e
                )))
            })?;
        }

        let key_bytes: [u8; 32] = child.private_key().to_bytes().into();
        Ok(DerivedKey {
            private_key: PrivateKey::from_bytes(key_bytes),
            path: path.to_string(),
        })
    }

    /// Parse a BIP-32 path string.
    pub fn parse_path(path: &str) -> WalletResult<DerivationPath> {
        DerivationPath::from_str(path).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid path '{}': {}",
                path, e
            )))
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
