// wallet-core/src/crypto/keys.rs
//
// secp256k1 key material + legacy (P2PKH-style) address derivation
//
// # Flow:  Private Key (32B) → Public Key (33B / 65B SEC1) → HASH160 → Base58Check([version] || hash)

use crate::crypto::base58::Base58Check;
use crate::crypto::bytes::FixedBytes;
use crate::crypto::curve::SECP256K1;
use crate::crypto::hash::hash160;
use crate::error::{CryptoError, EncodingError, WalletError, WalletResult};
use zeroize::Zeroize;

/// Raw 32-byte secp256k1 private key.
///
/// Construction only checks the width; [`PrivateKey::validate`] (and every
/// derivation) also checks `0 < k < n`.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(FixedBytes<32>);

// Custom Debug - never print the key
impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PrivateKey").field(&"[REDACTED]").finish()
    }
}

impl PrivateKey {
    pub const LEN: usize = 32;

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(FixedBytes::new(bytes))
    }

    /// # Errors
    /// `InvalidKeyLength` unless `slice` is exactly 32 bytes.
    pub fn from_slice(slice: &[u8]) -> WalletResult<Self> {
        FixedBytes::from_slice(slice).map(Self).ok_or(WalletError::Crypto(
            CryptoError::InvalidKeyLength {
                expected: Self::LEN,
                actual: slice.len(),
            },
        ))
    }

    /// # Errors
    /// `InvalidHex` for non-hex input, `InvalidKeyLength` for valid hex of the wrong width.
    pub fn from_hex(value: &str) -> WalletResult<Self> {
        let mut decoded = hex::decode(value).map_err(|e| {
            WalletError::Encoding(EncodingError::InvalidHex(e.to_string()))
        })?;
        let key = Self::from_slice(&decoded);
        decoded.zeroize();
        key
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }

    /// Lowercase hex. Handle with care, this is the secret.
    #[inline]
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// Check the scalar lies in `[1, n - 1]`.
    pub fn validate(&self) -> WalletResult<()> {
        if SECP256K1.is_valid_scalar(self.as_bytes()) {
            Ok(())
        } else {
            Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(
                "private key is zero or not below the curve order".to_string(),
            )))
        }
    }

    /// SEC1 public key: 33 bytes when `compressed`, else 65.
    #[inline]
    pub fn public_key(&self, compressed: bool) -> WalletResult<Vec<u8>> {
        SECP256K1.multiply_generator(self.as_bytes(), compressed)
    }

    /// Legacy address for this key under a network version byte.
    pub fn address(&self, version: u8, compressed: bool) -> WalletResult<String> {
        let public_key = self.public_key(compressed)?;
        Ok(address_from_public_key(&public_key, version))
    }
}

/// `Base58Check([version] || hash160(public_key))`
pub fn address_from_public_key(public_key: &[u8], version: u8) -> String {
    let mut payload = [0u8; 21];
    payload[0] = version;
    payload[1..].copy_from_slice(&hash160(public_key));
    Base58Check::encode(payload)
}

/// Parse and validate a SEC1 public key given as hex.
pub fn parse_public_key(value: &str) -> WalletResult<Vec<u8>> {
    let bytes = hex::decode(value).map_err(|e| {
        WalletError::Crypto(CryptoError::InvalidPublicKey(format!("{}: {}", value, e)))
    })?;
    k256::PublicKey::from_sec1_bytes(&bytes).map_err(|e| {
        WalletError::Crypto(CryptoError::InvalidPublicKey(format!("{}: {}", value, e)))
    })?;
    Ok(bytes)
}

// =============================================================================
// TESTS
// =============================================================================
