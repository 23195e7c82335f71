// wallet-core/src/crypto/bip38/primitives.rs
//
// Pluggable KDF + block cipher for the BIP38 codec
//
// The codec only needs two capabilities:
// - a 64-byte key stretch of (passphrase, 4-byte address salt)
// - a keyed permutation over one 32-byte masked key
// Production uses scrypt + AES-256-ECB; tests may inject deterministic fakes.

use crate::error::{CryptoError, WalletError, WalletResult};
use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Passphrase stretching step of BIP38.
pub trait KeyDerivation: Send + Sync {
    /// Derive 64 bytes: `[0..32]` is the XOR mask, `[32..64]` the cipher key.
    fn derive(&self, passphrase: &[u8], salt: &[u8; 4]) -> WalletResult<Zeroizing<[u8; 64]>>;
}

/// Block encryption step of BIP38, applied to exactly one 32-byte block.
pub trait BlockCipher: Send + Sync {
    fn encrypt(&self, key: &[u8; 32], block: &mut [u8; 32]) -> WalletResult<()>;
    fn decrypt(&self, key: &[u8; 32], block: &mut [u8; 32]) -> WalletResult<()>;
}

// =============================================================================
// SCRYPT
// =============================================================================

/// scrypt cost parameters (`N = 2^log_n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScryptParams {
    pub log_n: u8,
    pub r: u32,
    pub p: u32,
}

impl Default for ScryptParams {
    /// BIP38 standard: N = 16384, r = 8, p = 8
    fn default() -> Self {
        Self {
            log_n: 14,
            r: 8,
            p: 8,
        }
    }
}

impl ScryptParams {
    /// Cheap parameters for tests and constrained hosts.
    ///
    /// Output is NOT interoperable with other BIP38 implementations.
    pub fn light() -> Self {
        Self {
            log_n: 8,
            r: 8,
            p: 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scrypt {
    params: ScryptParams,
}

impl Scrypt {
    pub fn new(params: ScryptParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> ScryptParams {
        self.params
    }
}

impl KeyDerivation for Scrypt {
    fn derive(&self, passphrase: &[u8], salt: &[u8; 4]) -> WalletResult<Zeroizing<[u8; 64]>> {
        let params = scrypt::Params::new(self.params.log_n, self.params.r, self.params.p, 64)
            .map_err(|e| {
                WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Invalid scrypt params {:?}: {}",
                    self.params, e
                )))
            })?;

        let mut derived = Zeroizing::new([0u8; 64]);
        scrypt::scrypt(passphrase, salt, &params, &mut derived[..]).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!("scrypt failed: {}", e)))
        })?;

        Ok(derived)
    }
}

// =============================================================================
// AES-256-ECB
// =============================================================================

/// AES-256 applied independently to each 16-byte half (ECB, no IV).
///
/// Only sound here because the input is a single pseudo-random masked key;
/// do not reuse for general messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes256Ecb;

impl BlockCipher for Aes256Ecb {
    fn encrypt(&self, key: &[u8; 32], block: &mut [u8; 32]) -> WalletResult<()> {
        let cipher = Aes256::new(GenericArray::from_slice(key));
        for half in block.chunks_exact_mut(16) {
            cipher.encrypt_block(GenericArray::from_mut_slice(half));
        }
        Ok(())
    }

    fn decrypt(&self, key: &[u8; 32], block: &mut [u8; 32]) -> WalletResult<()> {
        let cipher = Aes256::new(GenericArray::from_slice(key));
        for half in block.chunks_exact_mut(16) {
            cipher.decrypt_block(GenericArray::from_mut_slice(half));
        }
        Ok(())
    }
}
