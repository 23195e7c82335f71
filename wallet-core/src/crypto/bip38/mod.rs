// wallet-core/src/crypto/bip38/mod.rs
//
// BIP38 - Passphrase-protected private keys (non-EC-multiply mode)
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0038.mediawiki
//
// Payload (39 bytes, before the Base58Check checksum):
// ┌────────┬──────┬──────┬────────────┬─────────────────────┐
// │ 0x01   │ type │ flag │ salt (4B)  │ encrypted key (32B) │
// └────────┴──────┴──────┴────────────┴─────────────────────┘
//   type: 0x42 = direct encryption, 0x43 = EC multiply (unsupported)
//   flag: 0xe0 = compressed, 0xc0 = uncompressed
//   salt: hash256(address(key))[0..4], doubles as the passphrase check
//
// Encryption:
//   derived       = KDF(passphrase, salt)           (scrypt N=16384, r=8, p=8)
//   encrypted key = E(derived[32..64], key XOR derived[0..32])

pub mod primitives;

pub use primitives::{Aes256Ecb, BlockCipher, KeyDerivation, Scrypt, ScryptParams};

use crate::crypto::base58::Base58Check;
use crate::crypto::hash::hash256;
use crate::crypto::keys::PrivateKey;
use crate::error::{Bip38Error, EncodingError, WalletError, WalletResult};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

pub const HEADER: u8 = 0x01;
pub const TYPE_NON_EC: u8 = 0x42;
pub const TYPE_EC_MULTIPLY: u8 = 0x43;
pub const FLAG_COMPRESSED: u8 = 0xe0;
pub const FLAG_UNCOMPRESSED: u8 = 0xc0;

/// Decoded payload length (checksum excluded)
pub const PAYLOAD_LEN: usize = 39;

/// Addresses used for the salt are always derived with the Bitcoin mainnet version.
const SALT_ADDRESS_VERSION: u8 = 0x00;

/// Result of a successful decryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptedKey {
    pub private_key: PrivateKey,
    pub compressed: bool,
}

impl DecryptedKey {
    #[inline]
    pub fn private_key_hex(&self) -> String {
        self.private_key.to_hex()
    }
}

/// BIP38 codec with injected KDF and block cipher.
///
/// Both `encrypt` and `decrypt` run the KDF, which with default parameters
/// takes hundreds of milliseconds of CPU. Keep them off latency-sensitive
/// threads (see `encrypt_async` / `decrypt_async`).
#[derive(Debug, Clone, Default)]
pub struct Bip38<K = Scrypt, C = Aes256Ecb> {
    kdf: K,
    cipher: C,
}

impl Bip38 {
    /// Standard BIP38: scrypt(16384, 8, 8) + AES-256-ECB.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: ScryptParams) -> Self {
        Self {
            kdf: Scrypt::new(params),
            cipher: Aes256Ecb,
        }
    }

    /// Structural check only, never fails loudly: the string must Base58Check-decode
    /// to 39 bytes with a `0x01` header, a known type and a flag valid for that type.
    pub fn verify(encoded: &str) -> bool {
        verify(encoded)
    }
}

impl<K: KeyDerivation, C: BlockCipher> Bip38<K, C> {
    pub fn with_primitives(kdf: K, cipher: C) -> Self {
        Self { kdf, cipher }
    }

    /// Encrypt a hex private key.
    ///
    /// # Errors
    /// `InvalidKeyLength` unless the hex decodes to 32 bytes.
    pub fn encrypt(
        &self,
        private_key_hex: &str,
        passphrase: &str,
        compressed: bool,
    ) -> WalletResult<String> {
        let private_key = PrivateKey::from_hex(private_key_hex)?;
        self.encrypt_key(&private_key, passphrase, compressed)
    }

    pub fn encrypt_key(
        &self,
        private_key: &PrivateKey,
        passphrase: &str,
        compressed: bool,
    ) -> WalletResult<String> {
        debug!(compressed, "bip38: encrypting private key");

        let salt = address_salt(private_key, compressed)?;
        let derived = self.derive(passphrase, &salt)?;
        let (half1, half2) = split_halves(&derived);

        let mut block = Zeroizing::new(*private_key.as_bytes());
        xor_in_place(&mut block, &half1);
        self.cipher.encrypt(&half2, &mut block)?;

        let mut payload = Zeroizing::new([0u8; PAYLOAD_LEN]);
        payload[0] = HEADER;
        payload[1] = TYPE_NON_EC;
        payload[2] = if compressed {
            FLAG_COMPRESSED
        } else {
            FLAG_UNCOMPRESSED
        };
        payload[3..7].copy_from_slice(&salt);
        payload[7..].copy_from_slice(&block[..]);

        Ok(Base58Check::encode(&payload[..]))
    }

    /// Decrypt a BIP38 string.
    ///
    /// # Errors
    /// - Base58Check failures
    /// - `InvalidEnvelopeLength` when the payload is not 39 bytes
    /// - `InvalidHeader` / `UnknownType` for foreign payloads
    /// - `UnsupportedScheme` for EC-multiply keys
    /// - `InvalidCompressionFlag` unless the flag is `0xe0` or `0xc0`
    /// - `PassphraseMismatch` when the recovered key does not hash to the salt
    pub fn decrypt(&self, encoded: &str, passphrase: &str) -> WalletResult<DecryptedKey> {
        let payload = Zeroizing::new(Base58Check::decode(encoded)?);

        if payload.len() != PAYLOAD_LEN {
            return Err(WalletError::Encoding(EncodingError::InvalidEnvelopeLength {
                expected: "39",
                actual: payload.len(),
            }));
        }
        if payload[0] != HEADER {
            return Err(WalletError::Bip38(Bip38Error::InvalidHeader(payload[0])));
        }
        match payload[1] {
            TYPE_NON_EC => {}
            TYPE_EC_MULTIPLY => return Err(WalletError::Bip38(Bip38Error::UnsupportedScheme)),
            other => return Err(WalletError::Bip38(Bip38Error::UnknownType(other))),
        }

        let compressed = match payload[2] {
            FLAG_COMPRESSED => true,
            FLAG_UNCOMPRESSED => false,
            other => {
                return Err(WalletError::Encoding(EncodingError::InvalidCompressionFlag(other)))
            }
        };
        let mut salt = [0u8; 4];
        salt.copy_from_slice(&payload[3..7]);
        let mut block = Zeroizing::new([0u8; 32]);
        block.copy_from_slice(&payload[7..]);

        debug!(compressed, "bip38: decrypting private key");

        let derived = self.derive(passphrase, &salt)?;
        let (half1, half2) = split_halves(&derived);

        self.cipher.decrypt(&half2, &mut block)?;
        xor_in_place(&mut block, &half1);

        let private_key = PrivateKey::from_bytes(*block);
        // A wrong passphrase yields garbage that may not even be a valid scalar
        let matches = address_salt(&private_key, compressed)
            .map(|expected| expected == salt)
            .unwrap_or(false);
        if !matches {
            debug!("bip38: recovered key does not match address salt");
            return Err(WalletError::Bip38(Bip38Error::PassphraseMismatch));
        }

        Ok(DecryptedKey {
            private_key,
            compressed,
        })
    }

    fn derive(&self, passphrase: &str, salt: &[u8; 4]) -> WalletResult<Zeroizing<[u8; 64]>> {
        let normalized = Zeroizing::new(passphrase.nfc().collect::<String>());
        self.kdf.derive(normalized.as_bytes(), salt)
    }
}

#[cfg(feature = "async")]
impl<K, C> Bip38<K, C>
where
    K: KeyDerivation + Clone + 'static,
    C: BlockCipher + Clone + 'static,
{
    /// [`Bip38::encrypt`] on tokio's blocking pool.
    pub async fn encrypt_async(
        &self,
        private_key_hex: String,
        passphrase: String,
        compressed: bool,
    ) -> WalletResult<String> {
        let codec = self.clone();
        let private_key_hex = Zeroizing::new(private_key_hex);
        let passphrase = Zeroizing::new(passphrase);
        tokio::task::spawn_blocking(move || {
            codec.encrypt(&private_key_hex, &passphrase, compressed)
        })
        .await
        .map_err(|e| WalletError::Unknown(format!("bip38 worker failed: {}", e)))?
    }

    /// [`Bip38::decrypt`] on tokio's blocking pool.
    pub async fn decrypt_async(
        &self,
        encoded: String,
        passphrase: String,
    ) -> WalletResult<DecryptedKey> {
        let codec = self.clone();
        let passphrase = Zeroizing::new(passphrase);
        tokio::task::spawn_blocking(move || codec.decrypt(&encoded, &passphrase))
            .await
            .map_err(|e| WalletError::Unknown(format!("bip38 worker failed: {}", e)))?
    }
}

/// See [`Bip38::verify`].
pub fn verify(encoded: &str) -> bool {
    let payload = match Base58Check::decode(encoded) {
        Ok(payload) => payload,
        Err(e) => {
            debug!(error = %e, "bip38: verify rejected undecodable input");
            return false;
        }
    };

    if payload.len() != PAYLOAD_LEN {
        debug!(len = payload.len(), "bip38: verify rejected payload length");
        return false;
    }
    if payload[0] != HEADER {
        debug!(header = payload[0], "bip38: verify rejected header");
        return false;
    }

    let (kind, flag) = (payload[1], payload[2]);
    let valid_flag = match kind {
        TYPE_NON_EC => flag == FLAG_COMPRESSED || flag == FLAG_UNCOMPRESSED,
        // EC multiply only sets the compression (0x20) and lot/sequence (0x04) bits
        TYPE_EC_MULTIPLY => flag & !0x24 == 0,
        _ => {
            debug!(kind, "bip38: verify rejected unknown type");
            return false;
        }
    };
    if !valid_flag {
        debug!(kind, flag, "bip38: verify rejected flag");
    }
    valid_flag
}

/// `hash256(address)[0..4]` for the mainnet legacy address of `private_key`.
fn address_salt(private_key: &PrivateKey, compressed: bool) -> WalletResult<[u8; 4]> {
    let address = private_key.address(SALT_ADDRESS_VERSION, compressed)?;
    let digest = hash256(address.as_bytes());
    Ok([digest[0], digest[1], digest[2], digest[3]])
}

fn split_halves(derived: &[u8; 64]) -> (Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>) {
    let mut half1 = Zeroizing::new([0u8; 32]);
    let mut half2 = Zeroizing::new([0u8; 32]);
    half1.copy_from_slice(&derived[..32]);
    half2.copy_from_slice(&derived[32..]);
    (half1, half2)
}

#[inline]
fn xor_in_place(block: &mut [u8; 32], mask: &[u8; 32]) {
    block
        .iter_mut()
        .zip(mask.iter())
        .for_each(|(byte, m)| *byte ^= m);
}

// =============================================================================
// TESTS
// =============================================================================
