// wallet-core/src/crypto/wif.rs
//
// WIF (Wallet Import Format)
//
// Layout inside the Base58Check envelope:
//   [version (1B)][private key (32B)]            -> 33 bytes, uncompressed
//   [version (1B)][private key (32B)][0x01 (1B)] -> 34 bytes, compressed

use crate::crypto::base58::Base58Check;
use crate::crypto::keys::PrivateKey;
use crate::error::{EncodingError, WalletError, WalletResult};

/// Trailing marker byte of a compressed-key WIF payload
pub const COMPRESSION_FLAG: u8 = 0x01;

const UNCOMPRESSED_LEN: usize = 1 + PrivateKey::LEN;
const COMPRESSED_LEN: usize = UNCOMPRESSED_LEN + 1;

/// Decoded WIF value. Built fresh on every encode/decode, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifKey {
    pub version: u8,
    pub private_key: PrivateKey,
    pub compressed: bool,
}

impl WifKey {
    pub fn new(version: u8, private_key: PrivateKey, compressed: bool) -> Self {
        Self {
            version,
            private_key,
            compressed,
        }
    }

    /// Private key as lowercase hex, the shape callers exchange at the API boundary.
    #[inline]
    pub fn private_key_hex(&self) -> String {
        self.private_key.to_hex()
    }

    #[inline]
    pub fn encode(&self) -> String {
        Wif::encode(self)
    }
}

/// WIF codec
pub struct Wif;

impl Wif {
    /// Encode a decoded WIF value.
    pub fn encode(key: &WifKey) -> String {
        let mut buffer = Vec::with_capacity(COMPRESSED_LEN);
        buffer.push(key.version);
        buffer.extend_from_slice(key.private_key.as_bytes());
        if key.compressed {
            buffer.push(COMPRESSION_FLAG);
        }
        Base58Check::encode(&buffer)
    }

    /// Encode from the hex form of the private key.
    ///
    /// # Errors
    /// `InvalidKeyLength` unless `private_key_hex` decodes to exactly 32 bytes.
    pub fn encode_hex(version: u8, private_key_hex: &str, compressed: bool) -> WalletResult<String> {
        let private_key = PrivateKey::from_hex(private_key_hex)?;
        Ok(Self::encode(&WifKey::new(version, private_key, compressed)))
    }

    /// Decode a WIF string.
    ///
    /// # Errors
    /// - Base58Check failures (`InvalidCharacter`, `InvalidChecksum`)
    /// - `InvalidCompressionFlag` for a 34-byte payload not ending in `0x01`
    /// - `InvalidEnvelopeLength` for any payload that is not 33 or 34 bytes
    pub fn decode(value: &str) -> WalletResult<WifKey> {
        let buffer = Base58Check::decode(value)?;

        let compressed = match buffer.len() {
            UNCOMPRESSED_LEN => false,
            COMPRESSED_LEN => {
                let flag = buffer[COMPRESSED_LEN - 1];
                if flag != COMPRESSION_FLAG {
                    return Err(WalletError::Encoding(
                        EncodingError::InvalidCompressionFlag(flag),
                    ));
                }
                true
            }
            actual => {
                return Err(WalletError::Encoding(EncodingError::InvalidEnvelopeLength {
                    expected: "33 or 34",
                    actual,
                }))
            }
        };

        let private_key = PrivateKey::from_slice(&buffer[1..UNCOMPRESSED_LEN])?;

        Ok(WifKey {
            version: buffer[0],
            private_key,
            compressed,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
