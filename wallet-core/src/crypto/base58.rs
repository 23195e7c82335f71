// wallet-core/src/crypto/base58.rs
//
// Base58 / Base58Check - Bitcoin alphabet
//
// Base58Check envelope:
// ┌──────────────────────┬──────────────────────────────────┐
// │ payload (N bytes)    │ hash256(payload)[0..4] (4 bytes) │
// └──────────────────────┴──────────────────────────────────┘
// Leading zero bytes survive as leading '1' characters.

use crate::crypto::hash::hash256;
use crate::error::{EncodingError, WalletError, WalletResult};

/// Size of the Base58Check checksum suffix
pub const CHECKSUM_LEN: usize = 4;

/// Plain Base58 codec (no checksum)
pub struct Base58;

impl Base58 {
    #[inline]
    pub fn encode(data: impl AsRef<[u8]>) -> String {
        bs58::encode(data.as_ref()).into_string()
    }

    /// Decode a Base58 string, rejecting anything outside the 58-symbol alphabet.
    pub fn decode(value: &str) -> WalletResult<Vec<u8>> {
        bs58::decode(value).into_vec().map_err(|e| match e {
            bs58::decode::Error::InvalidCharacter { character, index } => {
                WalletError::Encoding(EncodingError::InvalidCharacter { character, index })
            }
            bs58::decode::Error::NonAsciiCharacter { index } => {
                let character = value
                    .get(index..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                WalletError::Encoding(EncodingError::InvalidCharacter { character, index })
            }
            other => WalletError::Unknown(format!("base58 decode failed: {}", other)),
        })
    }
}

/// Base58 with a 4-byte double-SHA256 checksum
pub struct Base58Check;

impl Base58Check {
    /// Append the checksum and Base58-encode.
    ///
    /// Accepts raw bytes or a string (encoded as its UTF-8 bytes).
    pub fn encode(payload: impl AsRef<[u8]>) -> String {
        let payload = payload.as_ref();
        let mut buffer = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
        buffer.extend_from_slice(payload);
        buffer.extend_from_slice(&Self::checksum(payload));
        Base58::encode(&buffer)
    }

    /// Decode and strip the checksum.
    ///
    /// # Errors
    /// - `InvalidCharacter` for symbols outside the alphabet
    /// - `InvalidChecksum` when the trailing 4 bytes do not match, including
    ///   inputs too short to carry a checksum at all
    pub fn decode(value: &str) -> WalletResult<Vec<u8>> {
        let mut buffer = Base58::decode(value)?;
        if buffer.len() < CHECKSUM_LEN {
            return Err(WalletError::Encoding(EncodingError::InvalidChecksum));
        }

        let split = buffer.len() - CHECKSUM_LEN;
        if buffer[split..] != Self::checksum(&buffer[..split]) {
            return Err(WalletError::Encoding(EncodingError::InvalidChecksum));
        }

        buffer.truncate(split);
        Ok(buffer)
    }

    #[inline]
    fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
        let digest = hash256(payload);
        [digest[0], digest[1], digest[2], digest[3]]
    }
}

// =============================================================================
// TESTS
// =============================================================================
