// wallet-core/src/crypto/bytes.rs
//
// Fixed-length byte arrays
//
// Every binary field in the key formats has a fixed width (32-byte keys,
// 4-byte salts and checksums). `FixedBytes<N>` makes that width part of the
// type: the only way in is a length-checked constructor.

use crate::error::{EncodingError, WalletError, WalletResult};
use zeroize::Zeroize;

/// Immutable byte array of exactly `N` bytes, zeroized on drop.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FixedBytes<const N: usize>([u8; N]);

impl<const N: usize> FixedBytes<N> {
    pub const LEN: usize = N;

    #[inline]
    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Copy from a slice, `None` unless `slice.len() == N`.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; N] = slice.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Decode a hex string, `Ok(None)` when it is valid hex of the wrong width.
    pub fn from_hex(value: &str) -> WalletResult<Option<Self>> {
        let decoded = hex::decode(value)
            .map_err(|e| WalletError::Encoding(EncodingError::InvalidHex(e.to_string())))?;
        Ok(Self::from_slice(&decoded))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl<const N: usize> AsRef<[u8]> for FixedBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for FixedBytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> std::fmt::Debug for FixedBytes<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FixedBytes<{}>({})", N, hex::encode(self.0))
    }
}

impl<const N: usize> Zeroize for FixedBytes<N> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<const N: usize> Drop for FixedBytes<N> {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
