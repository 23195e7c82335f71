// wallet-core/src/crypto/hash.rs
//
// Hash helpers: SHA-256, double SHA-256 (checksums, BIP38 salt), HASH160 (addresses)

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256 over raw bytes or a UTF-8 string.
#[inline]
pub fn sha256(data: impl AsRef<[u8]>) -> [u8; 32] {
    Sha256::digest(data.as_ref()).into()
}

/// `sha256(sha256(data))`
#[inline]
pub fn hash256(data: impl AsRef<[u8]>) -> [u8; 32] {
    sha256(sha256(data))
}

/// `ripemd160(sha256(data))`
#[inline]
pub fn hash160(data: impl AsRef<[u8]>) -> [u8; 20] {
    Ripemd160::digest(sha256(data)).into()
}
