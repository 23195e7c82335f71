// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! Encodings and key material behind every signatory:
//!
//! - **Byte codecs**: Base58 / Base58Check via [`Base58Check`], WIF via [`Wif`].
//! - **Encrypted keys**: BIP-38 (non EC-multiply) via [`Bip38`], with pluggable KDF and block cipher.
//! - **Keys & addresses**: secp256k1 [`PrivateKey`], legacy address derivation, [`CurveParams`].
//! - **HD derivation**: BIP-39 phrases via [`WalletMnemonic`], BIP-32 via [`Secp256k1Deriver`],
//!   BIP-44/49/84 paths via [`DerivationPaths`].
//! - **Identities**: credential → key/public key/address via [`Identity`].

pub mod base58;
pub mod bip38;
pub mod bytes;
pub mod curve;
pub mod hash;
pub mod identity;
pub mod key_deriver;
pub mod keys;
pub mod mnemonic;
pub mod paths;
pub mod wif;

// Re-exports for cleaner API access
pub use base58::{Base58, Base58Check};
pub use bip38::{Bip38, DecryptedKey, ScryptParams};
pub use bytes::FixedBytes;
pub use curve::{CurveParams, SECP256K1};
pub use identity::{DerivationLevels, Identity, IdentityOptions};
pub use key_deriver::{DerivedKey, Secp256k1Deriver};
pub use keys::PrivateKey;
pub use mnemonic::WalletMnemonic;
pub use paths::DerivationPaths;
pub use wif::{Wif, WifKey};
