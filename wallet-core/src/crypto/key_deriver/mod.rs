// wallet-core/src/crypto/key_deriver/mod.rs
//
// Hierarchical deterministic key derivation
//
//   Seed (64 bytes from a BIP-39 mnemonic)
//        │
//        ▼
//   secp256k1 BIP-32 ── m/44'/coin'/account'/change/index  (legacy)
//                     ├ m/49'/coin'/account'/change/index  (nested SegWit)
//                     └ m/84'/coin'/account'/change/index  (native SegWit)
//
// Every signatory in this crate lives on secp256k1, so there is a single deriver.

pub mod secp256k1;

pub use secp256k1::Secp256k1Deriver;

use crate::crypto::keys::PrivateKey;

/// BIP-39 seed width
pub const SEED_LEN: usize = 64;

/// Derived private key + the path that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedKey {
    pub private_key: PrivateKey,
    pub path: String,
}
