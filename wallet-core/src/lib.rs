// wallet-core/src/lib.rs

//! Wallet signatory core
//!
//! Bitcoin-style key encodings and a credential-agnostic signing abstraction:
//!
//! - [`crypto`]: Base58Check, WIF, BIP38, secp256k1 keys, BIP-39/BIP-32 derivation
//! - [`network`]: per-network version bytes and coin types
//! - [`signatory`]: the [`Signatory`] facade over every supported credential kind
//!
//! Nothing here performs I/O. BIP38 encryption and decryption are CPU-bound
//! (scrypt); with the `async` feature they can be moved onto tokio's blocking pool.
//!
//! The crate logs through `tracing` and never installs a subscriber.

pub mod crypto;
pub mod error;
pub mod network;
pub mod signatory;

pub use error::{WalletError, WalletResult};
pub use network::NetworkParams;
pub use signatory::{Signatory, SignatoryFactory, SignatoryVariant};
