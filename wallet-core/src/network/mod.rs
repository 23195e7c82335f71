// wallet-core/src/network/mod.rs
//
// Network Module - per-chain encoding parameters
//
// Signatories never talk to a node; all they need from a network is which
// version bytes to stamp on addresses and WIF keys, and which SLIP-44 coin
// type to use in HD paths.

pub mod params;

pub use params::NetworkParams;
