// wallet-core/src/crypto/paths.rs
//
// Derivation Paths - BIP-44 (Purpose), SLIP-44 (Coin Types), BIP-49/84 (SegWit)

use crate::crypto::identity::{DerivationLevels, IdentityOptions};

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const BITCOIN: u32 = 0;
    /// Shared by every testnet
    pub const TESTNET: u32 = 1;
    pub const ARK: u32 = 111;
}

/// BIP purpose levels
pub mod purpose {
    pub const BIP44: u32 = 44;
    pub const BIP49: u32 = 49;
    pub const BIP84: u32 = 84;
}

// =============================================================================
// DERIVATION PATHS
// =============================================================================
/// # Conventions
/// - BIP-44: `m/44'/coin'/account'/change/index` (legacy addresses)
/// - BIP-49: `m/49'/coin'/account'/change/index` (nested SegWit)
/// - BIP-84: `m/84'/coin'/account'/change/index` (native SegWit)
pub struct DerivationPaths;

impl DerivationPaths {
    /// `m/purpose'/coin_type'/account'/change/index`
    #[inline]
    pub fn bip44(purpose: u32, coin_type: u32, account: u32, change: u32, index: u32) -> String {
        format!(
            "m/{}'/{}'/{}'/{}/{}",
            purpose, coin_type, account, change, index
        )
    }

    #[inline]
    pub fn from_levels(purpose: u32, coin_type: u32, levels: &DerivationLevels) -> String {
        Self::bip44(
            purpose,
            coin_type,
            levels.account,
            levels.change,
            levels.address_index,
        )
    }

    /// Pick the path requested by identity options.
    ///
    /// BIP-84 wins over BIP-49, which wins over BIP-44. A bare `bip39` flag
    /// means BIP-44 account 0. `None` when the options ask for no HD derivation.
    pub fn from_options(options: &IdentityOptions, coin_type: u32) -> Option<String> {
        if let Some(levels) = &options.bip84 {
            return Some(Self::from_levels(purpose::BIP84, coin_type, levels));
        }
        if let Some(levels) = &options.bip49 {
            return Some(Self::from_levels(purpose::BIP49, coin_type, levels));
        }
        if let Some(levels) = &options.bip44 {
            return Some(Self::from_levels(purpose::BIP44, coin_type, levels));
        }
        if options.bip39 {
            return Some(Self::from_levels(
                purpose::BIP44,
                coin_type,
                &DerivationLevels::default(),
            ));
        }
        None
    }
}

// =============================================================================
// TESTS
// =============================================================================
